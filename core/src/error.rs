use thiserror::Error;

/// Read failures observed while scanning, attributable to either input.
///
/// A failing source looks like end-of-input to the scan loop, so the scan
/// always terminates cleanly and the channel always closes; failures are
/// only reported afterwards, through the session's health query. When both
/// inputs fail, both messages are kept, space-separated.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The first input failed mid-read.
    #[error("{0}")]
    Source1(String),
    /// The second input failed mid-read.
    #[error("{0}")]
    Source2(String),
    /// Both inputs failed mid-read.
    #[error("{0} {1}")]
    Both(String, String),
}

impl ScanError {
    pub(crate) fn combine(
        err1: Option<std::io::Error>,
        err2: Option<std::io::Error>,
    ) -> Option<Self> {
        match (err1, err2) {
            (Some(e1), Some(e2)) => Some(Self::Both(e1.to_string(), e2.to_string())),
            (Some(e1), None) => Some(Self::Source1(e1.to_string())),
            (None, Some(e2)) => Some(Self::Source2(e2.to_string())),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_no_failures() {
        assert!(ScanError::combine(None, None).is_none());
    }

    #[test]
    fn test_single_failure_keeps_its_message() {
        let err = ScanError::combine(Some(io::Error::other("boom")), None).unwrap();
        assert_eq!(err.to_string(), "boom");

        let err = ScanError::combine(None, Some(io::Error::other("bang"))).unwrap();
        assert_eq!(err.to_string(), "bang");
    }

    #[test]
    fn test_both_failures_space_separated() {
        let err = ScanError::combine(
            Some(io::Error::other("boom")),
            Some(io::Error::other("bang")),
        )
        .unwrap();
        assert_eq!(err.to_string(), "boom bang");
    }
}
