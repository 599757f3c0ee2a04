//! Streaming line-by-line comparison of two text sources.
//!
//! Compares two inputs in lockstep, one line pair at a time, and reports
//! each pair that diverges: the line ordinal, the codepoint offset of the
//! first mismatch, and both line texts. When one input ends before the
//! other, a final one-sided record reports the asymmetry. Inputs are never
//! fully buffered, so arbitrarily large (or endless) streams are fine.
//!
//! `\n`, `\r`, and `\r\n` are all treated as equivalent line separators, and
//! mismatch offsets count codepoints rather than bytes.
//!
//! ```
//! use linediff::TextDiff;
//!
//! let session = TextDiff::new("foo\nbar\n".as_bytes(), "foo\r\nbaz\r\n".as_bytes());
//! let diffs: Vec<_> = session.diffs().collect();
//!
//! assert_eq!(diffs.len(), 1);
//! assert_eq!((diffs[0].line, diffs[0].index), (1, 2));
//! assert_eq!((diffs[0].text1.as_str(), diffs[0].text2.as_str()), ("bar", "baz"));
//! ```
//!
//! For concurrent consumption, [`TextDiff::scan`] runs the same lockstep
//! loop on a worker thread and hands diffs over an unbuffered channel;
//! see [`scanner::ScanHandle`].

pub mod compare;
pub mod error;
pub mod scanner;
pub mod source;
pub mod tokenizer;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::ScanError;
pub use scanner::{Diff, Diffs, ScanHandle, TextDiff};
