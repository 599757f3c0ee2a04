//! Line segmentation over raw byte buffers.
//!
//! The tokenizer is a pure function over "bytes accumulated so far" plus an
//! end-of-input flag, so callers own all buffering. `\n`, `\r`, and `\r\n`
//! are all treated as a single line separator, which lets two inputs with
//! different line-ending conventions compare as equal.

/// Outcome of scanning a buffer for the next line.
#[derive(Debug, PartialEq, Eq)]
pub enum ScanLine<'a> {
    /// No complete line in the buffer yet; read more input before retrying.
    /// Zero bytes were consumed.
    Incomplete,
    /// The source is exhausted and the buffer is empty.
    Done,
    /// One line, separator stripped, plus how many bytes to consume
    /// (the line and its separator, if any).
    Token { line: &'a [u8], consumed: usize },
}

/// Find the next line in `buf`.
///
/// A `\r` immediately followed by an in-buffer `\n` is consumed as one
/// separator. A `\r` that is the last available byte while the source still
/// has data is deliberately *not* treated as a separator: the matching `\n`
/// may arrive with the next read, so the caller gets `Incomplete` and must
/// supply more lookahead. At end of input, a trailing unterminated line is
/// returned as a final token.
pub fn scan_line(buf: &[u8], at_eof: bool) -> ScanLine<'_> {
    if at_eof && buf.is_empty() {
        return ScanLine::Done;
    }

    if let Some(pos) = buf.iter().position(|&b| b == b'\r' || b == b'\n') {
        if buf[pos] == b'\r' {
            match buf.get(pos + 1) {
                Some(&b'\n') => {
                    return ScanLine::Token {
                        line: &buf[..pos],
                        consumed: pos + 2,
                    };
                }
                None if !at_eof => {
                    // Can't yet tell a lone \r from the first half of \r\n.
                    return ScanLine::Incomplete;
                }
                _ => {}
            }
        }
        return ScanLine::Token {
            line: &buf[..pos],
            consumed: pos + 1,
        };
    }

    if at_eof {
        return ScanLine::Token {
            line: buf,
            consumed: buf.len(),
        };
    }

    ScanLine::Incomplete
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lf_terminated_line() {
        assert_eq!(
            scan_line(b"hello\nworld", false),
            ScanLine::Token {
                line: b"hello",
                consumed: 6
            }
        );
    }

    #[test]
    fn test_crlf_consumed_as_one_separator() {
        assert_eq!(
            scan_line(b"hello\r\nworld", false),
            ScanLine::Token {
                line: b"hello",
                consumed: 7
            }
        );
    }

    #[test]
    fn test_lone_cr_followed_by_text_is_a_separator() {
        assert_eq!(
            scan_line(b"a\rb", false),
            ScanLine::Token {
                line: b"a",
                consumed: 2
            }
        );
    }

    #[test]
    fn test_trailing_cr_waits_for_more_data() {
        // The \n half of a possible \r\n may still be in flight.
        assert_eq!(scan_line(b"hello\r", false), ScanLine::Incomplete);
    }

    #[test]
    fn test_trailing_cr_at_eof_is_a_separator() {
        assert_eq!(
            scan_line(b"hello\r", true),
            ScanLine::Token {
                line: b"hello",
                consumed: 6
            }
        );
    }

    #[test]
    fn test_no_terminator_waits_for_more_data() {
        assert_eq!(scan_line(b"partial", false), ScanLine::Incomplete);
    }

    #[test]
    fn test_final_partial_line_at_eof() {
        assert_eq!(
            scan_line(b"partial", true),
            ScanLine::Token {
                line: b"partial",
                consumed: 7
            }
        );
    }

    #[test]
    fn test_empty_buffer_at_eof_is_done() {
        assert_eq!(scan_line(b"", true), ScanLine::Done);
    }

    #[test]
    fn test_empty_buffer_mid_stream_is_incomplete() {
        assert_eq!(scan_line(b"", false), ScanLine::Incomplete);
    }

    #[test]
    fn test_leading_separator_yields_empty_line() {
        assert_eq!(
            scan_line(b"\r\nrest", false),
            ScanLine::Token {
                line: b"",
                consumed: 2
            }
        );
        assert_eq!(
            scan_line(b"\nrest", false),
            ScanLine::Token {
                line: b"",
                consumed: 1
            }
        );
    }
}
