//! Buffered line sources over opaque readers.

use crate::tokenizer::{scan_line, ScanLine};
use std::io::Read;

/// Bytes pulled from the reader per refill.
const READ_CHUNK: usize = 8 * 1024;

/// Hands out one decoded line at a time from a sequential reader.
///
/// Accumulates raw bytes and drives [`scan_line`] over them, so it only ever
/// holds the unconsumed tail of the input — never the whole stream. A read
/// failure is recorded on the source and thereafter reads as end-of-input;
/// the scan session surfaces it through its health query once scanning is
/// over.
pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
    /// Bytes before this offset are consumed; compacted on refill.
    start: usize,
    line: String,
    at_eof: bool,
    finished: bool,
    error: Option<std::io::Error>,
}

impl<R: Read> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            start: 0,
            line: String::new(),
            at_eof: false,
            finished: false,
            error: None,
        }
    }

    /// Make the next line current. Returns `false` once the input is
    /// exhausted. Any data left after a read failure is still delivered as a
    /// final line before this starts returning `false`.
    pub fn advance(&mut self) -> bool {
        if self.finished {
            return false;
        }

        loop {
            match scan_line(&self.buf[self.start..], self.at_eof) {
                ScanLine::Token { line, consumed } => {
                    // Invalid UTF-8 becomes U+FFFD rather than aborting the
                    // scan; the comparator still sees it as a divergence.
                    self.line = String::from_utf8_lossy(line).into_owned();
                    self.start += consumed;
                    return true;
                }
                ScanLine::Done => {
                    self.finished = true;
                    return false;
                }
                ScanLine::Incomplete => self.refill(),
            }
        }
    }

    /// The current line, separator stripped. Only meaningful after
    /// [`advance`](Self::advance) returned `true`.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The first read failure recorded on this source, if any.
    pub fn error(&self) -> Option<&std::io::Error> {
        self.error.as_ref()
    }

    pub(crate) fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    /// Pull more bytes from the reader, compacting consumed bytes first so
    /// the buffer holds only unconsumed input. On end of input or failure,
    /// marks the source exhausted; the tokenizer then flushes whatever
    /// remains as a final line.
    fn refill(&mut self) {
        if self.start > 0 {
            self.buf.drain(..self.start);
            self.start = 0;
        }

        let old_len = self.buf.len();
        self.buf.resize(old_len + READ_CHUNK, 0);
        match self.reader.read(&mut self.buf[old_len..]) {
            Ok(0) => {
                self.buf.truncate(old_len);
                self.at_eof = true;
            }
            Ok(n) => {
                self.buf.truncate(old_len + n);
            }
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {
                self.buf.truncate(old_len);
            }
            Err(err) => {
                self.buf.truncate(old_len);
                log::debug!("[source] read failed: {err}");
                // First failure wins; the source reads as ended from here on.
                if self.error.is_none() {
                    self.error = Some(err);
                }
                self.at_eof = true;
            }
        }
    }
}
