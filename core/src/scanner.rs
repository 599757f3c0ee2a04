//! Lockstep scan session: drives two line sources one line pair at a time
//! and streams out a [`Diff`] for every pair that diverges.

use crate::compare::divergence;
use crate::error::ScanError;
use crate::source::LineSource;
use serde::Serialize;
use std::io::Read;
use std::sync::mpsc;
use std::thread;

/// One reported difference between the two inputs.
///
/// For a diverging line pair both texts are populated and `index` is the
/// codepoint offset of the first mismatch. When one input ends before the
/// other, a final record carries only the surviving side's text; `index` is
/// 0 and carries no meaning in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diff {
    /// Zero-based ordinal of the line pair being compared.
    pub line: u64,
    /// Zero-based codepoint offset of the first mismatch within the line.
    pub index: usize,
    /// Line content from the first input; empty once that input is exhausted.
    pub text1: String,
    /// Line content from the second input; empty once that input is exhausted.
    pub text2: String,
}

/// A single-use comparison session over two inputs.
///
/// Construct it, pick a consumption surface — pull-based [`diffs`] or the
/// channel-backed [`scan`] — drive it once, and discard it.
///
/// [`diffs`]: Self::diffs
/// [`scan`]: Self::scan
pub struct TextDiff<R1, R2> {
    source1: LineSource<R1>,
    source2: LineSource<R2>,
    stop_immediately: bool,
    line: u64,
    finished: bool,
}

impl<R1: Read, R2: Read> TextDiff<R1, R2> {
    pub fn new(input1: R1, input2: R2) -> Self {
        Self {
            source1: LineSource::new(input1),
            source2: LineSource::new(input2),
            stop_immediately: false,
            line: 0,
            finished: false,
        }
    }

    /// Stop after the first reported difference instead of scanning through
    /// to the end of both inputs. Defaults to `false`.
    pub fn stop_immediately(mut self, stop: bool) -> Self {
        self.stop_immediately = stop;
        self
    }

    /// Pull-based scan: each call performs lockstep steps (skipping
    /// identical pairs) until a difference turns up or the inputs end. No
    /// background thread, no channel to drain.
    pub fn diffs(self) -> Diffs<R1, R2> {
        Diffs { session: self }
    }

    /// Run lockstep steps until something is worth reporting.
    ///
    /// Source 1 is always advanced before source 2; the ordering keeps line
    /// numbering deterministic. The line counter increments once per step
    /// regardless of outcome.
    fn next_diff(&mut self) -> Option<Diff> {
        if self.finished {
            return None;
        }

        loop {
            let ok1 = self.source1.advance();
            let ok2 = self.source2.advance();
            let line = self.line;
            self.line += 1;

            match (ok1, ok2) {
                (true, true) => {
                    if let Some(index) = divergence(self.source1.line(), self.source2.line()) {
                        if self.stop_immediately {
                            self.finished = true;
                        }
                        return Some(Diff {
                            line,
                            index,
                            text1: self.source1.line().to_owned(),
                            text2: self.source2.line().to_owned(),
                        });
                    }
                }
                // Exactly one input still has data: report the asymmetry
                // once, then stop — nothing remains to compare against.
                (true, false) => {
                    self.finished = true;
                    return Some(Diff {
                        line,
                        index: 0,
                        text1: self.source1.line().to_owned(),
                        text2: String::new(),
                    });
                }
                (false, true) => {
                    self.finished = true;
                    return Some(Diff {
                        line,
                        index: 0,
                        text1: String::new(),
                        text2: self.source2.line().to_owned(),
                    });
                }
                (false, false) => {
                    self.finished = true;
                    return None;
                }
            }
        }
    }

    fn take_error(&mut self) -> Option<ScanError> {
        ScanError::combine(self.source1.take_error(), self.source2.take_error())
    }
}

impl<R1, R2> TextDiff<R1, R2>
where
    R1: Read + Send + 'static,
    R2: Read + Send + 'static,
{
    /// Channel-based scan: spawns a worker thread that drives both sources
    /// and hands each [`Diff`] over a zero-capacity rendezvous channel.
    ///
    /// Emission is a synchronous handoff, so a slow consumer throttles the
    /// scan directly and memory stays bounded at one in-flight record. Diffs
    /// arrive in strictly increasing `line` order, and the channel closes
    /// exactly once — when the worker finishes — which is the signal that no
    /// more diffs will arrive. Dropping the handle early stops the worker at
    /// its next emission rather than leaking it.
    pub fn scan(self) -> ScanHandle {
        let (sender, receiver) = mpsc::sync_channel(0);
        let worker = thread::spawn(move || {
            let mut session = self;
            while let Some(diff) = session.next_diff() {
                log::debug!("[scan] line {} diverges at index {}", diff.line, diff.index);
                if sender.send(diff).is_err() {
                    // Consumer hung up; stop reading input.
                    break;
                }
            }
            session.take_error()
        });
        ScanHandle { receiver, worker }
    }
}

/// Lazy pull-based sequence of diffs over a [`TextDiff`] session.
pub struct Diffs<R1, R2> {
    session: TextDiff<R1, R2>,
}

impl<R1: Read, R2: Read> Iterator for Diffs<R1, R2> {
    type Item = Diff;

    fn next(&mut self) -> Option<Diff> {
        self.session.next_diff()
    }
}

impl<R1: Read, R2: Read> Diffs<R1, R2> {
    /// Read failures recorded on either input, if any. Only meaningful once
    /// the iterator has returned `None`.
    pub fn finish(mut self) -> Option<ScanError> {
        self.session.take_error()
    }
}

/// Handle to a running channel scan: the receiving half of the diff channel
/// plus the worker to join for the health result.
pub struct ScanHandle {
    receiver: mpsc::Receiver<Diff>,
    worker: thread::JoinHandle<Option<ScanError>>,
}

impl ScanHandle {
    /// Blocking iterator over diffs as the worker produces them, ending when
    /// the channel closes.
    pub fn iter(&self) -> mpsc::Iter<'_, Diff> {
        self.receiver.iter()
    }

    /// Receive the next diff, or `None` once the channel has closed.
    pub fn recv(&self) -> Option<Diff> {
        self.receiver.recv().ok()
    }

    /// Join the worker and report any read failures. Drains unread diffs
    /// first so a caller that stopped consuming early cannot deadlock the
    /// rendezvous handoff.
    pub fn finish(self) -> Option<ScanError> {
        let ScanHandle { receiver, worker } = self;
        for _ in receiver.iter() {}
        worker.join().ok().flatten()
    }
}

impl<'a> IntoIterator for &'a ScanHandle {
    type Item = Diff;
    type IntoIter = mpsc::Iter<'a, Diff>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
