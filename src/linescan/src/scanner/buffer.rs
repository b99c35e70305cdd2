// linescan/src/scanner/buffer.rs

//! Reassembly of logical lines from arbitrarily split chunks.

use super::line::LogicalLine;
use crate::consumer::LineConsumer;
use crate::error::{Result, ScanError};
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    Stopped,
}

/// Carries unresolved bytes and the line ordinal across chunks.
///
/// Lives for exactly one scan.
pub(crate) struct LineBuffer<'n> {
    name: &'n str,
    pending: Vec<u8>,
    line_number: usize,
    delivered: usize,
    state: ScanState,
}

impl<'n> LineBuffer<'n> {
    pub(crate) fn new(name: &'n str) -> Self {
        Self {
            name,
            pending: Vec::new(),
            line_number: 1,
            delivered: 0,
            state: ScanState::Scanning,
        }
    }

    /// Ordinal of the line currently being assembled.
    pub(crate) fn line_number(&self) -> usize {
        self.line_number
    }

    /// Split `chunk` on newlines and deliver every completed line.
    ///
    /// Stops at the first rejection; bytes after the rejected line are
    /// never looked at.
    pub(crate) fn feed<C>(&mut self, chunk: &[u8], consumer: &mut C) -> Result<()>
    where
        C: LineConsumer + ?Sized,
    {
        debug_assert_eq!(self.state, ScanState::Scanning, "feed after scan stopped");

        let mut rest = chunk;
        while let Some(newline) = rest.iter().position(|&b| b == b'\n') {
            self.complete_line(&rest[..newline], consumer)?;
            self.line_number += 1;
            rest = &rest[newline + 1..];
        }
        self.pending.extend_from_slice(rest);
        Ok(())
    }

    /// Flush a trailing line that had no newline and end the scan.
    ///
    /// Returns the number of lines handed to the consumer.
    pub(crate) fn finish<C>(mut self, consumer: &mut C) -> Result<usize>
    where
        C: LineConsumer + ?Sized,
    {
        if !self.pending.is_empty() {
            let line = std::mem::take(&mut self.pending);
            self.deliver(LogicalLine::new(self.line_number, &line), consumer)?;
        }
        self.state = ScanState::Stopped;
        Ok(self.delivered)
    }

    fn complete_line<C>(&mut self, tail: &[u8], consumer: &mut C) -> Result<()>
    where
        C: LineConsumer + ?Sized,
    {
        if self.pending.is_empty() {
            return self.deliver(LogicalLine::new(self.line_number, tail), consumer);
        }

        let mut line = std::mem::take(&mut self.pending);
        line.extend_from_slice(tail);
        let result = self.deliver(LogicalLine::new(self.line_number, &line), consumer);
        // Keep the allocation for the next line.
        line.clear();
        self.pending = line;
        result
    }

    fn deliver<C>(&mut self, line: LogicalLine<'_>, consumer: &mut C) -> Result<()>
    where
        C: LineConsumer + ?Sized,
    {
        let stripped = line.stripped();
        if stripped.is_empty() {
            return Ok(());
        }

        let text = String::from_utf8_lossy(stripped);
        trace!("{} line {}: {:?}", self.name, line.number, text);

        match consumer.consume_line(&text) {
            Ok(()) => {
                self.delivered += 1;
                Ok(())
            }
            Err(rejection) => {
                self.state = ScanState::Stopped;
                Err(ScanError::rejected(
                    self.name,
                    line.number,
                    rejection.into_reason(),
                ))
            }
        }
    }
}
