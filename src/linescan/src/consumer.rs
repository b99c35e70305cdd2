// linescan/src/consumer.rs

//! The line consumer capability and its simplest implementation.
//!
//! A consumer receives every non-empty, comment-stripped line of a stream in
//! order. Returning a [`Rejection`] stops the scan; the scanner turns it into
//! a [`ScanError`](crate::ScanError) carrying the line number.

/// Outcome of handing a single line to a consumer.
pub type ConsumeResult = std::result::Result<(), Rejection>;

/// A consumer's refusal of a line, with an optional reason.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rejection {
    reason: Option<String>,
}

impl Rejection {
    /// Reject without explanation. The scanner substitutes a fixed message.
    pub fn silent() -> Self {
        Self { reason: None }
    }

    /// Reject with a reason that is reported verbatim.
    pub fn because(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn into_reason(self) -> Option<String> {
        self.reason
    }
}

/// Receives lines from a scan.
///
/// Calls happen synchronously and in stream order; a call always returns
/// before the next line is read.
pub trait LineConsumer {
    fn consume_line(&mut self, line: &str) -> ConsumeResult;
}

impl<F> LineConsumer for F
where
    F: FnMut(&str) -> ConsumeResult,
{
    fn consume_line(&mut self, line: &str) -> ConsumeResult {
        self(line)
    }
}

/// Collects every line into a vector, optionally rejecting one line.
#[derive(Debug, Clone, Default)]
pub struct LineCollector {
    lines: Vec<String>,
    reject: Option<String>,
    explain_rejection: bool,
}

impl LineCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject `line` with the reason `Rejected '<line>'`.
    pub fn rejecting(mut self, line: impl Into<String>) -> Self {
        self.reject = Some(line.into());
        self.explain_rejection = true;
        self
    }

    /// Reject `line` without giving a reason.
    pub fn rejecting_silently(mut self, line: impl Into<String>) -> Self {
        self.reject = Some(line.into());
        self.explain_rejection = false;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl LineConsumer for LineCollector {
    fn consume_line(&mut self, line: &str) -> ConsumeResult {
        if let Some(reject) = &self.reject {
            if reject == line {
                return Err(if self.explain_rejection {
                    Rejection::because(format!("Rejected '{}'", reject))
                } else {
                    Rejection::silent()
                });
            }
        }
        self.lines.push(line.to_string());
        Ok(())
    }
}
