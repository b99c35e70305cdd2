// linescan/src/error.rs

//! Error types for line scanning.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Message used when a consumer rejects a line without giving a reason.
pub const SILENT_REJECTION_MESSAGE: &str = "ConsumeLine failed without setting an error.";

/// Errors that end a scan.
///
/// The `Display` output of every variant is the complete, user-facing
/// diagnostic, already prefixed with `error:`.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The consumer rejected a line.
    #[error("error: {name} Line {line}, {message}")]
    Rejected {
        name: String,
        line: usize,
        message: String,
    },

    /// The byte source failed while the given line was being assembled.
    #[error("error: {name} Line {line}, read failed: {source}")]
    Read {
        name: String,
        line: usize,
        #[source]
        source: io::Error,
    },

    /// The input file could not be opened.
    #[error("error: Unable to open \"{}\", {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Build a rejection error, substituting the fixed diagnostic when the
    /// consumer gave no reason.
    pub fn rejected(name: &str, line: usize, reason: Option<String>) -> Self {
        ScanError::Rejected {
            name: name.to_string(),
            line,
            message: reason.unwrap_or_else(|| SILENT_REJECTION_MESSAGE.to_string()),
        }
    }

    /// 1-based ordinal of the line the error refers to, if any.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ScanError::Rejected { line, .. } | ScanError::Read { line, .. } => Some(*line),
            ScanError::Open { .. } => None,
        }
    }
}
