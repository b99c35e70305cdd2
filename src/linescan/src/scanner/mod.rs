// linescan/src/scanner/mod.rs

//! Streaming line scanner.
//!
//! Bytes are pulled from a reader in chunks of any size and reassembled into
//! logical lines. Each line is cut at its first `#`, trimmed of spaces and
//! tabs, and handed to a [`LineConsumer`](crate::LineConsumer) when anything
//! is left. Chunk boundaries never change the result.

mod buffer;
pub mod line;
pub mod scanner;

// Re-export main types and functions
pub use line::{strip_line, trim_blanks, LogicalLine, COMMENT_MARKER};
pub use scanner::{Scanner, DEFAULT_READ_SIZE};
