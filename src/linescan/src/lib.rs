// linescan/src/lib.rs

//! A streaming scanner for simple line-oriented files.
//!
//! This library provides functionality to:
//! - Read any byte stream in chunks of any size and reassemble logical lines
//! - Drop `#` comments, surrounding spaces and tabs, and empty lines
//! - Hand every remaining line to a caller-supplied [`LineConsumer`]
//! - Report rejections as `error: <name> Line <n>, <message>`
//! - Parse package prefix and framework mapping files

pub mod collectors;
pub mod consumer;
pub mod error;
pub mod scanner;
pub mod source;

use std::io::Read;
use std::path::Path;

pub use collectors::{FrameworkMapCollector, PrefixMapCollector};
pub use consumer::{ConsumeResult, LineCollector, LineConsumer, Rejection};
pub use error::{Result, ScanError};
pub use scanner::Scanner;
pub use source::{BlockSize, ChunkedSource};

/// Scan a reader with the default scanner settings.
///
/// # Examples
///
/// ```
/// use linescan::LineCollector;
///
/// fn main() -> Result<(), linescan::ScanError> {
///     let input = "first # note\n\n  second  \n";
///     let mut collector = LineCollector::new();
///     linescan::scan(input.as_bytes(), "inline", &mut collector)?;
///     assert_eq!(collector.lines(), &["first", "second"]);
///     Ok(())
/// }
/// ```
pub fn scan<R, C>(source: R, name: &str, consumer: &mut C) -> Result<()>
where
    R: Read,
    C: LineConsumer + ?Sized,
{
    Scanner::new().scan(source, name, consumer)
}

/// Scan an in-memory string.
pub fn scan_str<C>(input: &str, name: &str, consumer: &mut C) -> Result<()>
where
    C: LineConsumer + ?Sized,
{
    Scanner::new().scan_str(input, name, consumer)
}

/// Scan a file, naming the stream after its path.
///
/// # Examples
///
/// ```no_run
/// use linescan::{ConsumeResult, Rejection};
///
/// fn main() -> Result<(), linescan::ScanError> {
///     let mut names = Vec::new();
///     linescan::scan_file("names.txt", &mut |line: &str| -> ConsumeResult {
///         if line.contains(' ') {
///             return Err(Rejection::because("names may not contain spaces"));
///         }
///         names.push(line.to_string());
///         Ok(())
///     })?;
///     Ok(())
/// }
/// ```
pub fn scan_file<P, C>(path: P, consumer: &mut C) -> Result<()>
where
    P: AsRef<Path>,
    C: LineConsumer + ?Sized,
{
    Scanner::new().scan_file(path, consumer)
}
