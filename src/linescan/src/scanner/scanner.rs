// linescan/src/scanner/scanner.rs

//! Pull-based scanner driving a [`LineBuffer`] from a reader.

use super::buffer::LineBuffer;
use crate::consumer::LineConsumer;
use crate::error::{Result, ScanError};
use log::debug;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Default number of bytes requested from the source per read.
pub const DEFAULT_READ_SIZE: usize = 8 * 1024;

/// Scans byte streams into comment-stripped lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanner {
    read_size: usize,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// Create a scanner with the default read size.
    pub fn new() -> Self {
        Self {
            read_size: DEFAULT_READ_SIZE,
        }
    }

    /// Set the maximum number of bytes requested per read (minimum 1).
    pub fn with_read_size(mut self, read_size: usize) -> Self {
        self.read_size = read_size.max(1);
        self
    }

    pub fn read_size(&self) -> usize {
        self.read_size
    }

    /// Scan `source` to the end, handing each surviving line to `consumer`.
    ///
    /// `name` identifies the stream in error messages. The first rejection
    /// ends the scan and nothing after the rejected line is read.
    pub fn scan<R, C>(&self, mut source: R, name: &str, consumer: &mut C) -> Result<()>
    where
        R: Read,
        C: LineConsumer + ?Sized,
    {
        let mut buffer = LineBuffer::new(name);
        let mut chunk = vec![0u8; self.read_size];

        loop {
            let read = match source.read(&mut chunk) {
                Ok(0) => break,
                Ok(read) => read,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(ScanError::Read {
                        name: name.to_string(),
                        line: buffer.line_number(),
                        source: e,
                    })
                }
            };
            debug!("{}: read {} bytes at line {}", name, read, buffer.line_number());
            buffer.feed(&chunk[..read], consumer)?;
        }

        let delivered = buffer.finish(consumer)?;
        debug!("{}: scan complete, {} line(s) delivered", name, delivered);
        Ok(())
    }

    /// Scan an in-memory string.
    pub fn scan_str<C>(&self, input: &str, name: &str, consumer: &mut C) -> Result<()>
    where
        C: LineConsumer + ?Sized,
    {
        self.scan(input.as_bytes(), name, consumer)
    }

    /// Open `path` and scan it, using the path as the stream name.
    pub fn scan_file<P, C>(&self, path: P, consumer: &mut C) -> Result<()>
    where
        P: AsRef<Path>,
        C: LineConsumer + ?Sized,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ScanError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.scan(file, &path.display().to_string(), consumer)
    }
}
