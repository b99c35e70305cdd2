// linescan/src/source.rs

//! In-memory byte sources with controllable chunking.
//!
//! The scanner accepts any [`std::io::Read`]. [`ChunkedSource`] is a reader
//! over an owned buffer that hands the bytes out according to a
//! [`BlockSize`] policy, so callers can reproduce exactly how a network or
//! pipe would split the same data.

use std::io::{self, Read};

/// How many bytes a [`ChunkedSource`] yields per read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BlockSize {
    /// Everything that fits in the caller's buffer at once.
    #[default]
    Whole,
    /// At most `n` bytes per read. `0` is treated as `1`.
    Fixed(usize),
    /// Successive reads use these lengths in order, starting over when the
    /// list runs out. Zero entries are treated as `1`.
    Partition(Vec<usize>),
}

/// A forward-only reader over an owned byte buffer.
#[derive(Debug, Clone)]
pub struct ChunkedSource {
    data: Vec<u8>,
    position: usize,
    block_size: BlockSize,
    reads: usize,
}

impl ChunkedSource {
    pub fn new(data: impl Into<Vec<u8>>, block_size: BlockSize) -> Self {
        Self {
            data: data.into(),
            position: 0,
            block_size,
            reads: 0,
        }
    }

    /// Source that returns all remaining bytes on each read.
    pub fn whole(data: impl Into<Vec<u8>>) -> Self {
        Self::new(data, BlockSize::Whole)
    }

    /// Number of bytes not yet handed out.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Number of non-empty reads served so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    fn next_block_len(&self) -> usize {
        match &self.block_size {
            BlockSize::Whole => usize::MAX,
            BlockSize::Fixed(n) => (*n).max(1),
            BlockSize::Partition(sizes) if sizes.is_empty() => usize::MAX,
            BlockSize::Partition(sizes) => sizes[self.reads % sizes.len()].max(1),
        }
    }
}

impl Read for ChunkedSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.next_block_len().min(buf.len()).min(self.remaining());
        if n == 0 {
            return Ok(0);
        }
        buf[..n].copy_from_slice(&self.data[self.position..self.position + n]);
        self.position += n;
        self.reads += 1;
        Ok(n)
    }
}
