// linescan/src/scanner/line.rs

//! Comment stripping and blank trimming for a single logical line.

/// Starts a comment that runs to the end of the line.
pub const COMMENT_MARKER: u8 = b'#';

#[inline]
fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Trim leading and trailing ASCII spaces and tabs.
pub fn trim_blanks(bytes: &[u8]) -> &[u8] {
    let start = match bytes.iter().position(|&b| !is_blank(b)) {
        Some(start) => start,
        None => return &[],
    };
    // A non-blank byte exists, so rposition cannot fail.
    let end = bytes.iter().rposition(|&b| !is_blank(b)).unwrap_or(start);
    &bytes[start..=end]
}

/// Cut `raw` at the first comment marker, then trim blanks.
///
/// An empty result means the line carries nothing and is dropped.
pub fn strip_line(raw: &[u8]) -> &[u8] {
    let content = match raw.iter().position(|&b| b == COMMENT_MARKER) {
        Some(marker) => &raw[..marker],
        None => raw,
    };
    trim_blanks(content)
}

/// A raw line together with its 1-based position in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalLine<'a> {
    pub number: usize,
    pub raw: &'a [u8],
}

impl<'a> LogicalLine<'a> {
    pub fn new(number: usize, raw: &'a [u8]) -> Self {
        Self { number, raw }
    }

    pub fn stripped(&self) -> &'a [u8] {
        strip_line(self.raw)
    }
}
