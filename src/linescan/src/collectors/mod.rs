// linescan/src/collectors/mod.rs

//! Ready-made consumers for the mapping files read alongside generated code.
//!
//! - [`PrefixMapCollector`]: `package = prefix` lines
//! - [`FrameworkMapCollector`]: `Framework: a.proto, b.proto` lines

pub mod frameworks;
pub mod prefixes;

pub use frameworks::{read_framework_file, FrameworkMapCollector};
pub use prefixes::{read_prefix_file, PrefixMapCollector};

/// Trim ASCII whitespace from both ends.
pub(crate) fn trim_ascii(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Remove one pair of matching single or double quotes around `value`.
pub(crate) fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'\'' || bytes[0] == b'"')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
