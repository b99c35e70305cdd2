// linescan-cli/src/lib.rs

pub mod cli;
pub mod constants;

pub use cli::{open_output, print_frameworks, print_lines, print_prefixes, Input};
