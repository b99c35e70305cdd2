// linescan-cli/src/constants.rs

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Stream name used in errors for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Environment variable overriding the read size.
pub const READ_SIZE_ENV: &str = "LINESCAN_READ_SIZE";
