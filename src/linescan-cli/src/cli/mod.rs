// linescan-cli/src/cli/mod.rs

pub mod lines;
pub mod maps;

pub use lines::print_lines;
pub use maps::{print_frameworks, print_prefixes};

use crate::constants::{STDIN_NAME, STDIN_PATH};
use anyhow::Context;
use linescan::{LineConsumer, Scanner};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Where a command reads its lines from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `-` selects standard input, anything else is a file path.
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new(STDIN_PATH) {
            Input::Stdin
        } else {
            Input::File(arg.to_path_buf())
        }
    }

    /// Stream name used in diagnostics.
    pub fn name(&self) -> String {
        match self {
            Input::Stdin => STDIN_NAME.to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    pub fn scan<C>(&self, scanner: &Scanner, consumer: &mut C) -> linescan::Result<()>
    where
        C: LineConsumer + ?Sized,
    {
        self.scan_with_stdin(io::stdin().lock(), scanner, consumer)
    }

    /// Like [`Input::scan`], reading `stdin` when the input is standard input.
    pub fn scan_with_stdin<R, C>(
        &self,
        stdin: R,
        scanner: &Scanner,
        consumer: &mut C,
    ) -> linescan::Result<()>
    where
        R: Read,
        C: LineConsumer + ?Sized,
    {
        match self {
            Input::Stdin => scanner.scan(stdin, STDIN_NAME, consumer),
            Input::File(path) => scanner.scan_file(path, consumer),
        }
    }
}

/// Buffered writer for command output: `path` when given, else stdout.
pub fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(fs_err::File::create(path).context(format!(
            "Failed to create output file {}",
            path.display()
        ))?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
