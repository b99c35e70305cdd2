// linescan-cli/src/cli/lines.rs

use super::Input;
use linescan::{ConsumeResult, Rejection, Scanner};
use log::info;
use std::io::Write;

/// Print every non-empty, comment-stripped line of `input`.
///
/// Returns the number of lines written.
pub fn print_lines<W: Write>(
    input: &Input,
    scanner: &Scanner,
    writer: &mut W,
) -> anyhow::Result<usize> {
    let mut written = 0;
    let mut consumer = |line: &str| -> ConsumeResult {
        writeln!(writer, "{}", line)
            .map_err(|e| Rejection::because(format!("unable to write line: {}", e)))?;
        written += 1;
        Ok(())
    };
    input.scan(scanner, &mut consumer)?;
    info!("{}: {} line(s)", input.name(), written);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_print_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs_err::write(&path, "# header\n a \n\nb # c\n").unwrap();

        let mut out = Vec::new();
        let count = print_lines(&Input::File(path), &Scanner::new(), &mut out).unwrap();
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_write_failure_names_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs_err::write(&path, "\nfirst\n").unwrap();

        let err = print_lines(&Input::File(path.clone()), &Scanner::new(), &mut ClosedPipe)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("error: {} Line 2, unable to write line: closed", path.display())
        );
    }
}
