// linescan-cli/src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linescan::scanner::DEFAULT_READ_SIZE;
use linescan::{ScanError, Scanner};
use linescan_cli::cli::{open_output, print_frameworks, print_lines, print_prefixes, Input};
use linescan_cli::constants::READ_SIZE_ENV;
use log::debug;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "linescan")]
#[command(about = "Scan comment-stripped line files and mapping files", long_about = None)]
#[command(version = env!("LINESCAN_CLI_VERSION"))]
struct Cli {
    /// Bytes requested from the input per read
    #[arg(
        long,
        value_name = "BYTES",
        env = READ_SIZE_ENV,
        default_value_t = DEFAULT_READ_SIZE,
        global = true
    )]
    read_size: usize,

    /// Write output to FILE instead of standard output
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the non-empty lines of FILE with comments removed
    Lines {
        /// Input file, or - for standard input
        file: PathBuf,
    },
    /// Print a package prefix file as JSON
    Prefixes {
        /// Input file, or - for standard input
        file: PathBuf,
    },
    /// Print a framework mapping file as JSON (proto file to framework)
    Frameworks {
        /// Input file, or - for standard input
        file: PathBuf,
    },
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let scanner = Scanner::new().with_read_size(cli.read_size);
    debug!("read size: {} bytes", scanner.read_size());

    let mut writer = open_output(cli.output.as_deref())?;

    match &cli.command {
        Commands::Lines { file } => print_lines(&Input::from_arg(file), &scanner, &mut writer)?,
        Commands::Prefixes { file } => {
            print_prefixes(&Input::from_arg(file), &scanner, &mut writer)?
        }
        Commands::Frameworks { file } => {
            print_frameworks(&Input::from_arg(file), &scanner, &mut writer)?
        }
    };
    writer.flush().context("Failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            // Scan errors already carry their "error:" prefix.
            match e.downcast_ref::<ScanError>() {
                Some(scan) => eprintln!("{}", scan),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
