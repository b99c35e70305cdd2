// linescan-cli/src/cli/maps.rs

use super::Input;
use anyhow::Context;
use linescan::{FrameworkMapCollector, PrefixMapCollector, Scanner};
use log::info;
use std::collections::BTreeMap;
use std::io::Write;

/// Parse a package prefix file and print it as JSON.
///
/// Returns the number of packages.
pub fn print_prefixes<W: Write>(
    input: &Input,
    scanner: &Scanner,
    writer: &mut W,
) -> anyhow::Result<usize> {
    let mut collector = PrefixMapCollector::new();
    input.scan(scanner, &mut collector)?;
    let prefixes = collector.into_map();
    info!("{}: {} package prefix(es)", input.name(), prefixes.len());
    write_json(&prefixes, writer)?;
    Ok(prefixes.len())
}

/// Parse a framework mapping file and print proto file to framework as JSON.
///
/// Returns the number of proto files.
pub fn print_frameworks<W: Write>(
    input: &Input,
    scanner: &Scanner,
    writer: &mut W,
) -> anyhow::Result<usize> {
    let mut collector = FrameworkMapCollector::new();
    input.scan(scanner, &mut collector)?;
    let frameworks = collector.into_map();
    info!("{}: {} proto file mapping(s)", input.name(), frameworks.len());
    write_json(&frameworks, writer)?;
    Ok(frameworks.len())
}

fn write_json<W: Write>(map: &BTreeMap<String, String>, writer: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, map).context("Error serializing mapping")?;
    writeln!(writer)?;
    Ok(())
}
