// linescan/src/collectors/prefixes.rs

//! Package to class-prefix mapping files.
//!
//! ```text
//! # package = prefix
//! foo.bar = FB
//! quoted.pkg = "QP"
//! ```

use super::{trim_ascii, unquote};
use crate::consumer::{ConsumeResult, LineConsumer, Rejection};
use crate::error::Result;
use crate::scanner::Scanner;
use std::collections::BTreeMap;
use std::path::Path;

/// Collects `package = prefix` entries.
///
/// A later entry for the same package replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct PrefixMapCollector {
    prefixes: BTreeMap<String, String>,
}

impl PrefixMapCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefixes(&self) -> &BTreeMap<String, String> {
        &self.prefixes
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.prefixes
    }
}

impl LineConsumer for PrefixMapCollector {
    fn consume_line(&mut self, line: &str) -> ConsumeResult {
        let (package, prefix) = line.split_once('=').ok_or_else(|| {
            Rejection::because(format!(
                "Expected prefixes file line without equal sign: '{}'.",
                line
            ))
        })?;

        let package = trim_ascii(package);
        let prefix = unquote(trim_ascii(prefix));
        // Package and prefix spellings are not validated here.
        self.prefixes
            .insert(package.to_string(), prefix.to_string());
        Ok(())
    }
}

/// Read a package to prefix mapping file.
pub fn read_prefix_file<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, String>> {
    let mut collector = PrefixMapCollector::new();
    Scanner::new().scan_file(path, &mut collector)?;
    Ok(collector.into_map())
}
