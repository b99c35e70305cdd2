// linescan/src/collectors/frameworks.rs

//! Framework to proto file mapping files.
//!
//! Each line names a framework followed by the proto files it provides:
//!
//! ```text
//! Protobuf: google/protobuf/any.proto, google/protobuf/empty.proto
//! MyKit: mykit/a.proto, mykit/b.proto
//! ```

use super::trim_ascii;
use crate::consumer::{ConsumeResult, LineConsumer, Rejection};
use crate::error::Result;
use crate::scanner::Scanner;
use log::warn;
use std::collections::BTreeMap;
use std::path::Path;

/// Collects a map from proto file to the framework that provides it.
#[derive(Debug, Clone, Default)]
pub struct FrameworkMapCollector {
    frameworks: BTreeMap<String, String>,
}

impl FrameworkMapCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frameworks(&self) -> &BTreeMap<String, String> {
        &self.frameworks
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.frameworks
    }
}

impl LineConsumer for FrameworkMapCollector {
    fn consume_line(&mut self, line: &str) -> ConsumeResult {
        let (framework, proto_files) = line.split_once(':').ok_or_else(|| {
            Rejection::because(format!(
                "Framework/proto file mapping line without colon sign: '{}'.",
                line
            ))
        })?;

        let framework = trim_ascii(framework);
        for proto_file in trim_ascii(proto_files).split(',').map(trim_ascii) {
            if proto_file.is_empty() {
                continue;
            }
            if let Some(previous) = self.frameworks.get(proto_file) {
                warn!(
                    "duplicate proto file reference, replacing framework entry for '{}' with '{}' (was '{}').",
                    proto_file, framework, previous
                );
            }
            if proto_file.contains(' ') {
                warn!(
                    "framework mapping file had a proto file with a space in, hopefully that isn't a missing comma: '{}'",
                    proto_file
                );
            }
            self.frameworks
                .insert(proto_file.to_string(), framework.to_string());
        }
        Ok(())
    }
}

/// Read a framework mapping file.
pub fn read_framework_file<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, String>> {
    let mut collector = FrameworkMapCollector::new();
    Scanner::new().scan_file(path, &mut collector)?;
    Ok(collector.into_map())
}
