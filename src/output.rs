//! Pipeline outputs: `key=value` lines appended to the `GITHUB_OUTPUT` file
//! and echoed as `key:value` for the job log.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::debug;

use crate::config::OUTPUT_ENV_VAR;
use crate::parser::types::PackageIdentity;

pub const PACKAGE_NAME: &str = "package_name";
pub const PACKAGE_VERSION: &str = "package_version";
pub const CURRENT_VERSION_EXISTS: &str = "current_version_exists";

/// The three outputs of a run, in the order they are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSet {
    entries: IndexMap<&'static str, String>,
}

impl OutputSet {
    pub fn new(identity: &PackageIdentity, current_version_exists: bool) -> Self {
        let mut entries = IndexMap::with_capacity(3);
        entries.insert(PACKAGE_NAME, identity.name.clone());
        entries.insert(PACKAGE_VERSION, identity.version.clone());
        entries.insert(CURRENT_VERSION_EXISTS, current_version_exists.to_string());
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

/// Writes outputs to the file given at construction
#[derive(Debug, Clone, Default)]
pub struct OutputWriter {
    output_path: Option<PathBuf>,
}

impl OutputWriter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    /// Write one output
    pub fn write<W: Write>(&self, key: &str, value: &str, echo: &mut W) -> io::Result<()> {
        self.write_entries(&[(key, value)], echo)
    }

    /// Write every output of the set with a single open of the file
    pub fn write_set<W: Write>(&self, outputs: &OutputSet, echo: &mut W) -> io::Result<()> {
        let entries: Vec<(&str, &str)> = outputs.iter().collect();
        self.write_entries(&entries, echo)
    }

    fn write_entries<W: Write>(&self, entries: &[(&str, &str)], echo: &mut W) -> io::Result<()> {
        match &self.output_path {
            Some(path) => {
                let lines: String = entries
                    .iter()
                    .map(|(key, value)| format!("{key}={value}\n"))
                    .collect();

                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(lines.as_bytes())?;
                debug!("Appended {} outputs to {}", entries.len(), path.display());
            }
            None => {
                eprintln!("::warning:: {OUTPUT_ENV_VAR} not set; skipping output export.");
                debug!("Skipped {} outputs, no output file", entries.len());
            }
        }

        for (key, value) in entries {
            writeln!(echo, "{key}:{value}")?;
        }
        Ok(())
    }
}
