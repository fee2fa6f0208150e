//! pyproject.toml parser for the `[project]` name and version (PEP 621)
//!
//! Any TOML spelling of the `project` table works (`[project]`, dotted keys,
//! inline table). A `[project.*]` sub-table alone counts as the section being
//! present.

use std::ops::Range;

use toml::{Table, Value};
use tracing::{debug, warn};

use crate::parser::traits::{ManifestParser, ParseError};
use crate::parser::types::PackageIdentity;

/// Parser for pyproject.toml files
pub struct PyprojectTomlParser;

impl PyprojectTomlParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PyprojectTomlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestParser for PyprojectTomlParser {
    fn parse(&self, content: &str) -> Result<PackageIdentity, ParseError> {
        let document: Table = toml::from_str(content).map_err(|e| {
            warn!("Failed to parse TOML content: {}", e.message());
            syntax_error(&e, content)
        })?;

        let project = document.get("project").ok_or(ParseError::MissingProject)?;
        // [[project]] is an array of tables, so it has no `name`
        let project = project.as_table().ok_or(ParseError::MissingKey("name"))?;

        let name = required_string(project, "name")?;
        let version = match project.get("version") {
            Some(value) => value
                .as_str()
                .map(str::to_string)
                .ok_or(ParseError::NotAString("version"))?,
            None if lists_dynamic(project, "version") => return Err(ParseError::DynamicVersion),
            None => return Err(ParseError::MissingKey("version")),
        };

        debug!("Parsed project identity: {} {}", name, version);
        Ok(PackageIdentity { name, version })
    }
}

fn required_string(project: &Table, key: &'static str) -> Result<String, ParseError> {
    let value = project.get(key).ok_or(ParseError::MissingKey(key))?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or(ParseError::NotAString(key))
}

/// Whether `dynamic = [...]` lists the given field
fn lists_dynamic(project: &Table, field: &str) -> bool {
    project
        .get("dynamic")
        .and_then(Value::as_array)
        .is_some_and(|items| items.iter().any(|item| item.as_str() == Some(field)))
}

fn syntax_error(error: &toml::de::Error, content: &str) -> ParseError {
    let (line, column) = error
        .span()
        .map(|span| line_column(content, span))
        .unwrap_or((1, 1));

    ParseError::InvalidSyntax {
        message: error.message().trim().to_string(),
        line,
        column,
    }
}

/// 1-based line and column of the start of `span`
fn line_column(content: &str, span: Range<usize>) -> (usize, usize) {
    let offset = span.start.min(content.len());
    let before = content.get(..offset).unwrap_or(content);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |pos| pos + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
