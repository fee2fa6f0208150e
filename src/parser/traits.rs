//! Parser trait definition

use crate::parser::types::PackageIdentity;

/// Trait for parsing project manifests
pub trait ManifestParser {
    /// Parse the content and extract the declared package identity
    fn parse(&self, content: &str) -> Result<PackageIdentity, ParseError>;
}

/// Error type for parsing operations
///
/// Carries no path; callers that know the file attach it (see
/// [`crate::parser::ManifestError`]).
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Content is not valid TOML
    #[error("{message} at line {line}, column {column}")]
    InvalidSyntax {
        message: String,
        line: usize,
        column: usize,
    },

    /// No `[project]` section
    #[error("missing `[project]` section")]
    MissingProject,

    /// `[project]` exists but lacks a required key
    #[error("missing `[project].{0}`")]
    MissingKey(&'static str),

    /// Key exists but its value is not a string
    #[error("`[project].{0}` is not a string")]
    NotAString(&'static str),

    /// Version is listed in `[project].dynamic` instead of being declared
    #[error("`[project].version` is dynamic and cannot be read from the manifest")]
    DynamicVersion,
}
