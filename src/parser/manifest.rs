//! Reads a manifest from disk and attaches the path to every failure

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::parser::pyproject_toml::PyprojectTomlParser;
use crate::parser::traits::{ManifestParser, ParseError};
use crate::parser::types::PackageIdentity;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse TOML in {}: {source}", .path.display())]
    InvalidToml {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("{} is missing `[project]` section", .0.display())]
    MissingProject(PathBuf),

    #[error("{} is missing `[project].{key}`", .path.display())]
    MissingKey { path: PathBuf, key: &'static str },

    #[error("{}: `[project].{key}` is not a string", .path.display())]
    NotAString { path: PathBuf, key: &'static str },

    #[error(
        "{}: `[project].version` is listed in `dynamic`; declare a static version to check it against the index",
        .0.display()
    )]
    DynamicVersion(PathBuf),
}

impl ManifestError {
    fn from_parse(path: &Path, error: ParseError) -> Self {
        let path = path.to_path_buf();
        match error {
            ParseError::MissingProject => Self::MissingProject(path),
            ParseError::MissingKey(key) => Self::MissingKey { path, key },
            ParseError::NotAString(key) => Self::NotAString { path, key },
            ParseError::DynamicVersion => Self::DynamicVersion(path),
            source @ ParseError::InvalidSyntax { .. } => Self::InvalidToml { path, source },
        }
    }
}

/// Read `pyproject.toml` at `path` and return its `[project]` name and version
pub fn read_package_identity(path: &Path) -> Result<PackageIdentity, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ManifestError::NotFound(path.to_path_buf())
        } else {
            ManifestError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    debug!("Read manifest {} ({} bytes)", path.display(), content.len());

    PyprojectTomlParser::new()
        .parse(&content)
        .map_err(|e| ManifestError::from_parse(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("pyproject.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn read_package_identity_returns_declared_values() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            "[project]\nname = \"demo\"\nversion = \"1.2.0\"\nrequires-python = \">=3.9\"\n",
        );

        let identity = read_package_identity(&path).unwrap();

        assert_eq!(identity, PackageIdentity::new("demo", "1.2.0"));
    }

    #[test]
    fn read_package_identity_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        let err = read_package_identity(&path).unwrap_err();

        assert!(matches!(err, ManifestError::NotFound(ref p) if *p == path));
        assert_eq!(err.to_string(), format!("File not found: {}", path.display()));
    }

    #[test]
    fn read_package_identity_reports_directory_as_read_error() {
        let dir = TempDir::new().unwrap();

        let err = read_package_identity(dir.path()).unwrap_err();

        assert!(matches!(err, ManifestError::Read { .. }));
    }

    #[test]
    fn read_package_identity_names_path_for_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "invalid toml content");

        let err = read_package_identity(&path).unwrap_err();

        assert!(matches!(err, ManifestError::InvalidToml { .. }));
        let message = err.to_string();
        assert!(message.starts_with(&format!("Failed to parse TOML in {}", path.display())));
        assert!(message.contains("line 1"));
    }

    #[test]
    fn read_package_identity_names_path_and_key_when_key_missing() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "[project]\nname = \"demo\"\n");

        let err = read_package_identity(&path).unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("{} is missing `[project].version`", path.display())
        );
    }

    #[test]
    fn read_package_identity_names_path_when_project_missing() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "[tool.black]\nline-length = 88\n");

        let err = read_package_identity(&path).unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("{} is missing `[project]` section", path.display())
        );
    }
}
