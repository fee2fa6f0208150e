//! Project fixtures on disk

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A temporary project directory holding a pyproject.toml and an output file path
pub struct Project {
    _dir: TempDir,
    pub manifest: PathBuf,
    pub output: PathBuf,
}

impl Project {
    pub fn new(name: &str, version: &str) -> Self {
        Self::with_manifest(&format!(
            "[project]\nname = \"{name}\"\nversion = \"{version}\"\ndescription = \"fixture\"\n"
        ))
    }

    pub fn with_manifest(content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("pyproject.toml");
        fs::write(&manifest, content).unwrap();
        let output = dir.path().join("github_output");
        Self {
            _dir: dir,
            manifest,
            output,
        }
    }

    pub fn output_content(&self) -> Option<String> {
        fs::read_to_string(&self.output).ok()
    }
}

/// JSON project page listing a wheel and an sdist for each version
pub fn simple_index_body(package: &str, versions: &[&str]) -> String {
    let normalized = package.replace('-', "_");
    let files: Vec<serde_json::Value> = versions
        .iter()
        .flat_map(|version| {
            [
                format!("{normalized}-{version}-py3-none-any.whl"),
                format!("{normalized}-{version}.tar.gz"),
            ]
        })
        .map(|filename| {
            serde_json::json!({
                "filename": filename,
                "url": format!("https://files.example/{filename}"),
                "hashes": {"sha256": "00"},
            })
        })
        .collect();

    serde_json::json!({
        "meta": {"api-version": "1.1"},
        "name": package,
        "files": files,
    })
    .to_string()
}
