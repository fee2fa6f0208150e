//! Common types for parsers

/// Package name and version declared by a project manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIdentity {
    /// Distribution name as written in the manifest (e.g., "my-package")
    pub name: String,
    /// Version as written in the manifest (e.g., "1.2.0")
    pub version: String,
}

impl PackageIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}
