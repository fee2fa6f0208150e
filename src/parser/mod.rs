//! Parser layer
//! - traits.rs: ManifestParser trait definition
//! - types.rs: Common types (PackageIdentity)
//! - pyproject_toml.rs: pyproject.toml `[project]` parser
//! - manifest.rs: file access and path-aware errors

pub mod manifest;
pub mod pyproject_toml;
pub mod traits;
pub mod types;

pub use manifest::{ManifestError, read_package_identity};
pub use pyproject_toml::PyprojectTomlParser;
pub use traits::{ManifestParser, ParseError};
pub use types::PackageIdentity;
