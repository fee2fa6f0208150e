use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::parser::ManifestError;
use crate::version::error::RegistryError;

/// Fatal failure of a run; `main` prints it as one `::error::` line
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Failed to query index {index} for package {package}: {source} - treated as unavailable")]
    IndexUnavailable {
        index: String,
        package: String,
        #[source]
        source: RegistryError,
    },

    #[error("Failed to write outputs: {0}")]
    Output(#[from] io::Error),
}
