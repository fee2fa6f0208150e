use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Index request constants
// =============================================================================

/// Timeout for the index request in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Media type of the simple repository API in its JSON form (PEP 691)
pub const SIMPLE_JSON_MEDIA_TYPE: &str = "application/vnd.pypi.simple.v1+json";

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Environment
// =============================================================================

/// Environment variable naming the file that receives `key=value` outputs
pub const OUTPUT_ENV_VAR: &str = "GITHUB_OUTPUT";

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path to pyproject.toml
    pub manifest_path: PathBuf,
    /// Base URL of the simple index (e.g., "https://pypi.org/simple")
    pub index: String,
    /// File receiving `key=value` lines; `None` disables the export
    pub output_path: Option<PathBuf>,
    pub timeout: Duration,
}

impl Config {
    pub fn new(manifest_path: impl Into<PathBuf>, index: impl Into<String>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            index: index.into(),
            output_path: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_output_path(mut self, output_path: Option<PathBuf>) -> Self {
        self.output_path = output_path;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks the arguments before any work is done
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.manifest_path.exists() {
            return Err(ConfigError::ManifestMissing(self.manifest_path.clone()));
        }
        if self.index.is_empty() {
            return Err(ConfigError::EmptyIndex);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{} does not exist.", .0.display())]
    ManifestMissing(PathBuf),

    #[error("index must be specified.")]
    EmptyIndex,
}

/// Returns the output file path from `GITHUB_OUTPUT`.
pub fn output_path_from_env() -> Option<PathBuf> {
    output_path_with_env(std::env::var(OUTPUT_ENV_VAR).ok())
}

fn output_path_with_env(value: Option<String>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
