//! Checks whether the version declared in a project's `pyproject.toml` is
//! already published on a package index, and exports the answer as
//! GitHub Actions outputs.
//!
//! # Modules
//!
//! - [`parser`]: Reads `[project]` name and version from the manifest
//! - [`version`]: Queries the simple index and derives published versions
//! - [`output`]: Writes `key=value` outputs to the `GITHUB_OUTPUT` file
//! - [`check`]: Runs the steps above once
//! - [`config`]: Constants and run settings
//! - [`logging`]: tracing subscriber setup

pub mod check;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod version;

pub use check::{CheckOutcome, run};
pub use config::Config;
pub use error::CheckError;
