//! Version layer: asks a package index which versions of a package exist
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ SimpleIndex │────▶│  filename   │────▶│ VersionSet  │
//! │  (fetch)    │     │ (-> version)│     │(dedup, sort)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: `SimpleIndex` trait for fetching versions from a remote index
//! - [`registries`]: Concrete implementation over the simple JSON API
//! - [`filename`]: Version extraction from distribution filenames
//! - [`error`]: Error type for index queries
//! - [`types`]: `VersionSet`

pub mod error;
pub mod filename;
pub mod registries;
pub mod registry;
pub mod types;
