//! Index trait for fetching published versions of a package

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::VersionSet;

/// Trait for fetching package versions from a simple package index
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SimpleIndex: Send + Sync {
    /// Fetches all versions published for a package
    ///
    /// # Arguments
    /// * `package_name` - The distribution name as declared in the manifest
    ///
    /// # Returns
    /// * `Ok(VersionSet)` - Distinct versions, empty when the index has no such package
    /// * `Err(RegistryError)` - If the index cannot be queried
    async fn fetch_versions(&self, package_name: &str) -> Result<VersionSet, RegistryError>;
}
