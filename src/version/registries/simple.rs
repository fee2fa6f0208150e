//! Simple repository API client (PEP 691 JSON form)
//!
//! `GET {base_url}/{package}` with the JSON media type returns the list of
//! distribution files; versions are derived from their filenames.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{SIMPLE_JSON_MEDIA_TYPE, USER_AGENT};
use crate::version::error::RegistryError;
use crate::version::filename::filename_to_version;
use crate::version::registry::SimpleIndex;
use crate::version::types::VersionSet;

/// Simple index client
pub struct SimpleIndexRegistry {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl SimpleIndexRegistry {
    /// Creates a client for `base_url` whose requests fail after `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            timeout,
        })
    }

    fn classify(&self, error: reqwest::Error) -> RegistryError {
        if error.is_timeout() {
            RegistryError::Timeout(self.timeout)
        } else {
            RegistryError::Network(error)
        }
    }
}

/// Project page from the simple JSON API
#[derive(Debug, Deserialize)]
struct ProjectPage {
    files: Vec<ProjectFile>,
}

/// One distribution file; only the filename is needed
#[derive(Debug, Deserialize)]
struct ProjectFile {
    filename: String,
}

#[async_trait]
impl SimpleIndex for SimpleIndexRegistry {
    async fn fetch_versions(&self, package_name: &str) -> Result<VersionSet, RegistryError> {
        let url = format!("{}/{}", self.base_url, package_name);
        debug!("Fetching simple index page: {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, SIMPLE_JSON_MEDIA_TYPE)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();

        // Unknown package and package without files look the same to callers
        if status == reqwest::StatusCode::NOT_FOUND {
            debug!("Index has no page for {}: {}", package_name, url);
            return Ok(VersionSet::empty());
        }

        if !status.is_success() {
            warn!("Index returned status {}: {}", status, url);
            return Err(RegistryError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        let page: ProjectPage = serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse index response from {}: {}", url, e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        let versions: VersionSet = page
            .files
            .iter()
            .map(|file| filename_to_version(package_name, &file.filename))
            .collect();

        debug!(
            "Found {} versions in {} files for package {}",
            versions.len(),
            page.files.len(),
            package_name
        );

        Ok(versions)
    }
}
