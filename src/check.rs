//! One run: manifest -> index -> outputs

use std::io::Write;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::CheckError;
use crate::output::{OutputSet, OutputWriter};
use crate::parser::{PackageIdentity, read_package_identity};
use crate::version::registry::SimpleIndex;
use crate::version::types::VersionSet;

/// What a successful run found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub identity: PackageIdentity,
    pub versions: VersionSet,
    pub current_version_exists: bool,
}

/// Reads the manifest, queries `index` and writes the outputs.
///
/// Progress and the echoed outputs go to `stdout`. Nothing is written to the
/// output file unless every earlier step succeeded.
pub async fn run<W: Write>(
    config: &Config,
    index: &dyn SimpleIndex,
    stdout: &mut W,
) -> Result<CheckOutcome, CheckError> {
    config.validate()?;

    let identity = read_package_identity(&config.manifest_path)?;
    writeln!(
        stdout,
        "Package: {}   Version: {}",
        identity.name, identity.version
    )?;
    writeln!(stdout, "Index to check: {}", config.index)?;

    let versions = index
        .fetch_versions(&identity.name)
        .await
        .map_err(|source| CheckError::IndexUnavailable {
            index: config.index.clone(),
            package: identity.name.clone(),
            source,
        })?;

    if versions.is_empty() {
        writeln!(
            stdout,
            "No versions found for package {} on index {}.",
            identity.name, config.index
        )?;
    } else {
        let listed: Vec<&str> = versions.iter().collect();
        writeln!(stdout, "Found versions: {}", listed.join(", "))?;
    }

    let current_version_exists = versions.contains(&identity.version);
    info!(
        "{} {} published on {}: {}",
        identity.name, identity.version, config.index, current_version_exists
    );

    let outputs = OutputSet::new(&identity, current_version_exists);
    writeln!(stdout, "outputs:")?;
    let writer = OutputWriter::new(config.output_path.clone());
    writer.write_set(&outputs, stdout)?;
    debug!("Outputs written: {:?}", outputs);

    Ok(CheckOutcome {
        identity,
        versions,
        current_version_exists,
    })
}
