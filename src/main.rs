use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use pyproject_version_check::config::{self, Config, DEFAULT_TIMEOUT_SECS};
use pyproject_version_check::logging;
use pyproject_version_check::version::registries::SimpleIndexRegistry;

#[derive(Parser)]
#[command(name = "pyproject-version-check")]
#[command(
    version,
    about = "Check whether the version in pyproject.toml is already published on a package index"
)]
struct Cli {
    /// Path to pyproject.toml
    pyproject: PathBuf,

    /// Base URL of the simple index (e.g., https://pypi.org/simple)
    index: String,

    /// Seconds to wait for the index before giving up
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Write logs as JSON lines to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = logging::init(cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging")?;

    let config = Config::new(cli.pyproject, cli.index)
        .with_output_path(config::output_path_from_env())
        .with_timeout(Duration::from_secs(cli.timeout_secs));

    let registry = SimpleIndexRegistry::new(&config.index, config.timeout)
        .context("Failed to create HTTP client")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut stdout = std::io::stdout().lock();
    match runtime.block_on(pyproject_version_check::run(&config, &registry, &mut stdout)) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("::error:: Error: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
