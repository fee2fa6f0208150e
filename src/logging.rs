use std::error::Error;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::DEFAULT_LOG_FILTER;

/// Initialize the global tracing subscriber.
///
/// The level comes from `RUST_LOG`, defaulting to "warn". Logs go to stderr,
/// keeping stdout for the job log, or as JSON lines to `log_file` when given.
/// Keep the returned guard alive until exit so buffered file logs are flushed.
pub fn init(log_file: Option<&Path>) -> Result<Option<WorkerGuard>, Box<dyn Error + Send + Sync>> {
    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| format!("log file path has no file name: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name.to_string_lossy())
                .build(dir)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt::layer().json().with_writer(writer))
                .try_init()?;

            Ok(Some(guard))
        }
        None => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact();

            tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt_layer)
                .try_init()?;

            Ok(None)
        }
    }
}
