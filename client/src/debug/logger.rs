//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{LogConfig, DEFAULT_LOG_LEVEL, LOG_FILE_NAME};
use crate::core::error::{ClientError, Result};

/// Initialize the logging system
///
/// Sets up:
/// - Daily rotation of `<log_dir>/finance-client.log`
/// - Non-blocking writes
/// - An optional stdout layer when `log_stdout` is set
///
/// The returned guard flushes buffered lines on drop; keep it alive for
/// the lifetime of the program.
pub fn init(config: &LogConfig) -> Result<WorkerGuard> {
    fs::create_dir_all(&config.log_dir).map_err(|e| {
        ClientError::Config(format!("failed to create log directory {}: {}", config.log_dir.display(), e))
    })?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let stdout_layer = config
        .log_stdout
        .then(|| fmt::layer().with_target(false).compact());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| ClientError::Config(format!("logging already initialized: {}", e)))?;

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        stdout = config.log_stdout,
        "Logging initialized"
    );

    Ok(guard)
}
