//! Logging configuration from environment variables

use std::path::PathBuf;

use lib_utils::{get_env_flag, get_env_or};

use crate::core::error::{ClientError, Result};

pub const LOG_FILE_NAME: &str = "finance-client.log";
pub const DEFAULT_LOG_LEVEL: &str = "finance_client=info,warn";

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory holding the daily-rotated log files
    pub log_dir: PathBuf,
    /// Filter directives (e.g., "finance_client=debug,info")
    pub log_level: String,
    /// Mirror log output to stdout
    pub log_stdout: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_stdout: false,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            log_dir: PathBuf::from(get_env_or("FINANCE_LOG_DIR", "logs")),
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_LEVEL),
            log_stdout: get_env_flag("FINANCE_LOG_STDOUT", false).map_err(|e| ClientError::Config(e.to_string()))?,
        })
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}
