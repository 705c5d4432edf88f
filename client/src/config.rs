//! # Client Configuration
//!
//! Loaded once at startup from the environment (and an optional `.env` file).
//! The API base URL is the only setting that changes client behavior; the
//! rest decide where state and logs live.

use std::path::PathBuf;

use lib_utils::get_env_or;
use reqwest::Url;

use crate::core::error::{ClientError, Result};
use crate::debug::LogConfig;

pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:8001";
pub const DEFAULT_STORE_PATH: &str = "data/session.json";
const API_PREFIX: &str = "/api";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is joined onto, e.g. `http://host:8001/api`.
    pub api_base_url: String,
    /// JSON file backing the persistent key-value store.
    pub store_path: PathBuf,
    pub log: LogConfig,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            api_base_url: api_base_url(&get_env_or("FINANCE_API_URL", DEFAULT_API_ORIGIN)),
            store_path: PathBuf::from(get_env_or("FINANCE_STORE_PATH", DEFAULT_STORE_PATH)),
            log: LogConfig::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_base_url)
            .map_err(|e| ClientError::Config(format!("FINANCE_API_URL is not a valid URL: {}", e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ClientError::Config(format!(
                "FINANCE_API_URL must use http or https, got {}",
                other
            ))),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: api_base_url(DEFAULT_API_ORIGIN),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            log: LogConfig::default(),
        }
    }
}

/// Append `/api` to a backend origin unless it is already there.
pub fn api_base_url(origin: &str) -> String {
    let trimmed = origin.trim().trim_end_matches('/');
    if trimmed.ends_with(API_PREFIX) {
        trimmed.to_string()
    } else {
        format!("{}{}", trimmed, API_PREFIX)
    }
}
