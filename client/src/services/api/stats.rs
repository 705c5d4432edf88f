//! # Statistics Endpoint

use shared::Stats;

use super::client::ApiClient;
use crate::core::error::Result;

/// Message shown when statistics cannot be loaded.
pub const FAILURE_MESSAGE: &str = "Could not load statistics";

/// Fetch a fresh snapshot. Callers replace whatever they held before.
pub async fn get_stats(client: &ApiClient) -> Result<Stats> {
    client.get_json(client.url(&["stats"])?).await
}
