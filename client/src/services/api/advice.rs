//! # Advice Endpoint

use shared::{AdviceRequest, AdviceResponse};

use super::client::ApiClient;
use crate::core::error::Result;

/// Message shown when advice cannot be generated.
pub const FAILURE_MESSAGE: &str = "Could not get advice right now";

/// Ask for advice, optionally about a specific question.
#[tracing::instrument(skip(client, context))]
pub async fn get_advice(client: &ApiClient, context: &str) -> Result<String> {
    let request = AdviceRequest {
        context: context.to_string(),
    };
    let response: AdviceResponse = client.post_json(client.url(&["advice"])?, &request).await?;
    Ok(response.advice)
}
