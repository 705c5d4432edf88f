//! # Savings Goal Endpoints

use shared::{Goal, NewGoal};

use super::client::ApiClient;
use crate::core::error::Result;

/// Message shown when a goal call fails without a server detail.
pub const FAILURE_MESSAGE: &str = "Could not load or update goals";

pub async fn list_goals(client: &ApiClient) -> Result<Vec<Goal>> {
    client.get_json(client.url(&["goals"])?).await
}

#[tracing::instrument(skip(client, goal), fields(name = %goal.name))]
pub async fn create_goal(client: &ApiClient, goal: &NewGoal) -> Result<Goal> {
    client.post_json(client.url(&["goals"])?, goal).await
}

/// `PUT /goals/{id}/contribute?amount=<n>`
#[tracing::instrument(skip(client))]
pub async fn contribute_to_goal(client: &ApiClient, id: &str, amount: f64) -> Result<Goal> {
    let mut url = client.url(&["goals", id, "contribute"])?;
    url.query_pairs_mut().append_pair("amount", &amount.to_string());
    client.put_json::<(), Goal>(url, None).await
}

#[tracing::instrument(skip(client))]
pub async fn delete_goal(client: &ApiClient, id: &str) -> Result<()> {
    client.delete(client.url(&["goals", id])?).await
}
