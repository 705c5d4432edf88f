//! # Budget Endpoints

use shared::{Budget, BudgetInput};

use super::client::ApiClient;
use crate::core::error::Result;

/// Message shown when a budget call fails without a server detail.
pub const FAILURE_MESSAGE: &str = "Could not load or update budgets";

pub async fn list_budgets(client: &ApiClient) -> Result<Vec<Budget>> {
    client.get_json(client.url(&["budgets"])?).await
}

#[tracing::instrument(skip(client, budget), fields(category = %budget.category))]
pub async fn create_budget(client: &ApiClient, budget: &BudgetInput) -> Result<Budget> {
    client.post_json(client.url(&["budgets"])?, budget).await
}

#[tracing::instrument(skip(client, budget))]
pub async fn update_budget(client: &ApiClient, id: &str, budget: &BudgetInput) -> Result<Budget> {
    client.put_json(client.url(&["budgets", id])?, Some(budget)).await
}

#[tracing::instrument(skip(client))]
pub async fn delete_budget(client: &ApiClient, id: &str) -> Result<()> {
    client.delete(client.url(&["budgets", id])?).await
}
