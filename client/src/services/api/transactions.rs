//! # Transaction Endpoints

use shared::{NewTransaction, Transaction};

use super::client::ApiClient;
use crate::core::error::Result;

/// Message shown when a transaction call fails without a server detail.
pub const FAILURE_MESSAGE: &str = "Could not load or update transactions";

pub async fn list_transactions(client: &ApiClient) -> Result<Vec<Transaction>> {
    client.get_json(client.url(&["transactions"])?).await
}

#[tracing::instrument(skip(client, transaction), fields(category = %transaction.category))]
pub async fn create_transaction(client: &ApiClient, transaction: &NewTransaction) -> Result<Transaction> {
    client.post_json(client.url(&["transactions"])?, transaction).await
}

#[tracing::instrument(skip(client))]
pub async fn delete_transaction(client: &ApiClient, id: &str) -> Result<()> {
    client.delete(client.url(&["transactions", id])?).await
}
