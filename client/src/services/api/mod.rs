//! # Finance API Client Module
//!
//! HTTP client for the finance API and its per-resource endpoints.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports and trait impls
//! ├── client.rs        - ApiClient: transport, bearer hook, 401 hook
//! ├── auth.rs          - /auth/login, /auth/register
//! ├── transactions.rs  - /transactions
//! ├── budgets.rs       - /budgets
//! ├── goals.rs         - /goals, /goals/{id}/contribute
//! ├── stats.rs         - /stats
//! └── advice.rs        - /advice
//! ```

pub mod advice;
pub mod auth;
pub mod budgets;
pub mod client;
pub mod goals;
pub mod stats;
pub mod transactions;

pub use client::{ApiClient, REQUEST_TIMEOUT};

use async_trait::async_trait;
use shared::{
    AuthResponse, Budget, BudgetInput, Goal, LoginRequest, NewGoal, NewTransaction, RegisterRequest,
    Stats, Transaction,
};

use crate::core::error::Result;
use crate::core::service::{AuthApi, FinanceApi};

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        auth::login(self, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        auth::register(self, request).await
    }
}

#[async_trait]
impl FinanceApi for ApiClient {
    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        transactions::list_transactions(self).await
    }

    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction> {
        transactions::create_transaction(self, transaction).await
    }

    async fn delete_transaction(&self, id: &str) -> Result<()> {
        transactions::delete_transaction(self, id).await
    }

    async fn list_budgets(&self) -> Result<Vec<Budget>> {
        budgets::list_budgets(self).await
    }

    async fn create_budget(&self, budget: &BudgetInput) -> Result<Budget> {
        budgets::create_budget(self, budget).await
    }

    async fn update_budget(&self, id: &str, budget: &BudgetInput) -> Result<Budget> {
        budgets::update_budget(self, id, budget).await
    }

    async fn delete_budget(&self, id: &str) -> Result<()> {
        budgets::delete_budget(self, id).await
    }

    async fn list_goals(&self) -> Result<Vec<Goal>> {
        goals::list_goals(self).await
    }

    async fn create_goal(&self, goal: &NewGoal) -> Result<Goal> {
        goals::create_goal(self, goal).await
    }

    async fn contribute_to_goal(&self, id: &str, amount: f64) -> Result<Goal> {
        goals::contribute_to_goal(self, id, amount).await
    }

    async fn delete_goal(&self, id: &str) -> Result<()> {
        goals::delete_goal(self, id).await
    }

    async fn get_stats(&self) -> Result<Stats> {
        stats::get_stats(self).await
    }

    async fn get_advice(&self, context: &str) -> Result<String> {
        advice::get_advice(self, context).await
    }
}
