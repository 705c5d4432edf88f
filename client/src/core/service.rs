//! # Service Traits
//!
//! Traits at the API seam, so session logic and screen loaders can be
//! exercised against in-memory fakes.

use async_trait::async_trait;
use shared::{
    AuthResponse, Budget, BudgetInput, Goal, LoginRequest, NewGoal, NewTransaction, RegisterRequest,
    Stats, Transaction,
};

use super::error::Result;

/// Raw authentication endpoints used by the session manager.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse>;

    /// `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse>;
}

/// Per-resource operations, one HTTP call each.
#[async_trait]
pub trait FinanceApi: Send + Sync {
    async fn list_transactions(&self) -> Result<Vec<Transaction>>;

    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction>;

    async fn delete_transaction(&self, id: &str) -> Result<()>;

    async fn list_budgets(&self) -> Result<Vec<Budget>>;

    async fn create_budget(&self, budget: &BudgetInput) -> Result<Budget>;

    async fn update_budget(&self, id: &str, budget: &BudgetInput) -> Result<Budget>;

    async fn delete_budget(&self, id: &str) -> Result<()>;

    async fn list_goals(&self) -> Result<Vec<Goal>>;

    async fn create_goal(&self, goal: &NewGoal) -> Result<Goal>;

    /// Add `amount` to the goal's current amount and return the updated goal.
    async fn contribute_to_goal(&self, id: &str, amount: f64) -> Result<Goal>;

    async fn delete_goal(&self, id: &str) -> Result<()>;

    async fn get_stats(&self) -> Result<Stats>;

    /// Ask for personalised advice; `context` may be empty.
    async fn get_advice(&self, context: &str) -> Result<String>;
}
