//! # Screen Loaders
//!
//! Fetch a screen's records and pair each with its derived state. Every
//! call fetches fresh data; nothing is kept between loads.

use shared::{Budget, Goal, Stats};

use crate::core::error::Result;
use crate::core::service::FinanceApi;
use crate::derived::{
    budget_utilization, category_slices, goal_progress, income_expense_bars, Bar, BudgetUtilization,
    CategorySlice, GoalProgress,
};

/// Everything the dashboard renders.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub stats: Stats,
    pub slices: Vec<CategorySlice>,
    pub bars: [Bar; 2],
}

impl Dashboard {
    pub fn from_stats(stats: Stats) -> Self {
        let slices = category_slices(&stats.category_expenses);
        let bars = income_expense_bars(&stats);
        Self { stats, slices, bars }
    }
}

#[derive(Debug, Clone)]
pub struct BudgetView {
    pub budget: Budget,
    pub utilization: BudgetUtilization,
}

impl BudgetView {
    /// Records with a degenerate limit get the neutral state.
    pub fn new(budget: Budget) -> Self {
        let utilization = budget_utilization(&budget).unwrap_or_else(|e| {
            tracing::warn!(budget_id = %budget.id, error = %e, "Showing neutral utilization");
            BudgetUtilization::neutral()
        });
        Self { budget, utilization }
    }
}

#[derive(Debug, Clone)]
pub struct GoalView {
    pub goal: Goal,
    pub progress: GoalProgress,
}

impl GoalView {
    pub fn new(goal: Goal) -> Self {
        let progress = goal_progress(&goal).unwrap_or_else(|e| {
            tracing::warn!(goal_id = %goal.id, error = %e, "Showing neutral progress");
            GoalProgress::neutral()
        });
        Self { goal, progress }
    }
}

pub async fn load_dashboard(api: &dyn FinanceApi) -> Result<Dashboard> {
    Ok(Dashboard::from_stats(api.get_stats().await?))
}

pub async fn load_budgets(api: &dyn FinanceApi) -> Result<Vec<BudgetView>> {
    Ok(api.list_budgets().await?.into_iter().map(BudgetView::new).collect())
}

pub async fn load_goals(api: &dyn FinanceApi) -> Result<Vec<GoalView>> {
    Ok(api.list_goals().await?.into_iter().map(GoalView::new).collect())
}
