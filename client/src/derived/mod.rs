//! # Derived State
//!
//! Pure calculators over fetched records. Nothing here is cached; screens
//! recompute from the latest snapshot on every render.

pub mod budget;
pub mod chart;
pub mod goal;

pub use budget::{budget_utilization, BudgetTier, BudgetUtilization, CRITICAL_THRESHOLD, WARNING_THRESHOLD};
pub use chart::{category_slices, income_expense_bars, Bar, CategorySlice, CHART_PALETTE};
pub use goal::{goal_progress, GoalProgress};
