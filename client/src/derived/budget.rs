//! Budget utilization.
//!
//! The display ratio is clamped to `1.0`; the tier is picked from the
//! unclamped ratio so an overspent budget still reads as critical.

use shared::Budget;

use crate::core::error::{ClientError, Result};

/// Lower bound (inclusive) of the warning tier.
pub const WARNING_THRESHOLD: f64 = 0.70;
/// Lower bound (inclusive) of the critical tier.
pub const CRITICAL_THRESHOLD: f64 = 0.90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    Normal,
    Warning,
    Critical,
}

impl BudgetTier {
    /// Tier for an unclamped spent/limit ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= CRITICAL_THRESHOLD {
            BudgetTier::Critical
        } else if ratio >= WARNING_THRESHOLD {
            BudgetTier::Warning
        } else {
            BudgetTier::Normal
        }
    }

    /// Progress bar color.
    pub fn color(&self) -> &'static str {
        match self {
            BudgetTier::Normal => "#4CAF50",
            BudgetTier::Warning => "#FF9800",
            BudgetTier::Critical => "#F44336",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetUtilization {
    /// `spent / limit`, clamped to `[0.0, 1.0]` for display.
    pub ratio: f64,
    /// `spent / limit` as computed.
    pub raw_ratio: f64,
    pub tier: BudgetTier,
}

impl BudgetUtilization {
    /// Zero state shown for a budget whose utilization cannot be computed.
    pub fn neutral() -> Self {
        Self {
            ratio: 0.0,
            raw_ratio: 0.0,
            tier: BudgetTier::Normal,
        }
    }

    /// Whole-number percentage of the clamped ratio.
    pub fn percent(&self) -> u8 {
        (self.ratio * 100.0).round() as u8
    }

    /// Whether to show the "approaching limit" warning.
    pub fn shows_warning(&self) -> bool {
        self.tier == BudgetTier::Critical
    }
}

/// Compute utilization for a single budget.
///
/// Fails with [`ClientError::InvalidBudget`] when the limit is zero,
/// negative or not a finite number.
pub fn budget_utilization(budget: &Budget) -> Result<BudgetUtilization> {
    utilization(budget.spent_amount, budget.limit_amount)
}

pub fn utilization(spent: f64, limit: f64) -> Result<BudgetUtilization> {
    if !limit.is_finite() || limit <= 0.0 {
        return Err(ClientError::InvalidBudget(format!("limit must be positive, got {}", limit)));
    }
    if !spent.is_finite() {
        return Err(ClientError::InvalidBudget(format!("spent amount is not a number: {}", spent)));
    }

    let raw_ratio = spent / limit;
    Ok(BudgetUtilization {
        ratio: raw_ratio.clamp(0.0, 1.0),
        raw_ratio,
        tier: BudgetTier::from_ratio(raw_ratio),
    })
}
