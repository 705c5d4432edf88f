//! Savings goal progress.

use shared::Goal;

use crate::core::error::{ClientError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    /// `current / target`, clamped to `[0.0, 1.0]`.
    pub ratio: f64,
    /// `current >= target` on the unclamped amounts.
    pub is_complete: bool,
    remaining: f64,
}

impl GoalProgress {
    pub fn neutral() -> Self {
        Self {
            ratio: 0.0,
            is_complete: false,
            remaining: 0.0,
        }
    }

    pub fn percent(&self) -> u8 {
        (self.ratio * 100.0).round() as u8
    }

    /// Amount still to save; zero once the goal is reached.
    pub fn remaining(&self) -> f64 {
        self.remaining
    }
}

/// Compute progress for a single goal.
pub fn goal_progress(goal: &Goal) -> Result<GoalProgress> {
    progress(goal.current_amount, goal.target_amount)
}

pub fn progress(current: f64, target: f64) -> Result<GoalProgress> {
    if !target.is_finite() || target <= 0.0 {
        return Err(ClientError::InvalidGoal(format!("target must be positive, got {}", target)));
    }
    if !current.is_finite() {
        return Err(ClientError::InvalidGoal(format!("current amount is not a number: {}", current)));
    }

    Ok(GoalProgress {
        ratio: (current / target).clamp(0.0, 1.0),
        is_complete: current >= target,
        remaining: (target - current).max(0.0),
    })
}
