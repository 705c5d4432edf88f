//! Chart series for the dashboard.

use shared::{CategoryAmounts, Stats};

/// Colors assigned to category slices, in order.
pub const CHART_PALETTE: [&str; 6] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40"];

pub const INCOME_COLOR: &str = "#4CAF50";
pub const EXPENSE_COLOR: &str = "#F44336";

/// One slice of the expenses-by-category chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: String,
    pub amount: f64,
    pub color_index: usize,
}

impl CategorySlice {
    pub fn color(&self) -> &'static str {
        CHART_PALETTE[self.color_index % CHART_PALETTE.len()]
    }
}

/// Slices in the mapping's insertion order; `color_index` is the position
/// modulo the palette size so legends stay stable across renders.
pub fn category_slices(amounts: &CategoryAmounts) -> Vec<CategorySlice> {
    amounts
        .iter()
        .enumerate()
        .map(|(i, (category, amount))| CategorySlice {
            category: category.to_string(),
            amount,
            color_index: i % CHART_PALETTE.len(),
        })
        .collect()
}

/// A single bar of the income vs expenses chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub amount: f64,
    pub color: &'static str,
}

/// Recent income and recent expenses, in that order.
pub fn income_expense_bars(stats: &Stats) -> [Bar; 2] {
    [
        Bar {
            label: "Income",
            amount: stats.recent_income,
            color: INCOME_COLOR,
        },
        Bar {
            label: "Expenses",
            amount: stats.recent_expenses,
            color: EXPENSE_COLOR,
        },
    ]
}
