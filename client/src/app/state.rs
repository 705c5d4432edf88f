//! # Screens
//!
//! The navigation targets the session layer can ask for.

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Unauthenticated entry point (login/registration)
    Login,
    /// Balance, totals and charts
    Dashboard,
    /// Transaction list and entry form
    Transactions,
    /// Budgets with utilization bars
    Budgets,
    /// Savings goals with progress bars
    Goals,
    /// AI-generated advice
    Advice,
}

impl Screen {
    /// Screens reachable from the tab bar, in order
    pub fn tabs() -> &'static [Screen] {
        &[
            Screen::Dashboard,
            Screen::Transactions,
            Screen::Budgets,
            Screen::Goals,
            Screen::Advice,
        ]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Sign In",
            Screen::Dashboard => "Dashboard",
            Screen::Transactions => "Transactions",
            Screen::Budgets => "Budgets",
            Screen::Goals => "Savings Goals",
            Screen::Advice => "Financial Advice",
        }
    }

    /// Whether the screen needs an authenticated session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Screen::Login)
    }
}
