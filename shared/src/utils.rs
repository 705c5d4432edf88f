//! # Shared Utility Functions
//!
//! Display helpers used wherever amounts and ratios are rendered.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_currency, format_percent};
//!
//! assert_eq!(format_currency(1250.0), "€1250.00");
//! assert_eq!(format_percent(0.904), "90%");
//! ```

use chrono::{SecondsFormat, Utc};

/// Currency symbol prepended to every displayed amount.
pub const CURRENCY_SYMBOL: &str = "€";

/// Format an amount with two decimals and the currency symbol.
///
/// Negative amounts keep their sign in front of the symbol.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_currency;
///
/// assert_eq!(format_currency(12.5), "€12.50");
/// assert_eq!(format_currency(-3.0), "-€3.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", CURRENCY_SYMBOL, amount.abs())
    } else {
        format!("{}{:.2}", CURRENCY_SYMBOL, amount)
    }
}

/// Format a ratio (`0.0..=1.0`) as a whole percentage.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Current instant as an RFC 3339 string, the format the API expects for dates.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
