//! # Shared Data Transfer Objects Library
//!
//! The contract between the finance client and the remote API.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication DTOs
//!   - **[`dto::finance`]**: Transactions, budgets, goals, stats, advice
//! - **[`utils`]**: Display helpers
//!   - **[`utils::format_currency`]**: Format a monetary amount
//!   - **[`utils::format_percent`]**: Format a ratio as a whole percentage
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, AuthResponse};
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let request = LoginRequest {
//!     email: "ada@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: AuthResponse = reqwest::Client::new()
//!     .post("http://localhost:8001/api/auth/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
