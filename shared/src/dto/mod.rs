//! # Data Transfer Objects (DTOs)
//!
//! Every structure exchanged with the finance API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, identity and error bodies
//! - [`finance`] - Transactions, budgets, goals, statistics and advice
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case, matching the API. Rust-side names that would
//!   clash with keywords or read ambiguously are renamed (`type` → `kind`,
//!   `limit` → `limit_amount`, `spent` → `spent_amount`)
//! - **Enums**: lowercase strings (`"income"`, `"monthly"`)
//! - **Optional fields**: omitted when `None`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! { "email": "ada@example.com", "password": "hunter22" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "id": "665f1c...", "email": "ada@example.com", "name": "Ada", "token": "eyJhbGciOi..." }
//! ```

pub mod auth;
pub mod finance;

pub use auth::*;
pub use finance::*;
