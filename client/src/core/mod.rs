//! # Core Abstractions
//!
//! Error types and service traits shared by every other module.
//!
//! - **[`error`]**: `ClientError`, `Result<T>`
//! - **[`service`]**: `AuthApi`, `FinanceApi` (implemented by the gateway client)

pub mod error;
pub mod service;

pub use error::{ClientError, Result};
pub use service::{AuthApi, FinanceApi};
