//! # Client Error Types
//!
//! Consolidated error handling for the finance client.
//!
//! ## Error Categories
//!
//! - **Network**: no server response at all (timeout, connection refused, DNS)
//! - **Http**: the server answered with a failure status, optionally with a `detail`
//! - **Auth**: login or registration was rejected
//! - **InvalidBudget / InvalidGoal**: a derived-state calculation received a degenerate record
//! - **Decode**: a response did not have the expected shape
//! - **Storage**: the persistent key-value store failed
//! - **Config**: startup configuration is missing or invalid
//!
//! The variants stay distinct all the way up so that screens can tell
//! "you are offline" apart from "the server said no".
//!
//! ## Usage Pattern
//!
//! ```rust
//! use finance_client::core::error::ClientError;
//!
//! let err = ClientError::Http { status: 404, detail: Some("Goal not found".to_string()) };
//! assert_eq!(err.user_message_or("Could not load goals"), "Goal not found");
//!
//! let offline = ClientError::Network("connection refused".to_string());
//! assert_eq!(offline.user_message_or("Could not load goals"), "Could not load goals");
//! ```

use thiserror::Error;

/// Client-wide error type.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    /// No response from the server (timeout, connectivity).
    #[error("Network error: {0}")]
    Network(String),

    /// The server responded with a non-success status.
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Http { status: u16, detail: Option<String> },

    /// Login or registration rejected. The message is shown to the user as is.
    #[error("{0}")]
    Auth(String),

    /// Budget limit is zero, negative, missing or not a number.
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),

    /// Goal target is zero, negative, missing or not a number.
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    /// Response body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Persistent key-value store failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// HTTP status, when the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for a 401 response.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// True when no response was received.
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    /// Server detail or auth message if there is one, otherwise `fallback`.
    ///
    /// Resource screens pass their own generic message as the fallback.
    pub fn user_message_or(&self, fallback: &str) -> String {
        match self {
            ClientError::Http { detail: Some(detail), .. } => detail.clone(),
            ClientError::Auth(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    /// User-facing message with a generic fallback per category.
    pub fn user_message(&self) -> String {
        let fallback = match self {
            ClientError::Network(_) => "Unable to reach the server. Check your connection.",
            ClientError::Http { status: 401, .. } => "Your session has expired. Please log in again.",
            ClientError::Http { .. } => "The server could not complete the request.",
            ClientError::InvalidBudget(_) | ClientError::InvalidGoal(_) => "This item has invalid amounts.",
            ClientError::Decode(_) => "Received an unexpected response from the server.",
            ClientError::Storage(_) => "Could not access local storage.",
            ClientError::Config(_) => "The app is not configured correctly.",
            ClientError::Auth(_) => "Authentication failed.",
        };
        self.user_message_or(fallback)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if err.is_timeout() {
            ClientError::Network(format!("request timed out: {}", err))
        } else if err.is_builder() {
            ClientError::Config(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Storage(err.to_string())
    }
}
