//! # Finance Client - Library Root
//!
//! Client-side core of a personal-finance app: the authenticated session,
//! the HTTP gateway to the finance API, and the pure calculators that turn
//! fetched records into what screens display.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              finance-client (this crate)               │
//! ├────────────────────────────────────────────────────────┤
//! │  Reqwest       - HTTP client                           │
//! │  Tokio         - Async runtime                         │
//! │  tracing       - Structured, file-rotated logging      │
//! │  serde_json    - Wire format and on-disk session file  │
//! └────────────────────────────────────────────────────────┘
//!                    │ HTTP (Bearer)
//!                    ▼
//!          ┌──────────────────┐
//!          │ Finance API      │
//!          │ /api/*           │
//!          └──────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: `App` facade, screens, navigation events, screen loaders
//! - **config**: environment-driven `ClientConfig`
//! - **core**: `ClientError` and the `AuthApi` / `FinanceApi` service traits
//! - **debug**: logging setup
//! - **derived**: budget utilization, goal progress, chart series
//! - **services**: `ApiClient` and per-resource endpoints
//! - **session**: `SessionManager` and the persistent key-value store
//!
//! ## Session Flow
//!
//! ```text
//! Unknown ──restore()──▶ Authenticated ──logout() / 401──▶ Unauthenticated
//!    │                                                          │
//!    └────────restore()────────▶ Unauthenticated ◀──────────────┘
//!                                      │
//!                          login() / register()
//!                                      ▼
//!                                Authenticated
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod derived;
pub mod services;
pub mod session;

pub use app::App;
pub use config::ClientConfig;
pub use crate::core::error::{ClientError, Result};
