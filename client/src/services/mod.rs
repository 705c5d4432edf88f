//! # Services Module
//!
//! Integrations with the remote finance API.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 finance client               │
//! │                                              │
//! │  screens ──▶ FinanceApi ──▶ ApiClient ───────┼──▶ /api/*
//! │                              │   ▲           │
//! │                     bearer() │   │ teardown  │
//! │                              ▼   │ on 401    │
//! │                          SessionManager      │
//! └──────────────────────────────────────────────┘
//! ```

pub mod api;
