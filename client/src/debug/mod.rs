//! # Debug Module
//!
//! Logging setup. Everything else logs through `tracing` macros directly.

pub mod config;
pub mod logger;

pub use config::LogConfig;
