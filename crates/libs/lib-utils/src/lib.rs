//! # Utilities Library
//!
//! Shared helpers for reading configuration from the environment.

pub mod envs;

pub use envs::{get_env, get_env_flag, get_env_or, get_env_parse};
