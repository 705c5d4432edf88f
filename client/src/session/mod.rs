//! # Session
//!
//! The authenticated-identity lifecycle and its persistence.
//!
//! - [`manager`]: `SessionManager` (restore, login, register, logout, teardown)
//! - [`state`]: `AuthStatus`, `Session`, `Credential`
//! - [`store`]: `KeyValueStore` trait with memory and file backends
//!
//! The session is the only shared mutable state in the client. It is
//! written exclusively by the manager; the gateway client reads it through
//! [`SessionManager::bearer`] and reports 401s through
//! [`SessionManager::teardown`].

pub mod manager;
pub mod state;
pub mod store;

pub use manager::SessionManager;
pub use state::{AuthStatus, BearerSnapshot, Credential, Session};
pub use store::{FileStore, KeyValueStore, MemoryStore, STORE_KEY_TOKEN, STORE_KEY_USER};
