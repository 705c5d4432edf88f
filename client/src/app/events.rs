//! # Application Events
//!
//! Signals sent from the session layer to whatever renders the UI.

use super::state::Screen;

/// Events delivered over the app's event channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Show the given screen
    Navigate(Screen),
    /// The server rejected the credential and the session was torn down
    SessionExpired,
}
