//! Session state types.

use std::fmt;

use shared::UserInfo;

/// Where the session lifecycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// Before the restore attempt at startup
    Unknown,
    /// A session with a credential is active
    Authenticated,
    /// No session; the login screen should be shown
    Unauthenticated,
}

/// Opaque bearer token.
///
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token. Blank tokens are rejected.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// The authenticated identity plus its credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: UserInfo,
    pub credential: Credential,
}

/// Credential captured by a request at send time, tagged with the session it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerSnapshot {
    pub credential: Credential,
    pub generation: u64,
}

/// In-memory state owned by the session manager.
#[derive(Debug)]
pub(crate) struct SessionState {
    pub status: AuthStatus,
    pub session: Option<Session>,
    /// Bumped on every successful authentication; identifies the logical session.
    pub generation: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            status: AuthStatus::Unknown,
            session: None,
            generation: 0,
        }
    }
}
