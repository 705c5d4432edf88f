//! # Session Manager
//!
//! Owns the authenticated-identity lifecycle:
//!
//! ```text
//!            restore() finds token + user
//!   Unknown ───────────────────────────────▶ Authenticated
//!      │                                      ▲        │
//!      │ restore() finds nothing              │ login  │ logout / 401 teardown
//!      ▼                                      │ register
//!   Unauthenticated ──────────────────────────┘        │
//!      ▲                                               │
//!      └───────────────────────────────────────────────┘
//! ```
//!
//! Every mutation writes the store and then the in-memory state while
//! holding one async mutex, so the persisted credential and the in-memory
//! session never diverge across operations. Teardown after a 401 is
//! single-shot per logical session: a flag armed on authentication and
//! disarmed with a compare-and-swap.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};
use tokio::sync::{watch, Mutex};

use super::state::{AuthStatus, BearerSnapshot, Credential, Session, SessionState};
use super::store::{KeyValueStore, STORE_KEY_TOKEN, STORE_KEY_USER};
use crate::app::events::AppEvent;
use crate::app::state::Screen;
use crate::core::error::{ClientError, Result};
use crate::core::service::AuthApi;

/// Fallback message when a login is rejected without a server detail.
pub const LOGIN_FAILED: &str = "Login failed";

/// Fallback message when a registration is rejected without a server detail.
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// The single owner of the process-wide session.
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    state: RwLock<SessionState>,
    status_tx: watch::Sender<AuthStatus>,
    events: Sender<AppEvent>,
    teardown_armed: AtomicBool,
    mutation: Mutex<()>,
}

impl SessionManager {
    /// Create a manager in the `Unknown` state. Call [`restore`](Self::restore) next.
    pub fn new(store: Arc<dyn KeyValueStore>, events: Sender<AppEvent>) -> Self {
        let (status_tx, _) = watch::channel(AuthStatus::Unknown);
        Self {
            store,
            state: RwLock::new(SessionState::default()),
            status_tx,
            events,
            teardown_armed: AtomicBool::new(false),
            mutation: Mutex::new(()),
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.state.read().status
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == AuthStatus::Authenticated
    }

    /// Receiver that observes every status transition.
    pub fn subscribe(&self) -> watch::Receiver<AuthStatus> {
        self.status_tx.subscribe()
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.state.read().session.as_ref().map(|s| s.user.clone())
    }

    /// Credential to attach to a request about to be sent, if any.
    pub fn bearer(&self) -> Option<BearerSnapshot> {
        let state = self.state.read();
        match (&state.status, &state.session) {
            (AuthStatus::Authenticated, Some(session)) => Some(BearerSnapshot {
                credential: session.credential.clone(),
                generation: state.generation,
            }),
            _ => None,
        }
    }

    /// Restore a persisted session at startup.
    ///
    /// Optimistic: the credential is not validated here. The first API call
    /// that gets a 401 tears the session down. Only the first call does any
    /// work; later calls return the current status.
    #[tracing::instrument(skip(self))]
    pub async fn restore(&self) -> AuthStatus {
        let _guard = self.mutation.lock().await;
        if self.status() != AuthStatus::Unknown {
            tracing::debug!("Session already restored");
            return self.status();
        }

        let token = self.read_key(STORE_KEY_TOKEN).await;
        let user = self.read_key(STORE_KEY_USER).await;

        let restored = match (&token, &user) {
            (Some(token), Some(user)) => {
                match (Credential::new(token.clone()), serde_json::from_str::<UserInfo>(user)) {
                    (Some(credential), Ok(user)) => Some(Session { user, credential }),
                    (_, Err(e)) => {
                        tracing::warn!(error = %e, "Persisted identity is unreadable");
                        None
                    }
                    (None, _) => None,
                }
            }
            _ => None,
        };

        match restored {
            Some(session) => {
                tracing::info!(user_id = %session.user.id, "Session restored from storage");
                self.commit(session);
                self.notify(AppEvent::Navigate(Screen::Dashboard));
                AuthStatus::Authenticated
            }
            None => {
                if token.is_some() || user.is_some() {
                    tracing::warn!("Clearing incomplete persisted session");
                    self.clear_store().await;
                }
                self.set_unauthenticated();
                self.notify(AppEvent::Navigate(Screen::Login));
                AuthStatus::Unauthenticated
            }
        }
    }

    /// Log in with email and password.
    ///
    /// On success the credential and identity are persisted together and the
    /// session becomes `Authenticated`. On any failure nothing changes.
    #[tracing::instrument(skip(self, api, password), fields(email = %email))]
    pub async fn login(&self, api: &dyn AuthApi, email: &str, password: &str) -> Result<UserInfo> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = api.login(&request).await;
        self.establish(response, LOGIN_FAILED).await
    }

    /// Register a new account. Success authenticates immediately.
    #[tracing::instrument(skip(self, api, password), fields(email = %email))]
    pub async fn register(
        &self,
        api: &dyn AuthApi,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserInfo> {
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        };
        let response = api.register(&request).await;
        self.establish(response, REGISTRATION_FAILED).await
    }

    /// Clear the session unconditionally.
    ///
    /// Store failures are logged and ignored; the in-memory state always ends `Unauthenticated`.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) {
        let _guard = self.mutation.lock().await;
        self.teardown_armed.store(false, Ordering::Release);
        self.clear_store().await;
        self.set_unauthenticated();
        tracing::info!("Logged out");
        self.notify(AppEvent::Navigate(Screen::Login));
    }

    /// Tear the session down after an authorization failure.
    ///
    /// `generation` is the session the failing request was sent under. Only
    /// the first call for the current session does anything; returns whether
    /// this call performed the teardown.
    #[tracing::instrument(skip(self))]
    pub async fn teardown(&self, generation: u64) -> bool {
        let _guard = self.mutation.lock().await;

        let torn = {
            let mut state = self.state.write();
            if state.generation != generation || state.status != AuthStatus::Authenticated {
                false
            } else if self
                .teardown_armed
                .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
            {
                false
            } else {
                state.session = None;
                state.status = AuthStatus::Unauthenticated;
                true
            }
        };

        if !torn {
            tracing::debug!("Teardown skipped: session already torn down or replaced");
            return false;
        }

        self.clear_store().await;
        self.status_tx.send_replace(AuthStatus::Unauthenticated);
        tracing::warn!("Session expired; credentials cleared");
        self.notify(AppEvent::SessionExpired);
        self.notify(AppEvent::Navigate(Screen::Login));
        true
    }

    async fn establish(&self, response: Result<AuthResponse>, fallback: &str) -> Result<UserInfo> {
        let response = response.map_err(|err| match err {
            ClientError::Http { detail, status } => {
                tracing::warn!(status, "Authentication rejected");
                ClientError::Auth(detail.unwrap_or_else(|| fallback.to_string()))
            }
            ClientError::Decode(msg) => {
                tracing::error!(error = %msg, "Authentication response malformed");
                ClientError::Auth(fallback.to_string())
            }
            other => other,
        })?;

        let user = response.user();
        let credential = match Credential::new(response.token) {
            Some(c) if !user.id.trim().is_empty() => c,
            _ => {
                tracing::error!("Authentication response missing token or user id");
                return Err(ClientError::Auth(fallback.to_string()));
            }
        };
        let user_json = serde_json::to_string(&user)?;

        let _guard = self.mutation.lock().await;
        self.store
            .set_many(&[
                (STORE_KEY_TOKEN, credential.as_str().to_string()),
                (STORE_KEY_USER, user_json),
            ])
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to persist session; state unchanged");
                e
            })?;

        tracing::info!(user_id = %user.id, "Authenticated");
        self.commit(Session {
            user: user.clone(),
            credential,
        });
        self.notify(AppEvent::Navigate(Screen::Dashboard));
        Ok(user)
    }

    fn commit(&self, session: Session) {
        {
            let mut state = self.state.write();
            state.session = Some(session);
            state.status = AuthStatus::Authenticated;
            state.generation += 1;
            self.teardown_armed.store(true, Ordering::Release);
        }
        self.status_tx.send_replace(AuthStatus::Authenticated);
    }

    fn set_unauthenticated(&self) {
        {
            let mut state = self.state.write();
            state.session = None;
            state.status = AuthStatus::Unauthenticated;
        }
        self.status_tx.send_replace(AuthStatus::Unauthenticated);
    }

    async fn read_key(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read persisted session");
                None
            }
        }
    }

    async fn clear_store(&self) {
        if let Err(e) = self.store.remove_many(&[STORE_KEY_TOKEN, STORE_KEY_USER]).await {
            tracing::warn!(error = %e, "Failed to clear persisted session");
        }
    }

    fn notify(&self, event: AppEvent) {
        if self.events.try_send(event).is_err() {
            tracing::debug!("No listener for app events");
        }
    }
}
