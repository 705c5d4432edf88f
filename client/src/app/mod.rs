//! # Application Facade
//!
//! [`App`] wires configuration, the persistent store, the session manager
//! and the API client together, and exposes what a UI layer drives:
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │ UI                                                 │
//! │   app.restore() / login() / logout()               │
//! │   app.dashboard() / budget_overview() / ...        │
//! │   app.events().recv()  ◀── Navigate / Expired      │
//! └───────────────┬────────────────────────────────────┘
//!                 │
//! ┌───────────────▼──────────┐      ┌─────────────────┐
//! │ SessionManager           │◀─────│ ApiClient       │
//! │  KeyValueStore (file)    │ 401  │  bearer hook    │
//! └──────────────────────────┘      └─────────────────┘
//! ```

pub mod events;
pub mod state;
pub mod views;

pub use events::AppEvent;
pub use state::Screen;
pub use views::{BudgetView, Dashboard, GoalView};

use std::sync::Arc;

use async_channel::Receiver;
use shared::UserInfo;

use crate::config::ClientConfig;
use crate::core::error::Result;
use crate::services::api::ApiClient;
use crate::session::{AuthStatus, FileStore, KeyValueStore, SessionManager};

pub struct App {
    config: ClientConfig,
    session: Arc<SessionManager>,
    api: Arc<ApiClient>,
    events: Receiver<AppEvent>,
}

impl App {
    /// Build an app persisting its session to `config.store_path`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let store = Arc::new(FileStore::new(config.store_path.clone()));
        Self::with_store(config, store)
    }

    pub fn with_store(config: ClientConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let (event_tx, event_rx) = async_channel::unbounded();
        let session = Arc::new(SessionManager::new(store, event_tx));
        let api = Arc::new(ApiClient::new(&config.api_base_url, Arc::clone(&session))?);

        tracing::info!(api = %config.api_base_url, "App initialized");

        Ok(Self {
            config,
            session,
            api,
            events: event_rx,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    /// Navigation and session-expiry signals.
    pub fn events(&self) -> &Receiver<AppEvent> {
        &self.events
    }

    pub async fn restore(&self) -> AuthStatus {
        self.session.restore().await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserInfo> {
        self.session.login(self.api.as_ref(), email, password).await
    }

    pub async fn register(&self, email: &str, password: &str, name: &str) -> Result<UserInfo> {
        self.session.register(self.api.as_ref(), email, password, name).await
    }

    pub async fn logout(&self) {
        self.session.logout().await
    }

    pub async fn dashboard(&self) -> Result<Dashboard> {
        views::load_dashboard(self.api.as_ref()).await
    }

    pub async fn budget_overview(&self) -> Result<Vec<BudgetView>> {
        views::load_budgets(self.api.as_ref()).await
    }

    pub async fn goal_overview(&self) -> Result<Vec<GoalView>> {
        views::load_goals(self.api.as_ref()).await
    }
}
