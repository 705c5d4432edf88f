//! # Stub API Server
//!
//! Shared helpers for integration tests: an axum server on an ephemeral
//! port standing in for the finance API, and an `App` pointed at it.

#![allow(dead_code)]

use std::sync::Arc;

use async_channel::Receiver;
use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum::Router;
use finance_client::app::{App, AppEvent};
use finance_client::config::ClientConfig;
use finance_client::session::{KeyValueStore, MemoryStore, STORE_KEY_TOKEN, STORE_KEY_USER};
use parking_lot::Mutex;
use serde_json::{json, Value};

/// Authorization headers seen by the stub, one entry per request.
pub type SeenHeaders = Arc<Mutex<Vec<Option<String>>>>;

/// Serve `router` on 127.0.0.1 and return the API base URL.
pub async fn spawn_api(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("stub server address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server failed");
    });
    format!("http://{}/api", addr)
}

pub fn app_for(base_url: &str, store: Arc<dyn KeyValueStore>) -> App {
    let config = ClientConfig {
        api_base_url: base_url.to_string(),
        ..ClientConfig::default()
    };
    App::with_store(config, store).expect("app construction")
}

pub fn record_auth(seen: &SeenHeaders, headers: &HeaderMap) {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    seen.lock().push(value);
}

pub fn auth_body(token: &str) -> Value {
    json!({
        "id": "u-1",
        "email": "ada@example.com",
        "name": "Ada",
        "token": token,
    })
}

/// A store holding a previously persisted session.
pub async fn seeded_store(token: &str) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .set_many(&[
            (STORE_KEY_TOKEN, token.to_string()),
            (
                STORE_KEY_USER,
                r#"{"id":"u-1","email":"ada@example.com","name":"Ada"}"#.to_string(),
            ),
        ])
        .await
        .expect("seed store");
    store
}

pub fn drain(events: &Receiver<AppEvent>) -> Vec<AppEvent> {
    let mut out = Vec::new();
    while let Ok(event) = events.try_recv() {
        out.push(event);
    }
    out
}

pub fn goal_json(id: &str, current: f64) -> Value {
    json!({
        "id": id,
        "name": "Holiday",
        "target_amount": 1000.0,
        "current_amount": current,
        "deadline": "2026-12-31",
    })
}
