//! # Gateway Tests
//!
//! Drive the real `ApiClient` against a stub server: bearer attachment,
//! 401 teardown, and error mapping.

mod common;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use finance_client::app::{AppEvent, Screen};
use finance_client::core::service::FinanceApi;
use finance_client::session::{AuthStatus, KeyValueStore, MemoryStore, STORE_KEY_TOKEN, STORE_KEY_USER};
use finance_client::ClientError;
use serde_json::{json, Value};

use common::*;

fn recording_router(seen: SeenHeaders) -> Router {
    Router::new()
        .route(
            "/api/auth/login",
            post(|| async { Json(auth_body("tok-login")) }),
        )
        .route(
            "/api/transactions",
            get(|State(seen): State<SeenHeaders>, headers: HeaderMap| async move {
                record_auth(&seen, &headers);
                Json(json!([]))
            }),
        )
        .with_state(seen)
}

#[tokio::test]
async fn test_bearer_attached_after_login() {
    // Arrange
    let seen = SeenHeaders::default();
    let base = spawn_api(recording_router(seen.clone())).await;
    let app = app_for(&base, Arc::new(MemoryStore::new()));

    // Act
    app.login("ada@example.com", "hunter2").await.unwrap();
    let transactions = app.api().list_transactions().await.unwrap();

    // Assert
    assert!(transactions.is_empty());
    assert_eq!(*seen.lock(), vec![Some("Bearer tok-login".to_string())]);
}

#[tokio::test]
async fn test_no_header_without_session() {
    let seen = SeenHeaders::default();
    let base = spawn_api(recording_router(seen.clone())).await;
    let app = app_for(&base, Arc::new(MemoryStore::new()));

    app.restore().await;
    app.api().list_transactions().await.unwrap();

    assert_eq!(*seen.lock(), vec![None]);
}

#[tokio::test]
async fn test_concurrent_401s_tear_down_once() {
    // Arrange
    let seen = SeenHeaders::default();
    let router = Router::new()
        .route(
            "/api/stats",
            get(|State(seen): State<SeenHeaders>, headers: HeaderMap| async move {
                record_auth(&seen, &headers);
                tokio::time::sleep(Duration::from_millis(50)).await;
                (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Invalid token"})))
            }),
        )
        .with_state(seen.clone());
    let base = spawn_api(router).await;
    let store = seeded_store("tok-stale").await;
    let app = app_for(&base, store.clone());
    assert_eq!(app.restore().await, AuthStatus::Authenticated);

    // Act
    let api = app.api();
    let results = futures::future::join_all((0..6).map(|_| api.get_stats())).await;

    // Assert
    for result in &results {
        match result {
            Err(ClientError::Http { status, detail }) => {
                assert_eq!(*status, 401);
                assert_eq!(detail.as_deref(), Some("Invalid token"));
            }
            other => panic!("expected 401, got {:?}", other),
        }
    }
    assert_eq!(
        drain(app.events()),
        vec![
            AppEvent::Navigate(Screen::Dashboard),
            AppEvent::SessionExpired,
            AppEvent::Navigate(Screen::Login),
        ]
    );
    assert_eq!(app.session().status(), AuthStatus::Unauthenticated);
    assert_eq!(store.get(STORE_KEY_TOKEN).await.unwrap(), None);
    assert_eq!(store.get(STORE_KEY_USER).await.unwrap(), None);

    // A request sent after teardown carries no credential.
    seen.lock().clear();
    let _ = app.api().get_stats().await;
    assert_eq!(*seen.lock(), vec![None]);
    assert!(drain(app.events()).is_empty());
}

#[tokio::test]
async fn test_401_without_credential_does_not_navigate() {
    let router = Router::new().route(
        "/api/goals",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Not authenticated"}))) }),
    );
    let base = spawn_api(router).await;
    let app = app_for(&base, Arc::new(MemoryStore::new()));
    app.restore().await;
    drain(app.events());

    let err = app.api().list_goals().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(drain(app.events()).is_empty());
}

#[tokio::test]
async fn test_error_detail_passed_through() {
    let router = Router::new()
        .route(
            "/api/budgets",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"detail": "Budget for this category already exists"})),
                )
            }),
        )
        .route(
            "/api/transactions/{id}",
            delete(|| async { (StatusCode::NOT_FOUND, "gone") }),
        );
    let base = spawn_api(router).await;
    let app = app_for(&base, Arc::new(MemoryStore::new()));

    let input = shared::BudgetInput {
        category: "Food".to_string(),
        limit_amount: 300.0,
        period: shared::BudgetPeriod::Monthly,
    };
    let err = app.api().create_budget(&input).await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Http {
            status: 400,
            detail: Some("Budget for this category already exists".to_string()),
        }
    );
    assert_eq!(
        err.user_message_or(finance_client::services::api::budgets::FAILURE_MESSAGE),
        "Budget for this category already exists"
    );

    let err = app.api().delete_transaction("t-1").await.unwrap_err();
    assert_eq!(err, ClientError::Http { status: 404, detail: None });
    assert_eq!(
        err.user_message_or(finance_client::services::api::transactions::FAILURE_MESSAGE),
        finance_client::services::api::transactions::FAILURE_MESSAGE
    );
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let router = Router::new().route("/api/stats", get(|| async { Json(json!({"balance": "lots"})) }));
    let base = spawn_api(router).await;
    let app = app_for(&base, Arc::new(MemoryStore::new()));

    let err = app.api().get_stats().await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let app = app_for(&format!("http://{}/api", addr), Arc::new(MemoryStore::new()));

    let err = app.api().list_budgets().await.unwrap_err();

    assert!(err.is_network(), "got {:?}", err);
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_contribute_sends_amount_query() {
    let router = Router::new().route(
        "/api/goals/{id}/contribute",
        put(
            |Path(id): Path<String>, Query(params): Query<HashMap<String, String>>| async move {
                let amount: f64 = params
                    .get("amount")
                    .and_then(|a| a.parse().ok())
                    .unwrap_or(-1.0);
                Json(goal_json(&id, 100.0 + amount))
            },
        ),
    );
    let base = spawn_api(router).await;
    let app = app_for(&base, Arc::new(MemoryStore::new()));

    let goal = app.api().contribute_to_goal("g-7", 25.5).await.unwrap();

    assert_eq!(goal.id, "g-7");
    assert_eq!(goal.current_amount, 125.5);
}

#[tokio::test]
async fn test_delete_and_advice() {
    let router = Router::new()
        .route(
            "/api/goals/{id}",
            delete(|| async { Json(json!({"message": "Goal deleted"})) }),
        )
        .route(
            "/api/advice",
            post(|Json(body): Json<Value>| async move {
                let context = body["context"].as_str().unwrap_or_default().to_string();
                Json(json!({"advice": format!("Consider: {}", context)}))
            }),
        );
    let base = spawn_api(router).await;
    let app = app_for(&base, Arc::new(MemoryStore::new()));

    app.api().delete_goal("g-1").await.unwrap();
    let advice = app.api().get_advice("saving for a bike").await.unwrap();

    assert_eq!(advice, "Consider: saving for a bike");
}
