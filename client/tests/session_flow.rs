//! # Session Flow Tests
//!
//! Login, registration and restoration end to end through the stub server
//! and a file-backed store.

mod common;

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use finance_client::app::{AppEvent, Screen};
use finance_client::session::{AuthStatus, FileStore, MemoryStore};
use finance_client::ClientError;
use serde_json::{json, Value};

use common::*;

fn auth_router() -> Router {
    Router::new()
        .route(
            "/api/auth/login",
            post(|Json(body): Json<Value>| async move {
                if body["password"] == "correct-horse" {
                    (StatusCode::OK, Json(auth_body("tok-login")))
                } else {
                    (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Invalid credentials"})))
                }
            }),
        )
        .route(
            "/api/auth/register",
            post(|Json(body): Json<Value>| async move {
                if body["email"] == "taken@example.com" {
                    (StatusCode::BAD_REQUEST, Json(json!({"detail": "Email already registered"})))
                } else {
                    let mut user = auth_body("tok-register");
                    user["email"] = body["email"].clone();
                    user["name"] = body["name"].clone();
                    (StatusCode::OK, Json(user))
                }
            }),
        )
        .route(
            "/api/stats",
            get(|| async {
                // Raw body so the category order on the wire is exactly this one.
                (
                    [(CONTENT_TYPE, "application/json")],
                    r#"{"total_income":3000.0,"total_expenses":1200.0,"balance":1800.0,
                        "category_expenses":{"Food":500.0,"Transport":300.0,"Rent":400.0},
                        "recent_income":3000.0,"recent_expenses":1200.0,"transaction_count":9}"#,
                )
            }),
        )
}

#[tokio::test]
async fn test_register_then_restore_from_file() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let base = spawn_api(auth_router()).await;

    // Act
    let first = app_for(&base, Arc::new(FileStore::new(&path)));
    first.restore().await;
    let user = first
        .register("new@example.com", "pw-123456", "Grace")
        .await
        .unwrap();

    let second = app_for(&base, Arc::new(FileStore::new(&path)));
    let status = second.restore().await;

    // Assert
    assert_eq!(user.name, "Grace");
    assert_eq!(status, AuthStatus::Authenticated);
    assert_eq!(second.session().current_user().unwrap().email, "new@example.com");
    assert_eq!(
        second.session().bearer().unwrap().credential.as_str(),
        "tok-register"
    );
}

#[tokio::test]
async fn test_login_rejected_uses_server_detail() {
    let base = spawn_api(auth_router()).await;
    let app = app_for(&base, Arc::new(MemoryStore::new()));
    app.restore().await;
    drain(app.events());

    let err = app.login("ada@example.com", "wrong").await.unwrap_err();

    assert_eq!(err, ClientError::Auth("Invalid credentials".to_string()));
    assert_eq!(app.session().status(), AuthStatus::Unauthenticated);
    assert!(app.session().bearer().is_none());
    assert!(drain(app.events()).is_empty());
}

#[tokio::test]
async fn test_register_conflict_is_auth_error() {
    let base = spawn_api(auth_router()).await;
    let app = app_for(&base, Arc::new(MemoryStore::new()));

    let err = app
        .register("taken@example.com", "pw-123456", "Someone")
        .await
        .unwrap_err();

    assert_eq!(err, ClientError::Auth("Email already registered".to_string()));
    assert!(!app.session().is_authenticated());
}

#[tokio::test]
async fn test_login_then_dashboard_then_logout() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("session.json")));
    let base = spawn_api(auth_router()).await;
    let app = app_for(&base, store.clone());
    app.restore().await;

    // Act
    app.login("ada@example.com", "correct-horse").await.unwrap();
    let dashboard = app.dashboard().await.unwrap();
    app.logout().await;

    // Assert
    let categories: Vec<&str> = dashboard.slices.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(categories, ["Food", "Transport", "Rent"]);
    assert_eq!(dashboard.slices[2].color(), "#FFCE56");
    assert_eq!(dashboard.stats.transaction_count, 9);

    assert_eq!(
        drain(app.events()),
        vec![
            AppEvent::Navigate(Screen::Login),
            AppEvent::Navigate(Screen::Dashboard),
            AppEvent::Navigate(Screen::Login),
        ]
    );
    let reopened = app_for(&base, store);
    assert_eq!(reopened.restore().await, AuthStatus::Unauthenticated);
}

#[tokio::test]
async fn test_rejected_login_keeps_active_session() {
    // Arrange
    let seen = SeenHeaders::default();
    let router = Router::new()
        .route(
            "/api/auth/login",
            post(|State(seen): State<SeenHeaders>, headers: HeaderMap| async move {
                record_auth(&seen, &headers);
                (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Invalid credentials"})))
            }),
        )
        .with_state(seen.clone());
    let base = spawn_api(router).await;
    let app = app_for(&base, seeded_store("tok-old").await);
    assert_eq!(app.restore().await, AuthStatus::Authenticated);
    drain(app.events());

    // Act
    let err = app.login("ada@example.com", "typo").await.unwrap_err();

    // Assert
    assert_eq!(err, ClientError::Auth("Invalid credentials".to_string()));
    assert_eq!(*seen.lock(), vec![None]);
    assert_eq!(app.session().status(), AuthStatus::Authenticated);
    assert_eq!(app.session().bearer().unwrap().credential.as_str(), "tok-old");
    assert!(drain(app.events()).is_empty());
}

#[tokio::test]
async fn test_login_recovers_from_corrupt_session_file() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{trunc").unwrap();
    let base = spawn_api(auth_router()).await;
    let app = app_for(&base, Arc::new(FileStore::new(&path)));

    // Act
    let restored = app.restore().await;
    app.logout().await;
    let login = app.login("ada@example.com", "correct-horse").await;

    // Assert
    assert_eq!(restored, AuthStatus::Unauthenticated);
    assert_eq!(login.unwrap().email, "ada@example.com");

    let reopened = app_for(&base, Arc::new(FileStore::new(&path)));
    assert_eq!(reopened.restore().await, AuthStatus::Authenticated);
}
