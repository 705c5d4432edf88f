//! # Authentication Endpoints
//!
//! Raw calls to `/auth/login` and `/auth/register`. Persisting the result is
//! the session manager's job; these only talk to the server.
//!
//! Both are sent without the current credential, so a rejected login never
//! tears down the session that is already active.

use shared::{AuthResponse, LoginRequest, RegisterRequest};

use super::client::ApiClient;
use crate::core::error::Result;

/// Login with email and password.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<AuthResponse> {
    tracing::info!("Attempting login");
    let url = client.url(&["auth", "login"])?;
    client.post_json_unauthenticated(url, request).await
}

/// Register a new user.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<AuthResponse> {
    tracing::info!("Attempting registration");
    let url = client.url(&["auth", "register"])?;
    client.post_json_unauthenticated(url, request).await
}
