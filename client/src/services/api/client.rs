//! # API Client
//!
//! The single configured HTTP transport for the finance API.
//!
//! Every request passes through two hooks:
//!
//! - **outgoing**: the current session credential, if any, is attached as
//!   `Authorization: Bearer <token>`
//! - **incoming**: a 401 on a request that carried a credential tears the
//!   session down, then the original error is returned to the caller
//!
//! Requests time out after [`REQUEST_TIMEOUT`] and are never retried here.
//!
//! The authentication endpoints go through [`ApiClient::send_unauthenticated`]
//! instead: no credential is attached and a 401 never touches the session.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{ErrorResponse, MessageResponse};
use tracing::Instrument;

use crate::core::error::{ClientError, Result};
use crate::session::SessionManager;

/// Uniform timeout for every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client for communicating with the finance API.
///
/// Cheap to share behind an `Arc`; `reqwest::Client` pools connections internally.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: Url,
    session: Arc<SessionManager>,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `http://127.0.0.1:8001/api`).
    pub fn new(base_url: &str, session: Arc<SessionManager>) -> Result<Self> {
        Self::with_timeout(base_url, session, REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(base_url: &str, session: Arc<SessionManager>, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("invalid API base URL {:?}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!("API base URL {} cannot be a base", base_url)));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    /// Build an endpoint URL from path segments. Segments are percent-encoded.
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("API base URL {} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send one request through both hooks.
    ///
    /// Returns the response for any 2xx status. Otherwise fails with
    /// `Network` (no response) or `Http { status, detail }`.
    pub async fn send<B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(method, url, body, true).await
    }

    /// Send without the session: no bearer, and a 401 is just an error.
    pub async fn send_unauthenticated<B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(method, url, body, false).await
    }

    async fn dispatch<B>(&self, method: Method, url: Url, body: Option<&B>, authenticate: bool) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let request_id = uuid::Uuid::new_v4().to_string();
        let span = tracing::info_span!(
            "api_request",
            request_id = %request_id,
            method = %method,
            path = %url.path(),
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        async move {
            let bearer = if authenticate { self.session.bearer() } else { None };

            let mut request = self
                .client
                .request(method, url)
                .header(REQUEST_ID_HEADER, request_id.as_str());
            if let Some(snapshot) = &bearer {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", snapshot.credential.as_str()))
                    .map_err(|_| ClientError::Auth("Stored credential is not a valid header value".to_string()))?;
                value.set_sensitive(true);
                request = request.header(AUTHORIZATION, value);
            }
            if let Some(body) = body {
                request = request.json(body);
            }

            let start = Instant::now();
            let response = request.send().await.map_err(|e| {
                let err = ClientError::from(e);
                tracing::error!(error = %err, "Request failed without a response");
                err
            })?;

            let status = response.status();
            let span = tracing::Span::current();
            span.record("status", status.as_u16());
            span.record("duration_ms", start.elapsed().as_millis() as u64);

            if status.is_success() {
                tracing::debug!("Request succeeded");
                return Ok(response);
            }

            let detail = error_detail(response).await;
            tracing::warn!(detail = detail.as_deref().unwrap_or(""), "Request rejected");

            if status == StatusCode::UNAUTHORIZED {
                if let Some(snapshot) = bearer {
                    self.session.teardown(snapshot.generation).await;
                }
            }

            Err(ClientError::Http {
                status: status.as_u16(),
                detail,
            })
        }
        .instrument(span)
        .await
    }

    /// Send and decode a JSON response body.
    pub async fn send_json<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        decode_json(self.send(method, url, body).await?).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        self.send_json::<(), T>(Method::GET, url, None).await
    }

    pub(crate) async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::POST, url, Some(body)).await
    }

    /// POST to an endpoint that must not see the session (login, register).
    pub(crate) async fn post_json_unauthenticated<B, T>(&self, url: Url, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        decode_json(self.send_unauthenticated(Method::POST, url, Some(body)).await?).await
    }

    pub(crate) async fn put_json<B, T>(&self, url: Url, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::PUT, url, body).await
    }

    pub(crate) async fn delete(&self, url: Url) -> Result<()> {
        let ack: MessageResponse = self.send_json::<(), _>(Method::DELETE, url, None).await?;
        tracing::debug!(message = %ack.message, "Deleted");
        Ok(())
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::error!(error = %e, "Response body did not match the expected shape");
        ClientError::Decode(e.to_string())
    })
}

/// Pull `detail` out of an error body, if it has one.
async fn error_detail(response: Response) -> Option<String> {
    let bytes = response.bytes().await.ok()?;
    serde_json::from_slice::<ErrorResponse>(&bytes)
        .ok()
        .and_then(|body| body.message())
}
