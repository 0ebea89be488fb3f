//! Request dispatcher for the platform API.
//!
//! Every JSON endpoint goes through one path: build the request, attach
//! the bearer token when the call needs auth and a session exists,
//! decode whatever came back, and normalize non-success statuses into
//! [`ClientError::Api`] with a human-readable message.

use crate::config::ClientConfig;
use agrilink_core::cancel::CancelToken;
use agrilink_core::session::SessionStore;
use agrilink_core::{ClientError, Result};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;

/// Describes one API call before it is dispatched.
///
/// Calls require auth by default; the handful of public endpoints opt
/// out with [`ApiRequest::public`].
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Value>,
    requires_auth: bool,
    cancel: Option<CancelToken>,
}

impl ApiRequest {
    /// Creates a GET request for the given API path.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a POST request for the given API path.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            requires_auth: true,
            cancel: None,
        }
    }

    /// Attaches a JSON body serialized from `payload`.
    pub fn json<T: Serialize>(self, payload: &T) -> Result<Self> {
        Ok(self.body(serde_json::to_value(payload)?))
    }

    /// Attaches an already-built JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Marks the call as public. No bearer header is attached even when
    /// a session exists.
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }

    /// Attaches a cancellation handle. It is checked right before the
    /// request goes out and again before the result is handed back.
    pub fn cancel_with(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// API path this request targets.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

/// HTTP client for the platform API.
///
/// Holds no mutable state of its own. The session store is consulted on
/// every dispatch, so a login or logout between calls takes effect
/// immediately.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    pub(crate) config: ClientConfig,
    pub(crate) store: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Creates a client over the given config and session store.
    pub fn new(config: ClientConfig, store: Arc<dyn SessionStore>) -> Self {
        Self {
            client: Client::new(),
            config,
            store,
        }
    }

    /// Connection settings this client dispatches with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Dispatches a request and returns the decoded JSON body.
    ///
    /// # Returns
    ///
    /// - `Ok(Value)`: body of a 2xx response, `Null` when it was empty
    /// - `Err(ClientError::Api)`: the platform answered with an error status
    /// - `Err(ClientError::Network)`: the request never got an answer
    /// - `Err(ClientError::Cancelled)`: the attached handle fired first
    pub async fn request(&self, request: ApiRequest) -> Result<Value> {
        let request_id = Uuid::new_v4();

        if request.cancelled() {
            return Err(ClientError::Cancelled);
        }

        let response = self.build_request(&request).send().await.map_err(|e| {
            ClientError::network(format!("Request to {} failed: {}", request.path, e))
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            ClientError::network(format!("Failed to read response from {}: {}", request.path, e))
        })?;

        tracing::debug!(
            "[Api] {} {} -> {} (request {})",
            request.method,
            request.path,
            status.as_u16(),
            request_id
        );

        // A cancelled caller has torn down; never hand it a late result.
        if request.cancelled() {
            return Err(ClientError::Cancelled);
        }

        let body = decode_body(&text);
        if !status.is_success() {
            return Err(map_api_error(status, body));
        }

        Ok(body)
    }

    /// Dispatches a request and decodes the body into `T`.
    pub async fn request_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let path = request.path.clone();
        let body = self.request(request).await?;

        serde_json::from_value(body)
            .map_err(|e| ClientError::decode(format!("Unexpected response from {}: {}", path, e)))
    }

    /// Liveness check against the platform API. Public endpoint.
    pub async fn health(&self) -> Result<Value> {
        self.request(ApiRequest::get("/health").public()).await
    }

    fn build_request(&self, request: &ApiRequest) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.api_base, request.path);
        let mut builder = self.client.request(request.method.clone(), &url);

        if request.requires_auth
            && let Some(token) = self.store.current_token()
        {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        // Also sets the JSON content type. Bodyless requests carry
        // neither a body nor the header.
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder
    }
}

// ============================================================
// Response decoding helpers
// ============================================================

/// Decodes a raw response body.
///
/// Empty text means no content. Valid JSON passes through as-is. Any
/// other text is wrapped under `detail` so the raw payload stays
/// reachable from error handling.
fn decode_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }

    serde_json::from_str(text).unwrap_or_else(|_| json!({ "detail": text }))
}

/// Normalizes a non-success response into an Api error.
///
/// A non-empty string `detail` becomes the message verbatim. A
/// structured `detail` (validation errors arrive as arrays) is
/// serialized compactly. Everything else falls back to a generic
/// message carrying the status code.
fn map_api_error(status: StatusCode, body: Value) -> ClientError {
    let message = match body.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::Null) | Some(Value::String(_)) | None => {
            format!("Request failed ({})", status.as_u16())
        }
        Some(other) => other.to_string(),
    };

    ClientError::api(status.as_u16(), message, body)
}
