//! Tenant-aware HTTP client for the content governance API.
//!
//! Wraps a [`reqwest::Client`] with the resolved [`ClientConfig`] and
//! normalizes transport failures, non-2xx responses, and undecodable
//! bodies into [`ApiError`]. Responses are never cached client-side, so
//! every call reflects the backend's current governance state, and no
//! retries happen at this layer.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Header carrying the tenant scope on every request.
///
/// The header is the sole tenant-scoping mechanism; the server never infers
/// a tenant from a content id or path segment.
pub const TENANT_HEADER: &str = "X-Tenant-Slug";

/// HTTP client bound to one backend endpoint and one tenant.
pub struct ApiClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new client from resolved configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across multiple tenants).
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a GET request and decode the JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, tenant = %self.config.tenant_slug, "GET");

        let response = self
            .client
            .get(self.url(path))
            .header(TENANT_HEADER, &self.config.tenant_slug)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Issue a POST request with a JSON body and decode the JSON response.
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, tenant = %self.config.tenant_slug, "POST");

        let response = self
            .client
            .post(self.url(path))
            .header(TENANT_HEADER, &self.config.tenant_slug)
            .json(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    // ---- private helpers ----

    /// Check the status and decode a successful body into the expected type.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Ensure the response has a success status code.
    ///
    /// On failure, extract a human-readable detail string: a JSON `detail`
    /// field if the body carries one, otherwise the raw JSON body,
    /// otherwise the status line.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => match value.get("detail") {
                Some(serde_json::Value::String(detail)) => detail.clone(),
                Some(other) if !other.is_null() => other.to_string(),
                _ => body,
            },
            Err(_) => match status.canonical_reason() {
                Some(reason) => format!("{} {}", status.as_u16(), reason),
                None => status.as_u16().to_string(),
            },
        };

        Err(ApiError::Http {
            status: status.as_u16(),
            detail,
        })
    }
}
