//! Client configuration loaded from environment variables.

/// Default backend endpoint for a local development setup.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001";

/// Default tenant slug when none is configured.
pub const DEFAULT_TENANT_SLUG: &str = "default";

/// Resolved client configuration.
///
/// Resolved once at process start and never mutated afterwards; the
/// [`ApiClient`](crate::http::ApiClient) takes it by value and every
/// request reads from the same copy.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base endpoint URL, without a trailing slash (e.g. `http://127.0.0.1:8001`).
    pub base_url: String,
    /// Tenant slug attached to every request as the `X-Tenant-Slug` header.
    pub tenant_slug: String,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `STEWARD_API_BASE_URL` | `http://127.0.0.1:8001` |
    /// | `STEWARD_TENANT_SLUG`  | `default`               |
    ///
    /// Whitespace-only values count as unset.
    pub fn from_env() -> Self {
        Self {
            base_url: env_or("STEWARD_API_BASE_URL", DEFAULT_BASE_URL),
            tenant_slug: env_or("STEWARD_TENANT_SLUG", DEFAULT_TENANT_SLUG),
        }
    }

    /// Build a configuration explicitly, e.g. pointing at a test backend.
    pub fn new(base_url: impl Into<String>, tenant_slug: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            tenant_slug: tenant_slug.into(),
        }
    }
}

/// Read an environment variable, trimming whitespace and falling back to
/// `default` when unset or empty.
fn env_or(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
