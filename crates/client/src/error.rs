//! Error type for the API client layer.

/// Errors from the content governance API layer.
///
/// Every accessor returns this single error type; accessors never swallow
/// errors and never retry. The `Display` form of [`ApiError::Http`] is the
/// extracted detail string alone, so callers can surface it to an operator
/// verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    ///
    /// `detail` is extracted from the response in order of preference: a
    /// JSON `detail` field, the raw JSON body, or the status line.
    #[error("{detail}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Human-readable failure description.
        detail: String,
    },

    /// The request never produced a response (network, DNS, TLS, etc.).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response body did not decode into the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}
