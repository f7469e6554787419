use thiserror::Error;

/// Errors returned by [`crate::BrandClient`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// No complete response arrived within the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Transport failure or a non-2xx status.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The body was not JSON, or not a JSON object of brands.
    #[error("malformed brands response: {reason}")]
    Malformed { reason: String },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
