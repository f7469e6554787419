//! HTTP client for the brand data source.
//!
//! The source is a Firebase realtime-database REST export: one GET of
//! `brands.json` under the base URL returns every brand as a JSON object
//! keyed by brand identifier. Exactly one request is made per fetch; there
//! is no retry, cache, or pagination.

use std::time::Duration;

use brandpeek_core::config::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_USER_AGENT};
use brandpeek_core::{AppConfig, BrandCatalog};
use reqwest::{header, Client, Url};

use crate::error::FetchError;

/// Resource path of the brand collection, relative to the base URL.
pub const BRANDS_PATH: &str = "brands.json";

/// Client for the brand data source.
///
/// Use [`BrandClient::new`] for the production source,
/// [`BrandClient::from_config`] for loaded configuration, or
/// [`BrandClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct BrandClient {
    client: Client,
    brands_url: Url,
    timeout_ms: u64,
}

impl BrandClient {
    /// Creates a client for the production source with the default 10 s timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(
            DEFAULT_BASE_URL,
            Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            DEFAULT_USER_AGENT,
        )
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] if the configured base URL does
    /// not parse, or [`FetchError::Network`] if the `reqwest::Client` cannot
    /// be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::with_base_url(
            &config.base_url,
            Duration::from_millis(config.request_timeout_ms),
            &config.user_agent,
        )
    }

    /// Creates a client with a custom base URL and timeout.
    ///
    /// `timeout` bounds the whole request, from connecting until the body
    /// has been read.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] if `base_url` is not a valid
    /// URL, or [`FetchError::Network`] if the `reqwest::Client` cannot be
    /// constructed.
    pub fn with_base_url(
        base_url: &str,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Network)?;

        let brands_url = brands_url(base_url)?;

        Ok(Self {
            client,
            brands_url,
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        })
    }

    /// The full URL fetched by [`BrandClient::fetch_brands`].
    #[must_use]
    pub fn brands_url(&self) -> &Url {
        &self.brands_url
    }

    /// Fetches the full brand collection.
    ///
    /// A `null` body (an empty Firebase node) yields an empty catalog.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Timeout`] if no complete response arrives in time.
    /// - [`FetchError::Network`] on transport failure or a non-2xx status.
    /// - [`FetchError::Malformed`] if the body is not JSON, or is JSON but
    ///   not an object.
    pub async fn fetch_brands(&self) -> Result<BrandCatalog, FetchError> {
        tracing::debug!(url = %self.brands_url, "fetching brands");

        let response = self
            .client
            .get(self.brands_url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let response = response.error_for_status().map_err(|e| self.classify(e))?;
        let body = response.text().await.map_err(|e| self.classify(e))?;

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| FetchError::Malformed {
                reason: e.to_string(),
            })?;

        let catalog = BrandCatalog::from_json(&value).map_err(|e| FetchError::Malformed {
            reason: e.to_string(),
        })?;

        tracing::debug!(count = catalog.len(), "fetched brands");
        Ok(catalog)
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            tracing::warn!(timeout_ms = self.timeout_ms, "brand fetch timed out");
            FetchError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            tracing::warn!(error = %err, "brand fetch failed");
            FetchError::Network(err)
        }
    }
}

/// Resolves [`BRANDS_PATH`] against `base_url`.
///
/// The base is normalised to end in exactly one slash so that a base path
/// such as `/v1` is kept rather than replaced.
fn brands_url(base_url: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidBaseUrl {
        url: base_url.to_owned(),
        reason,
    };

    let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
    let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
    if base.cannot_be_a_base() {
        return Err(invalid("URL cannot be a base".to_owned()));
    }
    base.join(BRANDS_PATH).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
