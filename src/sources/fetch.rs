//! Remote data gateway: HTTP GET + JSON decode with typed failures.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::error::ApiError;
use crate::theme::Settings;

/// Source of JSON documents addressed by absolute URL.
///
/// The production implementation is [`HttpFetcher`]; tests substitute an
/// in-memory table so cache behavior can be observed by counting calls.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// What: Fetch and decode one JSON document.
    ///
    /// Inputs:
    /// - `url`: Absolute URL.
    ///
    /// Output:
    /// - Decoded JSON, `ApiError::NotFoundUrl` on 404, `Transport` on other
    ///   failures, `Decode` on malformed bodies.
    async fn get_json(&self, url: &str) -> Result<Value, ApiError>;
}

/// `reqwest`-backed fetcher with connection pooling.
pub struct HttpFetcher {
    /// Shared client; cloned handles reuse the same pool.
    client: reqwest::Client,
}

impl HttpFetcher {
    /// What: Build the HTTP client from settings.
    ///
    /// Inputs:
    /// - `settings`: Supplies connect and total request timeouts.
    ///
    /// Output:
    /// - Ready fetcher, or `ApiError::Transport` when the TLS backend cannot initialize.
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(format!("pokesearch/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        tracing::debug!(url, "GET");
        let resp = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!(url, error = %e, "request failed");
            ApiError::Transport(format!("Network error: {e}"))
        })?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFoundUrl(url.to_string()));
        }
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "non-success status");
            return Err(ApiError::Transport(format!("status {}", status.as_u16())));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {e}")))?;
        Ok(serde_json::from_str(&body)?)
    }
}
