//! Collector transport seam
//!
//! The reporter sends through a [`Transport`] rather than a runtime global.
//! [`HttpTransport`] holds its `reqwest::Client` from construction time, so
//! the reporter always posts through the unmodified request primitive even
//! after the network observer has instrumented the page's own fetch path.

use async_trait::async_trait;
use thiserror::Error;

use crate::report::ErrorReport;

/// Transport-level failure (connection, DNS, TLS). Timeouts are enforced by
/// the reporter around the call, not here.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network/connection error
    #[error("network error: {0}")]
    Network(String),
}

/// Outbound channel to the collector.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `report` as a JSON body to `url` with `Content-Type:
    /// application/json`. Returns the HTTP status code.
    async fn post_json(&self, url: &str, report: &ErrorReport) -> Result<u16, TransportError>;
}

/// Real HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Capture the request primitive. Called once at agent start.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, report: &ErrorReport) -> Result<u16, TransportError> {
        let response = self
            .client
            .post(url)
            .json(report)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(response.status().as_u16())
    }
}
