//! Host-page request primitive seam
//!
//! The page's fetch-equivalent is modeled as a [`Fetch`] trait so the network
//! observer can decorate it (see [`crate::observers::InstrumentedFetch`])
//! instead of mutating a runtime global. The decorator observes outcomes and
//! passes them through untouched; the host page sees exactly what the inner
//! primitive returned.

use async_trait::async_trait;
use thiserror::Error;

/// Transport failure of a page request (the rejection path of a fetch call).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct FetchError(pub String);

/// An outbound page request.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Request method
    pub method: String,
    /// Target URL
    pub url: String,
    /// Optional request body
    pub body: Option<String>,
}

impl FetchRequest {
    /// Shorthand for a GET request.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.into(),
            body: None,
        }
    }

    /// Shorthand for a POST request.
    #[must_use]
    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: "POST".to_string(),
            url: url.into(),
            body: Some(body.into()),
        }
    }
}

/// A settled page response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// Final URL of the response
    pub url: String,
    /// HTTP status code
    pub status: u16,
}

impl FetchResponse {
    /// Success semantics of the page primitive (2xx).
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The page's fetch-equivalent request primitive.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Perform the request, resolving to a response or rejecting with a
    /// transport error.
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, FetchError>;
}
