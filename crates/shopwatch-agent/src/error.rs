//! Error types for shopwatch-agent
//!
//! Reporting-path failures never escape [`crate::Reporter::report`]; they are
//! reduced to local diagnostics. The error type here covers the fallible
//! surfaces that remain: configuration parsing and the transport seams.

use thiserror::Error;

/// Agent error type
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or unparseable agent configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Collector transport error
    #[error("transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    /// Host-page fetch error
    #[error("fetch error: {0}")]
    Fetch(#[from] crate::fetch::FetchError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
