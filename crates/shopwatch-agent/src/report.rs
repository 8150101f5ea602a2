//! Report types and wire format
//!
//! One [`ErrorReport`] is built per detected event and POSTed to the
//! collector as JSON. The wire field names (`site`, `url`, `type`,
//! `error_message`, `time`, `user_agent`) are fixed by the collector API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::page::PageInfo;

/// Maximum characters kept from a report message
pub const MAX_MESSAGE_LEN: usize = 1000;

/// Fixed message sent by the administrative test-alert path
pub const TEST_ALERT_MESSAGE: &str = "Test alert triggered from the agent settings page";

/// Kind of failure a report describes.
///
/// Closed set: the collector switches on the `type` string, so new kinds are
/// a wire-format change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    /// Uncaught exception on the page's own scripts
    JsCrash,
    /// Unhandled asynchronous rejection
    UnhandledRejection,
    /// Storefront error banner appeared in the DOM
    UiNotice,
    /// Legacy AJAX checkout/cart request failed
    AjaxFailure,
    /// Fetch-style storefront API request failed
    FetchFailure,
    /// Administrative connectivity check
    #[serde(rename = "Test Alert")]
    TestAlert,
}

impl ReportKind {
    /// Wire string for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JsCrash => "JsCrash",
            Self::UnhandledRejection => "UnhandledRejection",
            Self::UiNotice => "UiNotice",
            Self::AjaxFailure => "AjaxFailure",
            Self::FetchFailure => "FetchFailure",
            Self::TestAlert => "Test Alert",
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single error report, immutable once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    /// Hostname of the monitored shop
    pub site: String,
    /// Full URL of the page the event occurred on
    pub url: String,
    /// Failure kind
    #[serde(rename = "type")]
    pub kind: ReportKind,
    /// Event message, truncated to [`MAX_MESSAGE_LEN`] characters
    #[serde(rename = "error_message")]
    pub message: String,
    /// Detection time
    pub time: DateTime<Utc>,
    /// Browser user-agent string
    pub user_agent: String,
}

impl ErrorReport {
    /// Build a report for an event detected on `page`.
    #[must_use]
    pub fn new(page: &PageInfo, kind: ReportKind, message: &str) -> Self {
        Self {
            site: page.hostname.clone(),
            url: page.href.clone(),
            kind,
            message: truncate(message, MAX_MESSAGE_LEN),
            time: Utc::now(),
            user_agent: page.user_agent.clone(),
        }
    }
}

/// Truncate on a character boundary.
fn truncate(message: &str, max_chars: usize) -> String {
    if message.chars().count() <= max_chars {
        message.to_string()
    } else {
        message.chars().take(max_chars).collect()
    }
}
