//! Report pipeline
//!
//! One accepted call, one POST: trim, rate-limit, placeholder guard, build,
//! transmit under a 5-second timeout. Every outcome is a local diagnostic;
//! nothing is retried, queued, or surfaced to the host page, and the pipeline
//! never panics or propagates an error (an uncaught failure here would feed
//! straight back into the crash observer).

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::page::PageInfo;
use crate::rate_limit::RateLimiter;
use crate::report::{ErrorReport, ReportKind, TEST_ALERT_MESSAGE};
use crate::transport::Transport;

/// Per-report delivery timeout
pub const REPORT_TIMEOUT: Duration = Duration::from_secs(5);

/// Substrings identifying an unconfigured, placeholder collector URL.
///
/// Known rough edge: a legitimately configured collector whose URL contains
/// one of these substrings is silently blocked too.
const PLACEHOLDER_MARKERS: [&str; 2] = ["example.com", "your-server.com"];

/// Builds and transmits reports for detected events.
pub struct Reporter {
    collector_url: String,
    page: PageInfo,
    limiter: RateLimiter,
    transport: Arc<dyn Transport>,
}

impl Reporter {
    /// Create a reporter posting to `collector_url` through `transport`.
    ///
    /// `transport` must be the unmodified request primitive captured at agent
    /// start, never the instrumented page fetch path.
    #[must_use]
    pub fn new(collector_url: String, page: PageInfo, transport: Arc<dyn Transport>) -> Self {
        Self {
            collector_url,
            page,
            limiter: RateLimiter::default(),
            transport,
        }
    }

    /// Collector URL this reporter posts to.
    #[must_use]
    pub fn collector_url(&self) -> &str {
        &self.collector_url
    }

    /// Report one detected event. Never fails; all outcomes are logged.
    ///
    /// Empty or whitespace-only messages are dropped without consuming a
    /// rate-limit slot.
    pub async fn report(&self, kind: ReportKind, message: &str) {
        let message = message.trim();
        if message.is_empty() {
            return;
        }

        if !self.limiter.try_consume() {
            warn!(kind = %kind, "rate limit reached, dropping report");
            return;
        }

        if self.is_placeholder_url() {
            return;
        }

        let report = ErrorReport::new(&self.page, kind, message);
        self.transmit(&report).await;
    }

    /// Administrative connectivity check: same wire format, fixed message,
    /// bypasses the rate limiter and dedup tracking.
    pub async fn send_test_alert(&self) {
        if self.is_placeholder_url() {
            return;
        }

        let report = ErrorReport::new(&self.page, ReportKind::TestAlert, TEST_ALERT_MESSAGE);
        self.transmit(&report).await;
    }

    /// Configuration-sanity guard, not a network failure.
    fn is_placeholder_url(&self) -> bool {
        let placeholder = PLACEHOLDER_MARKERS
            .iter()
            .any(|marker| self.collector_url.contains(marker));
        if placeholder {
            warn!("collector URL is a placeholder, report not sent");
        }
        placeholder
    }

    /// Exactly one request, its own timeout, no retries.
    async fn transmit(&self, report: &ErrorReport) {
        let send = self.transport.post_json(&self.collector_url, report);

        match tokio::time::timeout(REPORT_TIMEOUT, send).await {
            Err(_) => {
                warn!(
                    timeout_secs = REPORT_TIMEOUT.as_secs(),
                    "report timed out, request cancelled"
                );
            }
            Ok(Err(e)) => {
                warn!(error = %e, "failed to deliver report");
            }
            Ok(Ok(status)) if (200..400).contains(&status) => {
                debug!(status, kind = %report.kind, "report delivered");
            }
            Ok(Ok(status)) => {
                warn!(status, "collector rejected report");
            }
        }
    }
}
