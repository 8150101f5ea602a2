use std::sync::Arc;

use crate::page::PageEvent;
use crate::report::ReportKind;
use crate::reporter::Reporter;

/// Observes uncaught exceptions and unhandled asynchronous rejections.
///
/// Installed before the DOM-ready barrier so early page-load crashes are not
/// missed. Synchronous errors are filtered to scripts served from the page's
/// own hostname, a heuristic that keeps third-party script noise out of the
/// collector; rejections carry no reliable source location, so no origin
/// filter applies to them.
pub struct CrashObserver {
    reporter: Arc<Reporter>,
    hostname: String,
}

impl CrashObserver {
    /// Create an observer reporting through `reporter` for a page on
    /// `hostname`.
    #[must_use]
    pub fn new(reporter: Arc<Reporter>, hostname: impl Into<String>) -> Self {
        Self {
            reporter,
            hostname: hostname.into(),
        }
    }

    /// Handle one page event; non-crash events are ignored.
    pub async fn handle(&self, event: &PageEvent) {
        match event {
            PageEvent::ScriptError {
                message,
                source,
                line,
                col,
            } => {
                // Other-origin scripts are ignored entirely, not rate-limited.
                if !source.contains(&self.hostname) {
                    return;
                }
                self.reporter
                    .report(
                        ReportKind::JsCrash,
                        &format!("{message} at {source}:{line}:{col}"),
                    )
                    .await;
            }
            PageEvent::UnhandledRejection { reason } => {
                self.reporter
                    .report(ReportKind::UnhandledRejection, reason.summary())
                    .await;
            }
            _ => {}
        }
    }
}
