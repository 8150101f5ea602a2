use std::sync::Arc;

use async_trait::async_trait;

use crate::fetch::{Fetch, FetchError, FetchRequest, FetchResponse};
use crate::page::PageEvent;
use crate::report::ReportKind;
use crate::reporter::Reporter;

/// Query markers identifying legacy AJAX checkout/cart requests.
const AJAX_URL_MARKERS: [&str; 3] = [
    "wc-ajax=add_to_cart",
    "wc-ajax=checkout",
    "wc-ajax=update_order_review",
];

/// Path markers identifying storefront API requests on the fetch channel.
const STORE_API_MARKERS: [&str; 2] = ["wc-ajax=", "/wp-json/wc/store"];

fn is_storefront_api(url: &str) -> bool {
    STORE_API_MARKERS.iter().any(|marker| url.contains(marker))
}

/// Observes failed checkout/cart network calls on the legacy AJAX channel.
///
/// Only receives events when a DOM-manipulation library with a global
/// ajax-error event is present on the page; without one the channel is
/// simply silent.
pub struct NetworkObserver {
    reporter: Arc<Reporter>,
}

impl NetworkObserver {
    /// Create an observer reporting through `reporter`.
    #[must_use]
    pub fn new(reporter: Arc<Reporter>) -> Self {
        Self { reporter }
    }

    /// Handle one page event; non-AJAX events are ignored.
    pub async fn handle(&self, event: &PageEvent) {
        let PageEvent::AjaxError {
            url,
            status,
            status_text,
        } = event
        else {
            return;
        };

        if !AJAX_URL_MARKERS.iter().any(|marker| url.contains(marker)) {
            return;
        }

        self.reporter
            .report(
                ReportKind::AjaxFailure,
                &format!("Failed URL: {url} | Error: {status_text} | Status: {status}"),
            )
            .await;
    }
}

/// Decorator around the page's fetch primitive.
///
/// Observes settlement of storefront API calls and reports failures, then
/// hands the original response or error through unchanged. Requests to the
/// collector itself bypass instrumentation entirely so the reporter's own
/// traffic can never be re-intercepted or reported on.
pub struct InstrumentedFetch<F> {
    inner: F,
    hook: Option<ReportHook>,
}

struct ReportHook {
    reporter: Arc<Reporter>,
    collector_url: String,
}

impl<F: Fetch> InstrumentedFetch<F> {
    /// Wrap `inner`, reporting qualifying failures through `reporter`.
    #[must_use]
    pub fn new(inner: F, reporter: Arc<Reporter>, collector_url: String) -> Self {
        Self {
            inner,
            hook: Some(ReportHook {
                reporter,
                collector_url,
            }),
        }
    }

    /// Wrap `inner` without any observation (network tracking disabled).
    #[must_use]
    pub fn passthrough(inner: F) -> Self {
        Self { inner, hook: None }
    }
}

#[async_trait]
impl<F: Fetch> Fetch for InstrumentedFetch<F> {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, FetchError> {
        let Some(hook) = &self.hook else {
            return self.inner.fetch(request).await;
        };

        // Self-report recursion guard.
        if request.url == hook.collector_url {
            return self.inner.fetch(request).await;
        }

        let result = self.inner.fetch(request).await;

        if is_storefront_api(&request.url) {
            match &result {
                Ok(response) if !response.ok() => {
                    hook.reporter
                        .report(
                            ReportKind::FetchFailure,
                            &format!("Failed URL: {} | Status: {}", request.url, response.status),
                        )
                        .await;
                }
                Err(error) => {
                    hook.reporter
                        .report(
                            ReportKind::FetchFailure,
                            &format!("Failed URL: {} | Error: {}", request.url, error),
                        )
                        .await;
                }
                Ok(_) => {}
            }
        }

        result
    }
}
