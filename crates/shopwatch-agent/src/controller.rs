//! Agent lifecycle controller
//!
//! One controller per page load wires the enabled observers to the page bus
//! and owns every piece of mutable agent state (startup guard, rate-limit
//! counter, subscriber tasks). Nothing here is process-wide: independent
//! controller instances coexist, which is what keeps the agent testable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::AgentConfig;
use crate::fetch::Fetch;
use crate::observers::{CrashObserver, InstrumentedFetch, NetworkObserver, UiNoticeObserver};
use crate::page::{PageBus, PageEvent, PageInfo};
use crate::reporter::Reporter;
use crate::transport::{HttpTransport, Transport};

/// Wires observers, reporter, and rate limiting together for one page view.
pub struct AgentController {
    config: AgentConfig,
    page: PageInfo,
    reporter: Arc<Reporter>,
    started: AtomicBool,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl AgentController {
    /// Create a controller using the real HTTP transport.
    ///
    /// The transport is captured here, before any fetch instrumentation, so
    /// outgoing reports never pass through the instrumented path.
    #[must_use]
    pub fn new(config: AgentConfig, page: PageInfo) -> Self {
        Self::with_transport(config, page, Arc::new(HttpTransport::new()))
    }

    /// Create a controller with an injected transport (used by tests).
    #[must_use]
    pub fn with_transport(
        config: AgentConfig,
        page: PageInfo,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let reporter = Arc::new(Reporter::new(
            config.collector_url.clone(),
            page.clone(),
            transport,
        ));
        Self {
            config,
            page,
            reporter,
            started: AtomicBool::new(false),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// The reporter this controller sends through.
    #[must_use]
    pub fn reporter(&self) -> &Arc<Reporter> {
        &self.reporter
    }

    /// Start observing the page. Idempotent: a second call is a no-op.
    ///
    /// An inactive config (disabled, no collector URL, no tracking channel,
    /// or ineligible page) installs no listeners at all. Crash observation is
    /// live from the moment this returns; UI-notice and network observation
    /// wait for the `DomReady` event.
    pub fn start(&self, bus: &PageBus) {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("agent already started on this page, ignoring");
            return;
        }

        if !self.config.is_active() {
            debug!("agent config inactive, no observers installed");
            return;
        }

        let mut tasks = lock_tasks(&self.tasks);

        if self.config.track_crashes {
            let observer =
                CrashObserver::new(Arc::clone(&self.reporter), self.page.hostname.clone());
            let mut rx = bus.subscribe();
            tasks.push(tokio::spawn(async move {
                loop {
                    match rx.recv().await {
                        Ok(event) => observer.handle(&event).await,
                        Err(RecvError::Lagged(skipped)) => {
                            warn!(skipped, "crash observer missed page events");
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            }));
        }

        if self.config.track_ui_notices {
            let observer = UiNoticeObserver::new(Arc::clone(&self.reporter));
            let mut rx = bus.subscribe();
            tasks.push(tokio::spawn(async move {
                let mut dom_ready = false;
                loop {
                    match rx.recv().await {
                        Ok(PageEvent::DomReady) => dom_ready = true,
                        Ok(event) if dom_ready => observer.handle(&event).await,
                        Ok(_) => {}
                        Err(RecvError::Lagged(skipped)) => {
                            warn!(skipped, "ui-notice observer missed page events");
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            }));
        }

        if self.config.track_network {
            let observer = NetworkObserver::new(Arc::clone(&self.reporter));
            let mut rx = bus.subscribe();
            tasks.push(tokio::spawn(async move {
                let mut dom_ready = false;
                loop {
                    match rx.recv().await {
                        Ok(PageEvent::DomReady) => dom_ready = true,
                        Ok(event) if dom_ready => observer.handle(&event).await,
                        Ok(_) => {}
                        Err(RecvError::Lagged(skipped)) => {
                            warn!(skipped, "network observer missed page events");
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            }));
        }

        debug!(
            observers = tasks.len(),
            site = %self.page.hostname,
            "agent started"
        );
    }

    /// Wrap the page's fetch primitive for network observation.
    ///
    /// Returns a plain pass-through wrapper when the agent is inactive or
    /// network tracking is off, so the host page's calls are untouched.
    pub fn instrument_fetch<F: Fetch>(&self, inner: F) -> InstrumentedFetch<F> {
        if self.config.is_active() && self.config.track_network {
            InstrumentedFetch::new(
                inner,
                Arc::clone(&self.reporter),
                self.config.collector_url.clone(),
            )
        } else {
            InstrumentedFetch::passthrough(inner)
        }
    }

    /// Administrative connectivity check (settings-page "send test alert").
    pub async fn send_test_alert(&self) {
        self.reporter.send_test_alert().await;
    }

    /// Uninstall all observers by aborting their subscriber tasks.
    pub fn stop(&self) {
        let mut tasks = lock_tasks(&self.tasks);
        for task in tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for AgentController {
    fn drop(&mut self) {
        self.stop();
    }
}

fn lock_tasks(tasks: &Mutex<Vec<JoinHandle<()>>>) -> std::sync::MutexGuard<'_, Vec<JoinHandle<()>>> {
    match tasks.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
