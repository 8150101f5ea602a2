//! Shopwatch Agent - Storefront Error Telemetry
//!
//! This crate provides the in-page error-capture-and-reporting engine for
//! storefront monitoring:
//! - Config: Agent configuration supplied by the server-side settings provider
//! - Page: Host-page facade (page identity, DOM model, event bus)
//! - Observers: Crash, UI-notice, and network failure detection
//! - Reporter: Report construction and best-effort delivery to the collector
//! - Controller: Per-page lifecycle wiring and idempotent startup
//!
//! Delivery is fire-and-forget for a single page view: no retry queue, no
//! offline buffering, no persistence across page loads.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod dedup;
pub mod error;
pub mod fetch;
pub mod observers;
pub mod page;
pub mod rate_limit;
pub mod report;
pub mod reporter;
pub mod transport;

pub use config::AgentConfig;
pub use controller::AgentController;
pub use dedup::DedupTracker;
pub use error::{Error, Result};
pub use fetch::{Fetch, FetchError, FetchRequest, FetchResponse};
pub use observers::{CrashObserver, InstrumentedFetch, NetworkObserver, UiNoticeObserver};
pub use page::{DomNode, PageBus, PageEvent, PageInfo, RejectionReason, Selector};
pub use rate_limit::{RateLimiter, MAX_REPORTS_PER_PAGE};
pub use report::{ErrorReport, ReportKind, MAX_MESSAGE_LEN};
pub use reporter::Reporter;
pub use transport::{HttpTransport, Transport, TransportError};
