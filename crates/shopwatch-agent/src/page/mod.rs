//! Host-page facade
//!
//! The agent never touches browser globals directly. The host page is
//! modeled as three pieces so the engine stays testable without a browser:
//! - [`PageInfo`]: read-once page identity (hostname, URL, user agent)
//! - [`DomNode`] / [`Selector`]: minimal element model for banner scanning
//! - [`PageBus`]: broadcast event bus carrying [`PageEvent`]s from the host
//!   environment (error events, rejections, DOM mutation batches, AJAX
//!   failures) to whichever observers subscribed

/// Broadcast event bus for host-page events.
pub mod bus;
/// Minimal DOM element model and banner selectors.
pub mod dom;
/// Page identity and event type definitions.
pub mod types;

pub use bus::PageBus;
pub use dom::{DomNode, Selector, NOTICE_SELECTORS};
pub use types::{PageEvent, PageInfo, RejectionReason};
