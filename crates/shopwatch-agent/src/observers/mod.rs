//! Failure observers
//!
//! Each observer subscribes to one class of page event and turns qualifying
//! occurrences into reports:
//! - [`CrashObserver`]: uncaught exceptions and unhandled rejections
//! - [`UiNoticeObserver`]: storefront error banners appearing in the DOM
//! - [`NetworkObserver`] / [`InstrumentedFetch`]: failed checkout/cart calls
//!
//! Observers only observe; none of them alters what the host page sees.

/// Uncaught exception and unhandled rejection handling.
pub mod crash;
/// Checkout/cart network failure handling.
pub mod network;
/// Storefront error-banner handling.
pub mod ui_notice;

pub use crash::CrashObserver;
pub use network::{InstrumentedFetch, NetworkObserver};
pub use ui_notice::UiNoticeObserver;
