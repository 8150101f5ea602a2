//! Per-page report rate limiting
//!
//! Caps how many reports a single page view may send so a crash loop or a
//! re-rendering error banner cannot flood the collector. The counter is
//! monotonic and never resets within a page lifetime; navigation or reload
//! starts a fresh limiter.

use std::sync::atomic::{AtomicU32, Ordering};

/// Maximum reports a single page view may send
pub const MAX_REPORTS_PER_PAGE: u32 = 10;

/// Monotonic per-page report budget.
#[derive(Debug)]
pub struct RateLimiter {
    sent: AtomicU32,
    cap: u32,
}

impl RateLimiter {
    /// Create a limiter with a custom cap.
    #[must_use]
    pub fn new(cap: u32) -> Self {
        Self {
            sent: AtomicU32::new(0),
            cap,
        }
    }

    /// Try to consume one report slot.
    ///
    /// Returns true and increments the counter while under the cap; once the
    /// cap is reached every subsequent call returns false.
    pub fn try_consume(&self) -> bool {
        self.sent
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                (n < self.cap).then_some(n + 1)
            })
            .is_ok()
    }

    /// Number of slots consumed so far.
    #[must_use]
    pub fn sent_count(&self) -> u32 {
        self.sent.load(Ordering::SeqCst)
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(MAX_REPORTS_PER_PAGE)
    }
}
