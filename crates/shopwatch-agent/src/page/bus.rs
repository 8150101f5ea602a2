use tokio::sync::broadcast;

use super::types::PageEvent;

/// Broadcast-based event bus for host-page events.
///
/// Uses `tokio::broadcast` so each enabled observer holds an independent
/// subscription to the same event stream. Slow subscribers miss events
/// (lagged) rather than blocking the publisher, which matches the host
/// environment's fire-and-forget event delivery.
#[derive(Debug, Clone)]
pub struct PageBus {
    sender: broadcast::Sender<PageEvent>,
}

impl PageBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to all future page events.
    ///
    /// The returned receiver is the observer's listener registration; dropping
    /// it (or aborting the task that owns it) uninstalls the listener.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PageEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all active subscribers.
    ///
    /// Returns the number of subscribers that received the event. With no
    /// subscribers the event is silently dropped.
    pub fn publish(&self, event: PageEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Current number of installed listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for PageBus {
    fn default() -> Self {
        Self::new(256)
    }
}
