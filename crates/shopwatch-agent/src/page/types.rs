use std::sync::Arc;

use super::dom::DomNode;

/// Read-once identity of the monitored page.
#[derive(Debug, Clone)]
pub struct PageInfo {
    /// Hostname of the shop (`window.location.hostname` equivalent)
    pub hostname: String,
    /// Full page URL (`window.location.href` equivalent)
    pub href: String,
    /// Browser user-agent string
    pub user_agent: String,
}

impl PageInfo {
    /// Capture the page identity.
    #[must_use]
    pub fn new(
        hostname: impl Into<String>,
        href: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            href: href.into(),
            user_agent: user_agent.into(),
        }
    }
}

/// Reason attached to an unhandled rejection.
///
/// Rejections may carry a structured error (with a `message` property) or an
/// arbitrary value; the host facade preserves both so the observer can prefer
/// the message and fall back to the stringified form.
#[derive(Debug, Clone)]
pub struct RejectionReason {
    /// `message` property of the rejection value, when it has one
    pub message: Option<String>,
    /// Stringified form of the rejection value
    pub description: String,
}

impl RejectionReason {
    /// Reason carrying a structured error message.
    #[must_use]
    pub fn with_message(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            description: description.into(),
        }
    }

    /// Reason carrying only a stringified value.
    #[must_use]
    pub fn bare(description: impl Into<String>) -> Self {
        Self {
            message: None,
            description: description.into(),
        }
    }

    /// Best available text: the message property if present, else the
    /// stringified form.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.description)
    }
}

/// Events delivered by the host environment, in delivery order.
#[derive(Debug, Clone)]
pub enum PageEvent {
    /// The DOM finished parsing; mutation and network observation may begin
    DomReady,

    /// An uncaught synchronous exception reached the global error handler
    ScriptError {
        /// Error message
        message: String,
        /// URL of the script the error originated from
        source: String,
        /// Line number within the script
        line: u32,
        /// Column number within the line
        col: u32,
    },

    /// An asynchronous rejection was never handled
    UnhandledRejection {
        /// The rejection value
        reason: RejectionReason,
    },

    /// One mutation batch of nodes inserted into the page body subtree
    DomInserted {
        /// Root nodes of the inserted subtrees
        nodes: Vec<Arc<DomNode>>,
    },

    /// A legacy AJAX request failed (only emitted when a DOM-manipulation
    /// library with a global ajax-error event is present on the page)
    AjaxError {
        /// URL of the failing request
        url: String,
        /// HTTP status code (0 for transport failures)
        status: u16,
        /// Status text reported by the library
        status_text: String,
    },
}
