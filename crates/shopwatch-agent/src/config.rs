//! Agent configuration
//!
//! The configuration is produced by the server-side settings surface and
//! handed to the agent once per page view; there is no live reload. Field
//! defaults mirror the values the settings surface seeds on install: all
//! tracking channels on, monitoring enabled, no collector URL until one is
//! configured.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Returns the default for the `enabled` flag.
pub fn default_enabled() -> bool {
    true
}

/// Returns the default for the per-channel tracking flags.
pub fn default_track() -> bool {
    true
}

/// Agent configuration, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Collector endpoint URL; empty means "not configured"
    #[serde(default)]
    pub collector_url: String,

    /// Master switch for the whole agent (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Track uncaught exceptions and unhandled rejections (default: true)
    #[serde(default = "default_track")]
    pub track_crashes: bool,

    /// Track failed checkout/cart network calls (default: true)
    #[serde(default = "default_track")]
    pub track_network: bool,

    /// Track storefront error banners in the DOM (default: true)
    #[serde(default = "default_track")]
    pub track_ui_notices: bool,

    /// Whether the current page type qualifies for monitoring.
    ///
    /// Decided by an external page-type predicate (checkout, cart, product)
    /// before the agent starts; defaults to false so an unqualified page
    /// never activates the agent.
    #[serde(default)]
    pub page_eligible: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            collector_url: String::new(),
            enabled: default_enabled(),
            track_crashes: default_track(),
            track_network: default_track(),
            track_ui_notices: default_track(),
            page_eligible: false,
        }
    }
}

impl AgentConfig {
    /// Parse a configuration payload delivered by the settings provider.
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(|e| Error::Config(e.to_string()))
    }

    /// Whether the agent should observe anything at all on this page.
    ///
    /// False when monitoring is disabled, no collector URL is configured,
    /// every tracking channel is off, or the page is not eligible. An
    /// inactive config installs no listeners and spawns no tasks.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled
            && !self.collector_url.is_empty()
            && (self.track_crashes || self.track_network || self.track_ui_notices)
            && self.page_eligible
    }
}
