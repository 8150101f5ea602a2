//! Duplicate-report suppression for DOM banners
//!
//! Mutation re-scans keep seeing the same banner node for as long as it stays
//! in the tree; the tracker guarantees a given node produces at most one
//! report. The marker is the node's own intrusive flag, so a node leaving the
//! DOM takes its marker with it.

use crate::page::DomNode;

/// Marks DOM nodes that have already produced a UI-notice report.
#[derive(Debug, Default, Clone, Copy)]
pub struct DedupTracker;

impl DedupTracker {
    /// Whether `node` has already been reported.
    #[must_use]
    pub fn already_reported(&self, node: &DomNode) -> bool {
        node.marker()
    }

    /// Mark `node` as reported. Idempotent.
    pub fn mark_reported(&self, node: &DomNode) {
        node.set_marker();
    }
}
