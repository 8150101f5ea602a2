use std::sync::Arc;

use crate::dedup::DedupTracker;
use crate::page::{DomNode, PageEvent, NOTICE_SELECTORS};
use crate::report::ReportKind;
use crate::reporter::Reporter;

/// Observes the page body subtree for storefront error banners.
///
/// Runs per mutation batch: every newly inserted element and each of its
/// descendants is tested against the fixed banner selectors. The dedup
/// tracker guarantees one report per node no matter how many batches re-scan
/// it. Elements already present when the observer attaches are never
/// retroactively scanned.
pub struct UiNoticeObserver {
    reporter: Arc<Reporter>,
    dedup: DedupTracker,
}

impl UiNoticeObserver {
    /// Create an observer reporting through `reporter`.
    #[must_use]
    pub fn new(reporter: Arc<Reporter>) -> Self {
        Self {
            reporter,
            dedup: DedupTracker,
        }
    }

    /// Handle one page event; non-mutation events are ignored.
    pub async fn handle(&self, event: &PageEvent) {
        let PageEvent::DomInserted { nodes } = event else {
            return;
        };

        for node in nodes {
            self.inspect(node).await;
            for descendant in node.descendants() {
                self.inspect(&descendant).await;
            }
        }
    }

    async fn inspect(&self, node: &Arc<DomNode>) {
        if !NOTICE_SELECTORS.iter().any(|s| s.matches(node)) {
            return;
        }
        if self.dedup.already_reported(node) {
            return;
        }
        self.dedup.mark_reported(node);

        self.reporter
            .report(ReportKind::UiNotice, &node.visible_text())
            .await;
    }
}
