use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Class-set selector identifying storefront banner markup.
///
/// An element matches when it carries every class in the set (the subset of
/// CSS selector syntax the banner patterns actually need).
#[derive(Debug, Clone, Copy)]
pub struct Selector {
    classes: &'static [&'static str],
}

impl Selector {
    /// Selector matching elements that carry all of `classes`.
    #[must_use]
    pub const fn all_of(classes: &'static [&'static str]) -> Self {
        Self { classes }
    }

    /// Whether `node` matches this selector.
    #[must_use]
    pub fn matches(&self, node: &DomNode) -> bool {
        self.classes.iter().all(|class| node.has_class(class))
    }
}

/// The three storefront error-banner patterns: classic error notices,
/// checkout notice groups, and block-based error banners.
pub const NOTICE_SELECTORS: [Selector; 3] = [
    Selector::all_of(&["woocommerce-error"]),
    Selector::all_of(&["woocommerce-NoticeGroup-checkout"]),
    Selector::all_of(&["wc-block-components-notice-banner", "is-error"]),
];

/// Minimal DOM element model.
///
/// Carries just what banner scanning needs: tag, class list, own text,
/// children, and the intrusive "already reported" marker. The marker lives on
/// the node itself, so removing the node from the tree drops the marker with
/// it; there is no independent marker storage.
#[derive(Debug)]
pub struct DomNode {
    tag: String,
    classes: Vec<String>,
    text: String,
    children: Vec<Arc<DomNode>>,
    reported: AtomicBool,
}

impl DomNode {
    /// Create an element with the given tag name.
    #[must_use]
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
            reported: AtomicBool::new(false),
        }
    }

    /// Add a class to the element.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the element's own text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn with_child(mut self, child: Arc<DomNode>) -> Self {
        self.children.push(child);
        self
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// All descendants in document order (children, then their children).
    #[must_use]
    pub fn descendants(&self) -> Vec<Arc<DomNode>> {
        let mut out = Vec::new();
        for child in &self.children {
            out.push(Arc::clone(child));
            out.extend(child.descendants());
        }
        out
    }

    /// Visible text of the element and its subtree, trimmed.
    #[must_use]
    pub fn visible_text(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ").trim().to_string()
    }

    fn collect_text(&self, parts: &mut Vec<String>) {
        let own = self.text.trim();
        if !own.is_empty() {
            parts.push(own.to_string());
        }
        for child in &self.children {
            child.collect_text(parts);
        }
    }

    /// Read the dedup marker. Only the dedup tracker touches this.
    pub(crate) fn marker(&self) -> bool {
        self.reported.load(Ordering::SeqCst)
    }

    /// Set the dedup marker. Idempotent.
    pub(crate) fn set_marker(&self) {
        self.reported.store(true, Ordering::SeqCst);
    }
}
