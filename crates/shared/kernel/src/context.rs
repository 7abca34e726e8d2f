//! Capabilities the registry host injects into presentations.

use crate::class::DynItemClass;
use crate::view::Node;
use georeg_domain::ItemRef;
use georeg_domain::config::PresentationConfig;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Placeholder shown when no presentation config is supplied.
pub const DEFAULT_PLACEHOLDER: &str = "—";

/// Preview depth used when no presentation config is supplied.
pub const DEFAULT_MAX_PREVIEW_DEPTH: u8 = 2;

/// State of a referenced item's data as reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemDataState {
    /// The host is still fetching the item.
    Pending,
    /// The host has no such item.
    Missing,
    Ready(Value),
}

/// Item-data hook: looks up the stored payload of a referenced item.
pub trait RegisterItemData {
    fn item_data(&self, item_ref: &ItemRef) -> ItemDataState;
}

/// Class lookup used to render nested previews of related items.
pub trait RelatedClassConfiguration {
    fn related_item_class_configuration(&self, class_id: &str) -> Option<Arc<dyn DynItemClass>>;
}

/// Host without item storage or class lookup.
///
/// Every reference renders as missing; useful for rendering a lone payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct Detached;

impl RegisterItemData for Detached {
    fn item_data(&self, _item_ref: &ItemRef) -> ItemDataState {
        ItemDataState::Missing
    }
}

impl RelatedClassConfiguration for Detached {
    fn related_item_class_configuration(&self, _class_id: &str) -> Option<Arc<dyn DynItemClass>> {
        None
    }
}

/// Everything a view needs from its surroundings.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    items: &'a dyn RegisterItemData,
    classes: &'a dyn RelatedClassConfiguration,
    placeholder: &'a str,
    depth: u8,
    max_depth: u8,
}

impl<'a> ViewContext<'a> {
    pub fn new(items: &'a dyn RegisterItemData, classes: &'a dyn RelatedClassConfiguration) -> Self {
        Self {
            items,
            classes,
            placeholder: DEFAULT_PLACEHOLDER,
            depth: 0,
            max_depth: DEFAULT_MAX_PREVIEW_DEPTH,
        }
    }

    /// Context for hosts that can resolve nothing.
    #[must_use]
    pub fn detached() -> ViewContext<'static> {
        ViewContext::new(&Detached, &Detached)
    }

    #[must_use]
    pub fn with_presentation(mut self, presentation: &'a PresentationConfig) -> Self {
        self.placeholder = presentation.placeholder.as_str();
        self.max_depth = presentation.max_preview_depth;
        self
    }

    #[must_use]
    pub const fn items(&self) -> &'a dyn RegisterItemData {
        self.items
    }

    #[must_use]
    pub const fn classes(&self) -> &'a dyn RelatedClassConfiguration {
        self.classes
    }

    /// Placeholder text for absent values.
    #[must_use]
    pub const fn placeholder_text(&self) -> &'a str {
        self.placeholder
    }

    #[must_use]
    pub fn placeholder(&self) -> Node {
        Node::Placeholder(self.placeholder.to_owned())
    }

    /// Nesting level of the item being rendered; the top-level item is at depth 0.
    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// Whether related items referenced at this level may show their own details.
    #[must_use]
    pub const fn can_expand(&self) -> bool {
        self.depth < self.max_depth
    }

    /// Context for the details of a related item one level down.
    #[must_use]
    pub const fn nested(&self) -> Self {
        Self { depth: self.depth.saturating_add(1), ..*self }
    }
}

impl fmt::Debug for ViewContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewContext")
            .field("placeholder", &self.placeholder)
            .field("depth", &self.depth)
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nesting_stops_at_the_configured_depth() {
        let presentation = PresentationConfig { placeholder: "n/a".to_owned(), max_preview_depth: 1 };
        let cx = ViewContext::detached().with_presentation(&presentation);

        assert!(cx.can_expand());
        assert!(!cx.nested().can_expand());
        assert_eq!(cx.nested().depth(), 1);
        assert_eq!(cx.placeholder_text(), "n/a");
    }

    #[test]
    fn detached_hosts_resolve_nothing() {
        let cx = ViewContext::detached();
        let item_ref = ItemRef::new("datums--geodetic", "D1");

        assert_eq!(cx.items().item_data(&item_ref), ItemDataState::Missing);
        assert!(cx.classes().related_item_class_configuration("datums--geodetic").is_none());
    }
}
