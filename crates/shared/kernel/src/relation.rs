//! Relation resolution: how a reference to another registry item is shown and edited.
//!
//! A reference is a relationship, never ownership. The referenced item is looked up through
//! the host's [`RegisterItemData`](crate::context::RegisterItemData) hook each time a view is
//! built, so the preview always reflects the stored item.

use crate::context::{ItemDataState, ViewContext};
use crate::update::{Handler, OnChange};
use crate::view::{Control, Node};
use georeg_domain::{ClassSet, ItemRef};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use tracing::{trace, warn};

#[georeg_derive::georeg_error]
pub enum RelationError {
    #[error("Reference rejected{}: `{class_id}` is not one of [{permitted}]", format_context(.context))]
    NotPermitted { class_id: String, permitted: String, context: Option<Cow<'static, str>> },

    #[error("Reference rejected{}: item id is blank", format_context(.context))]
    BlankItem { context: Option<Cow<'static, str>> },
}

/// How a referenced item is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationMode {
    /// Resolve the item and show a preview of it.
    Generic,
    /// Show only the item id; the class is fixed by the field.
    Id,
}

/// What is known about the referenced item.
#[derive(Debug)]
pub enum Preview {
    /// The field is absent.
    Unspecified,
    /// The host is still loading the item.
    Pending(ItemRef),
    /// The host does not know the item.
    Missing(ItemRef),
    /// Id-only presentation.
    Id(ItemRef),
    Resolved {
        item_ref: ItemRef,
        class_title: Option<&'static str>,
        label: String,
        /// Detail presentation of the related item, empty past the preview depth limit.
        details: Vec<Node>,
    },
}

impl Preview {
    #[must_use]
    pub const fn item_ref(&self) -> Option<&ItemRef> {
        match self {
            Self::Unspecified => None,
            Self::Pending(item_ref)
            | Self::Missing(item_ref)
            | Self::Id(item_ref)
            | Self::Resolved { item_ref, .. } => Some(item_ref),
        }
    }
}

/// Read-only presentation of one reference field.
#[derive(Debug)]
pub struct RelatedItemView {
    /// Permitted target classes; `None` accepts any class.
    pub targets: Option<ClassSet>,
    pub mode: RelationMode,
    pub preview: Preview,
    pub placeholder: String,
}

impl RelatedItemView {
    #[must_use]
    pub const fn item_ref(&self) -> Option<&ItemRef> {
        self.preview.item_ref()
    }
}

/// Editable reference field.
///
/// `set` and `clear` hand the caller's updater a descriptor or an absence; the caller builds the
/// replacement parent value and passes it to its own change callback.
pub struct RelatedItemControl {
    view: RelatedItemView,
    on_set: Handler<ItemRef>,
    on_clear: Handler<()>,
}

impl RelatedItemControl {
    #[must_use]
    pub const fn view(&self) -> &RelatedItemView {
        &self.view
    }

    /// Classes the picker may offer; empty when any class is accepted.
    pub fn candidates(&self) -> impl Iterator<Item = &'static str> {
        self.view.targets.into_iter().flat_map(ClassSet::ids)
    }

    /// Points the field at `item_ref`.
    ///
    /// # Errors
    /// Refuses descriptors with a blank item id or a class outside the permitted targets; the
    /// callback is not invoked then.
    pub fn set(&self, item_ref: ItemRef) -> Result<(), RelationError> {
        let item_ref = item_ref.trimmed();
        if item_ref.is_blank() {
            return Err(RelationError::BlankItem { context: None });
        }
        if let Some(targets) = self.view.targets
            && !targets.admits(&item_ref.class_id)
        {
            return Err(not_permitted(&item_ref, targets));
        }
        (self.on_set)(item_ref);
        Ok(())
    }

    /// Removes the reference; the field becomes absent.
    pub fn clear(&self) {
        (self.on_clear)(());
    }
}

impl fmt::Debug for RelatedItemControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelatedItemControl").field("view", &self.view).finish_non_exhaustive()
    }
}

/// A reference field under construction.
#[derive(Debug, Clone)]
pub struct RelatedItem {
    item_ref: Option<ItemRef>,
    targets: Option<ClassSet>,
    mode: RelationMode,
}

impl RelatedItem {
    /// Reference shown with a resolved preview of the item.
    #[must_use]
    pub const fn generic(item_ref: Option<ItemRef>, targets: ClassSet) -> Self {
        Self { item_ref, targets: Some(targets), mode: RelationMode::Generic }
    }

    /// Reference to an item of any class, shown with a resolved preview.
    #[must_use]
    pub const fn unrestricted(item_ref: Option<ItemRef>) -> Self {
        Self { item_ref, targets: None, mode: RelationMode::Generic }
    }

    /// Reference shown by id only.
    #[must_use]
    pub const fn by_id(item_ref: Option<ItemRef>, targets: ClassSet) -> Self {
        Self { item_ref, targets: Some(targets), mode: RelationMode::Id }
    }

    #[must_use]
    pub fn view(self, cx: &ViewContext<'_>) -> RelatedItemView {
        let preview = match self.item_ref {
            None => Preview::Unspecified,
            Some(item_ref) if self.mode == RelationMode::Id => Preview::Id(item_ref),
            Some(item_ref) => resolve(item_ref, cx),
        };
        RelatedItemView {
            targets: self.targets,
            mode: self.mode,
            preview,
            placeholder: cx.placeholder_text().to_owned(),
        }
    }

    /// Renders the field for `item`.
    ///
    /// Without a callback the node is a plain view. With one, `set` and `clear` build the
    /// replacement of `item` for a new descriptor and for an absent field.
    pub fn render<T: 'static>(
        self,
        cx: &ViewContext<'_>,
        item: &Rc<T>,
        on_change: Option<&OnChange<T>>,
        set: fn(&T, ItemRef) -> T,
        clear: fn(&T) -> T,
    ) -> Node {
        let view = self.view(cx);
        match on_change {
            None => Node::Related(view),
            Some(on_change) => Control::Related(RelatedItemControl {
                view,
                on_set: on_change.field(item, set),
                on_clear: on_change.field(item, move |current, ()| clear(current)),
            })
            .into(),
        }
    }
}

/// Ordered references to items of one class, stored as ids.
pub struct RelatedListControl {
    pub target: ClassSet,
    pub items: Vec<RelatedItemView>,
    ids: Vec<String>,
    on_change: Handler<Vec<String>>,
}

impl RelatedListControl {
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Appends a reference.
    ///
    /// # Errors
    /// Same refusals as [`RelatedItemControl::set`].
    pub fn push(&self, item_ref: ItemRef) -> Result<(), RelationError> {
        let item_ref = item_ref.trimmed();
        if item_ref.is_blank() {
            return Err(RelationError::BlankItem { context: None });
        }
        if !self.target.admits(&item_ref.class_id) {
            return Err(not_permitted(&item_ref, self.target));
        }
        let mut ids = self.ids.clone();
        ids.push(item_ref.item_id);
        (self.on_change)(ids);
        Ok(())
    }

    /// Out-of-range indices are ignored.
    pub fn remove(&self, index: usize) {
        if index < self.ids.len() {
            let mut ids = self.ids.clone();
            ids.remove(index);
            (self.on_change)(ids);
        }
    }

    /// Moves the entry at `from` to position `to`; order is significant.
    pub fn reorder(&self, from: usize, to: usize) {
        if from < self.ids.len() && to < self.ids.len() && from != to {
            let mut ids = self.ids.clone();
            let id = ids.remove(from);
            ids.insert(to, id);
            (self.on_change)(ids);
        }
    }
}

impl fmt::Debug for RelatedListControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelatedListControl")
            .field("target", &self.target)
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

/// Renders a list of ids of `target` items, each with a generic preview.
pub fn related_list<T: 'static>(
    cx: &ViewContext<'_>,
    ids: &[String],
    target: &'static str,
    item: &Rc<T>,
    on_change: Option<&OnChange<T>>,
    set: fn(&T, Vec<String>) -> T,
) -> Node {
    let items: Vec<RelatedItemView> = ids
        .iter()
        .map(|id| {
            RelatedItem::generic(Some(ItemRef::new(target, id.as_str())), ClassSet::from(target))
                .view(cx)
        })
        .collect();

    match on_change {
        Some(on_change) => Control::RelatedList(RelatedListControl {
            target: ClassSet::from(target),
            items,
            ids: ids.to_vec(),
            on_change: on_change.field(item, set),
        })
        .into(),
        None if items.is_empty() => cx.placeholder(),
        None => Node::List(items.into_iter().map(Node::Related).collect()),
    }
}

fn resolve(item_ref: ItemRef, cx: &ViewContext<'_>) -> Preview {
    match cx.items().item_data(&item_ref) {
        ItemDataState::Pending => Preview::Pending(item_ref),
        ItemDataState::Missing => Preview::Missing(item_ref),
        ItemDataState::Ready(data) => {
            let Some(class) = cx.classes().related_item_class_configuration(&item_ref.class_id)
            else {
                trace!(%item_ref, "No class configuration for related item");
                return Preview::Resolved {
                    label: fallback_label(&data),
                    item_ref,
                    class_title: None,
                    details: Vec::new(),
                };
            };

            let label = class.list_item_view(&data).map_or_else(
                |err| {
                    warn!(%item_ref, "Related item does not decode: {err}");
                    fallback_label(&data)
                },
                |row| row.to_string(),
            );

            let details = if cx.can_expand() {
                class.detail_view(&data, &cx.nested()).unwrap_or_else(|err| {
                    warn!(%item_ref, "Related item details unavailable: {err}");
                    Vec::new()
                })
            } else {
                trace!(%item_ref, depth = cx.depth(), "Preview depth reached");
                Vec::new()
            };

            Preview::Resolved { item_ref, class_title: Some(class.meta().title), label, details }
        },
    }
}

fn fallback_label(data: &Value) -> String {
    data.get("name").and_then(Value::as_str).unwrap_or_default().to_owned()
}

fn not_permitted(item_ref: &ItemRef, targets: ClassSet) -> RelationError {
    RelationError::NotPermitted {
        class_id: item_ref.class_id.clone(),
        permitted: targets.ids().collect::<Vec<_>>().join(", "),
        context: None,
    }
}
