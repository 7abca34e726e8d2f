#![allow(dead_code, unreachable_pub)]

use georeg_derive::item_model;
use georeg_kernel::domain::reference::normalize_ref;
use georeg_kernel::prelude::*;
use std::collections::HashMap;
use std::rc::Rc;

pub const NOTE: &str = "crs--vertical";

/// Minimal class: a named item pointing at another item of its own class.
#[item_model]
#[derive(Default)]
pub struct NoteData {
    #[serde(flatten)]
    pub common: CommonItemData,
    pub scope: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<ItemRef>,
}

impl NoteData {
    pub fn named(name: &str) -> Self {
        Self { common: CommonItemData::default().with_name(name), ..Self::default() }
    }

    pub fn with_target(&self, target: ItemRef) -> Self {
        Self { target: Some(target), ..self.clone() }
    }

    pub fn without_target(&self) -> Self {
        Self { target: None, ..self.clone() }
    }
}

impl Layered<CommonItemData> for NoteData {
    fn layer(&self) -> &CommonItemData {
        &self.common
    }

    fn with_layer(&self, common: CommonItemData) -> Self {
        Self { common, ..self.clone() }
    }
}

impl ItemData for NoteData {
    fn common(&self) -> &CommonItemData {
        &self.common
    }

    fn references(&self) -> Vec<RefSlot> {
        self.target
            .iter()
            .map(|target| RefSlot::restricted("target", ClassSet::CRS_VERTICAL, target.clone()))
            .collect()
    }

    fn sanitized(self) -> Self {
        Self {
            common: self.common.sanitized(),
            scope: self.scope.trim().to_owned(),
            target: normalize_ref(self.target),
        }
    }
}

static META: ClassMeta = ClassMeta {
    title: "Note",
    description: "Test class",
    id: NOTE,
    alternative_names: &[],
};

#[derive(Debug, Default)]
pub struct Note {
    pub policy: ValidationPolicy,
}

impl ItemClass for Note {
    type Data = NoteData;

    fn meta(&self) -> &'static ClassMeta {
        &META
    }

    fn defaults(&self) -> NoteData {
        NoteData::default()
    }

    fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    fn detail_view(&self, item: &NoteData, cx: &ViewContext<'_>) -> Vec<Node> {
        let target = RelatedItem::generic(item.target.clone(), ClassSet::CRS_VERTICAL).view(cx);
        common::detail_view(
            &item.common,
            cx,
            vec![Property::new("Target").child(Node::Related(target)).into()],
        )
    }

    fn edit_view(
        &self,
        item: &NoteData,
        on_change: Option<OnChange<NoteData>>,
        cx: &ViewContext<'_>,
    ) -> Form {
        let rc = Rc::new(item.clone());
        let slots: Vec<Node> = vec![
            Property::new("Scope")
                .child(fields::text(cx, &item.scope, &rc, on_change.as_ref(), |d, v| NoteData {
                    scope: v,
                    ..d.clone()
                }))
                .into(),
            Property::new("Target")
                .child(RelatedItem::generic(item.target.clone(), ClassSet::CRS_VERTICAL).render(
                    cx,
                    &rc,
                    on_change.as_ref(),
                    NoteData::with_target,
                    NoteData::without_target,
                ))
                .into(),
        ];
        common::edit_view(&item.common, on_change.map(|oc| oc.lift(rc)), cx, slots)
    }
}

/// Item store backed by a map; ids listed in `pending` report as still loading.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub items: HashMap<ItemRef, serde_json::Value>,
    pub pending: Vec<ItemRef>,
}

impl MemoryStore {
    pub fn insert(&mut self, item_ref: ItemRef, data: &NoteData) {
        self.items.insert(item_ref, serde_json::to_value(data).expect("note encodes"));
    }
}

impl RegisterItemData for MemoryStore {
    fn item_data(&self, item_ref: &ItemRef) -> ItemDataState {
        if self.pending.contains(item_ref) {
            return ItemDataState::Pending;
        }
        self.items.get(item_ref).cloned().map_or(ItemDataState::Missing, ItemDataState::Ready)
    }
}

pub fn note_ref(id: &str) -> ItemRef {
    ItemRef::new(NOTE, id)
}
