mod support;

use georeg_kernel::prelude::*;
use georeg_kernel::relation::Preview;
use georeg_kernel::view::text;
use std::cell::RefCell;
use std::rc::Rc;
use support::{MemoryStore, Note, NoteData, note_ref};

fn registry() -> ClassRegistry {
    let mut registry = ClassRegistry::new();
    registry.register(Note::default()).expect("register note");
    registry
}

fn target_preview(nodes: &[Node]) -> &Preview {
    let property = georeg_kernel::view::find_property(nodes, "Target").expect("target row");
    match property.body.first() {
        Some(Node::Related(view)) => &view.preview,
        other => panic!("unexpected target node: {other:?}"),
    }
}

#[test]
fn absent_references_render_the_placeholder() {
    let registry = registry();
    let store = MemoryStore::default();
    let cx = ViewContext::new(&store, &registry);

    let nodes = Note::default().detail_view(&NoteData::named("A"), &cx);
    assert!(matches!(target_preview(&nodes), Preview::Unspecified));
    assert!(text::render(&nodes).contains("Target: —"));
}

#[test]
fn pending_and_missing_items_are_reported() {
    let registry = registry();
    let store = MemoryStore { pending: vec![note_ref("P")], ..MemoryStore::default() };
    let cx = ViewContext::new(&store, &registry);

    let pending = Note::default().detail_view(&NoteData::named("A").with_target(note_ref("P")), &cx);
    assert!(matches!(target_preview(&pending), Preview::Pending(r) if r.item_id == "P"));

    let missing = Note::default().detail_view(&NoteData::named("A").with_target(note_ref("X")), &cx);
    assert!(matches!(target_preview(&missing), Preview::Missing(r) if r.item_id == "X"));
}

#[test]
fn cyclic_references_stop_at_the_depth_limit() {
    let registry = registry();
    let mut store = MemoryStore::default();
    store.insert(note_ref("A"), &NoteData::named("Loop").with_target(note_ref("A")));
    let cx = ViewContext::new(&store, &registry);

    let nodes = Note::default().detail_view(&NoteData::named("Root").with_target(note_ref("A")), &cx);
    let Preview::Resolved { label, class_title, details, .. } = target_preview(&nodes) else {
        panic!("target should resolve");
    };
    assert_eq!(label, "Loop");
    assert_eq!(*class_title, Some("Note"));

    let Preview::Resolved { details: nested, .. } = target_preview(details) else {
        panic!("nested target should resolve");
    };
    assert!(matches!(target_preview(nested), Preview::Resolved { details, .. } if details.is_empty()));
}

#[test]
fn relation_control_sets_and_clears_through_the_parent() {
    let registry = registry();
    let store = MemoryStore::default();
    let cx = ViewContext::new(&store, &registry);
    let original = NoteData::named("A").with_target(note_ref("B"));

    let emitted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&emitted);
    let form = Note::default().edit_view(
        &original,
        Some(OnChange::new(move |next: NoteData| sink.borrow_mut().push(next))),
        &cx,
    );
    let control = form.control("Target").and_then(Control::as_related).expect("target control");

    assert_eq!(control.candidates().collect::<Vec<_>>(), vec!["crs--vertical"]);
    assert!(control.set(ItemRef::new("crs--compound", "C")).is_err());
    assert!(control.set(note_ref(" ")).is_err());
    assert!(emitted.borrow().is_empty());

    control.clear();
    let cleared = emitted.borrow()[0].clone();
    assert_eq!(cleared.target, None);

    control.set(note_ref("B")).expect("permitted target");
    assert_eq!(emitted.borrow()[1], original);
    assert_eq!(original.target, Some(note_ref("B")));
}
