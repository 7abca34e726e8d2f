use georeg_coordinate_op_method::*;
use georeg_kernel::context::{ItemDataState, RegisterItemData, ViewContext};
use georeg_kernel::prelude::*;
use georeg_kernel::relation::Preview;
use georeg_kernel::view::text;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn method(parameters: &[&str]) -> CoordinateOpMethodData {
    CoordinateOpMethodData {
        common: CommonItemData::default().with_name("Transverse Mercator"),
        parameters: parameters.iter().map(|&id| id.to_owned()).collect(),
        formula: String::new(),
    }
}

fn capture() -> (OnChange<CoordinateOpMethodData>, Rc<RefCell<Vec<CoordinateOpMethodData>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (OnChange::new(move |value| sink.borrow_mut().push(value)), seen)
}

struct Parameters;

impl RegisterItemData for Parameters {
    fn item_data(&self, item_ref: &ItemRef) -> ItemDataState {
        match item_ref.item_id.as_str() {
            "P1" => ItemDataState::Ready(json!({ "name": "Latitude of natural origin" })),
            "P2" => ItemDataState::Pending,
            _ => ItemDataState::Missing,
        }
    }
}

#[tokio::test]
async fn defaults_are_valid() {
    let class = CoordinateOpMethod::default();
    let defaults = class.defaults();
    assert!(defaults.parameters.is_empty());
    assert_eq!(defaults.formula, "");
    assert!(class.validate_payload(&defaults).await);
}

#[tokio::test]
async fn parameters_must_be_distinct_and_non_blank() {
    let class = CoordinateOpMethod::default();

    assert!(class.validate_payload(&method(&["P1", "P2"])).await);
    assert!(!class.validate_payload(&method(&["P1", " "])).await);
    assert_eq!(
        class.diagnose(&method(&["P1", "P2", "P1"])),
        vec![Violation::DuplicateReference { field: "parameters", item_id: "P1".to_owned() }]
    );
    assert!(
        CoordinateOpMethod::new(ValidationPolicy::permissive())
            .validate_payload(&method(&["P1", "P1"]))
            .await
    );
}

#[tokio::test]
async fn sanitize_keeps_order_and_first_occurrences() {
    let class = CoordinateOpMethod::default();
    let clean = class.sanitize_payload(method(&[" P3", "P1", "", "P3 ", "P2"])).await;

    assert_eq!(clean.parameters, vec!["P3", "P1", "P2"]);
    assert!(class.validate_payload(&clean).await);
    assert_eq!(class.sanitize_payload(clean.clone()).await, clean);
}

#[test]
fn payload_shape() {
    let item: CoordinateOpMethodData =
        serde_json::from_value(json!({ "name": "Mercator", "parameters": ["P1"] })).expect("decodes");
    assert_eq!(item.formula, "");
    assert_eq!(item.common.name, "Mercator");

    let value = serde_json::to_value(item.with_formula("x = k0 * N")).expect("encodes");
    assert_eq!(value["parameters"], json!(["P1"]));
    assert_eq!(value["formula"], "x = k0 * N");
}

#[test]
fn detail_view_lists_parameters_in_order() {
    let class = CoordinateOpMethod::default();
    let registry = ClassRegistry::new();
    let cx = ViewContext::new(&Parameters, &registry);
    let nodes = class.detail_view(&method(&["P1", "P2", "P9"]), &cx);

    let parameters = georeg_kernel::view::find_property(&nodes, "Parameters").expect("parameters");
    let Node::List(items) = &parameters.body[0] else {
        panic!("expected a list of previews");
    };
    let previews: Vec<_> = items
        .iter()
        .map(|node| match node {
            Node::Related(view) => &view.preview,
            other => panic!("unexpected node {other:?}"),
        })
        .collect();

    assert!(matches!(previews[0], Preview::Resolved { label, .. } if label == "Latitude of natural origin"));
    assert!(matches!(previews[1], Preview::Pending(_)));
    assert!(matches!(previews[2], Preview::Missing(_)));
}

#[test]
fn empty_formula_and_parameters_are_omitted() {
    let nodes = CoordinateOpMethod::default().detail_view(&method(&[]), &ViewContext::detached());
    let rendered = text::render(&nodes);

    assert!(!rendered.contains("Formula"));
    assert!(!rendered.contains("Parameters"));
    assert!(rendered.contains("Name: Transverse Mercator"));
}

#[test]
fn parameter_list_edits() {
    let class = CoordinateOpMethod::default();
    let original = method(&["P1", "P2"]);
    let (on_change, seen) = capture();
    let form = class.edit_view(&original, Some(on_change), &ViewContext::detached());
    let list = form.control("Parameters").and_then(Control::as_related_list).expect("parameters");

    assert_eq!(list.ids(), ["P1", "P2"]);
    assert!(list.push(ItemRef::new("coordinate-op-method", "M1")).is_err());
    list.push(ItemRef::new("coordinate-op-parameter", "P3")).expect("parameter accepted");
    list.remove(0);
    list.reorder(1, 0);

    let seen = seen.borrow();
    assert_eq!(seen[0].parameters, vec!["P1", "P2", "P3"]);
    assert_eq!(seen[1].parameters, vec!["P2"]);
    assert_eq!(seen[2].parameters, vec!["P2", "P1"]);
    assert_eq!(original, method(&["P1", "P2"]));
}

#[test]
fn formula_is_a_multiline_field() {
    let class = CoordinateOpMethod::default();
    let (on_change, seen) = capture();
    let form = class.edit_view(&class.defaults(), Some(on_change), &ViewContext::detached());
    let formula = form.control("Formula").and_then(Control::as_text).expect("formula");

    assert!(formula.multiline);
    formula.input("E = FE + k0 * ν");
    assert_eq!(seen.borrow()[0].formula, "E = FE + k0 * ν");

    let read_only = class.edit_view(&class.defaults(), None, &ViewContext::detached());
    assert!(read_only.is_read_only());
}
