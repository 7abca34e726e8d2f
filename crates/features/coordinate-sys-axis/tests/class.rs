use georeg_coordinate_sys_axis::*;
use georeg_kernel::prelude::*;
use georeg_kernel::view::text;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

struct Units;

impl RegisterItemData for Units {
    fn item_data(&self, item_ref: &ItemRef) -> ItemDataState {
        match (item_ref.class_id.as_str(), item_ref.item_id.as_str()) {
            ("unit-of-measurement", "U9001") => ItemDataState::Ready(json!({ "name": "metre" })),
            _ => ItemDataState::Missing,
        }
    }
}

fn easting() -> CoordinateSysAxisData {
    CoordinateSysAxisData {
        common: CommonItemData::default().with_name("Easting"),
        abbreviation: "E".to_owned(),
        orientation: "east".to_owned(),
        unit_of_measurement: Some("U9001".into()),
    }
}

#[tokio::test]
async fn defaults_are_valid() {
    let class = CoordinateSysAxis::default();
    let defaults = class.defaults();

    assert_eq!(defaults.unit_id(), Some(""));
    assert_eq!(defaults.abbreviation, "");
    assert!(class.validate_payload(&defaults).await);
    assert!(class.validate_payload(&easting()).await);
}

#[tokio::test]
async fn unit_accepts_legacy_descriptors() {
    let class = CoordinateSysAxis::default();
    let axis: CoordinateSysAxisData = serde_json::from_value(json!({
        "name": "Easting",
        "unitOfMeasurement": { "classID": "unit-of-measurement", "itemID": "U9001" }
    }))
    .expect("decodes");

    assert_eq!(axis.unit_id(), Some("U9001"));
    assert!(class.validate_payload(&axis).await);

    let clean = class.sanitize_payload(axis).await;
    assert_eq!(serde_json::to_value(&clean).expect("encodes")["unitOfMeasurement"], "U9001");
}

#[test]
fn detail_view_previews_the_unit() {
    let registry = ClassRegistry::new();
    let cx = ViewContext::new(&Units, &registry);
    let rendered = text::render(&CoordinateSysAxis::default().detail_view(&easting(), &cx));

    assert!(rendered.contains("Abbreviation: E\n"));
    assert!(rendered.contains("Orientation: east\n"));
    assert!(rendered.contains("Unit of measurement: metre\n"));
}

#[test]
fn blank_unit_shows_placeholder() {
    let axis = CoordinateSysAxis::default();
    let rendered = text::render(&axis.detail_view(&axis.defaults(), &ViewContext::detached()));

    assert!(rendered.contains("Abbreviation: —\n"));
    assert!(rendered.contains("Unit of measurement: —\n"));
}

#[test]
fn edit_view_covers_axis_fields() {
    let class = CoordinateSysAxis::default();
    let original = easting();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let form = class.edit_view(
        &original,
        Some(OnChange::new(move |axis| sink.borrow_mut().push(axis))),
        &ViewContext::detached(),
    );

    assert_eq!(form.titles()[5..], ["Abbreviation", "Orientation", "Unit of measurement"]);

    assert!(!form.is_read_only());
    form.control("Orientation").and_then(Control::as_text).expect("orientation").input("north");
    let unit = form.control("Unit of measurement").and_then(Control::as_related).expect("unit");
    assert_eq!(unit.candidates().collect::<Vec<_>>(), vec!["unit-of-measurement"]);
    unit.clear();
    unit.set(ItemRef::new("unit-of-measurement", "U9001")).expect("unit accepted");

    let seen = seen.borrow();
    assert_eq!(seen[0].orientation, "north");
    assert_eq!(seen[1].unit_of_measurement, None);
    assert_eq!(seen[2], original);
}

#[test]
fn read_only_edit_view_has_no_controls() {
    let class = CoordinateSysAxis::default();
    let form = class.edit_view(&easting(), None, &ViewContext::detached());

    assert!(form.is_read_only());
    assert_eq!(form.titles()[5..], ["Abbreviation", "Orientation", "Unit of measurement"]);
}

#[tokio::test]
async fn legacy_unit_of_another_class_is_rejected_and_kept() {
    let class = CoordinateSysAxis::default();
    let item: CoordinateSysAxisData = serde_json::from_value(json!({
        "unitOfMeasurement": { "classID": "ellipsoid", "itemID": "E7030" }
    }))
    .expect("decodes");

    assert_eq!(item.unit_ref(), Some(ItemRef::new("ellipsoid", "E7030")));
    assert_eq!(
        class.diagnose(&item),
        vec![Violation::ForbiddenTarget { field: "unitOfMeasurement", class_id: "ellipsoid".to_owned() }]
    );
    assert!(!class.validate_payload(&item).await);

    let clean = class.sanitize_payload(item).await;
    assert_eq!(
        serde_json::to_value(&clean).expect("encodes")["unitOfMeasurement"],
        json!({ "classID": "ellipsoid", "itemID": "E7030" })
    );
}

#[tokio::test]
async fn sanitize_trims_axis_fields() {
    let class = CoordinateSysAxis::default();
    let clean = class.sanitize_payload(CoordinateSysAxisData {
        abbreviation: " h ".to_owned(),
        unit_of_measurement: Some(" U9001 ".into()),
        ..CoordinateSysAxisData::default()
    })
    .await;
    assert_eq!(clean.abbreviation, "h");
    assert_eq!(clean.unit_id(), Some("U9001"));
    assert_eq!(class.sanitize_payload(clean.clone()).await, clean);
}
