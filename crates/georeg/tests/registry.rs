use georeg::domain::config::RegistryConfig;
use georeg::kernel::context::ViewContext;
use georeg::kernel::update::OnChange;
use georeg::kernel::view::{Control, text};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::rc::Rc;

const CLASS_IDS: &[&str] = &[
    "coordinate-op-method",
    "coordinate-sys-axis",
    "crs--compound",
    "crs--engineering",
    "crs--geodetic",
    "crs--projected",
    "crs--vertical",
    "datums--engineering",
    "datums--geodetic",
    "datums--vertical",
];

#[test]
fn registers_every_class_once() {
    let registry = georeg::registry(&RegistryConfig::default()).expect("registry builds");
    let ids: Vec<_> = registry.classes().map(|class| class.meta().id).collect();
    assert_eq!(ids, CLASS_IDS);

    let mut again = registry.clone();
    assert!(georeg::features::crs::register(&mut again, Default::default()).is_err());
}

#[tokio::test]
async fn defaults_validate_through_the_erased_surface() {
    let registry = georeg::registry(&RegistryConfig::default()).expect("registry builds");
    for class in registry.classes() {
        let defaults = class.defaults().expect("defaults encode");
        assert!(class.validate_payload(&defaults).await, "{} defaults", class.meta().id);
    }
}

#[test]
fn every_read_only_edit_view_is_free_of_controls() {
    let registry = georeg::registry(&RegistryConfig::default()).expect("registry builds");
    let cx = ViewContext::detached();
    for class in registry.classes() {
        let defaults = class.defaults().expect("defaults encode");
        let form = class.edit_view(&defaults, None, &cx).expect("defaults decode");
        assert!(form.is_read_only(), "{} read-only form", class.meta().id);
        assert!(!form.titles().is_empty(), "{} has fields", class.meta().id);
    }
}

#[tokio::test]
async fn sanitize_keeps_unmodelled_keys() {
    let registry = georeg::registry(&RegistryConfig::default()).expect("registry builds");
    let vertical = registry.require("crs--vertical").expect("known");
    let sources = json!([{ "title": "NGS", "pages": [1, 2] }]);

    let clean = vertical
        .sanitize_payload(json!({ "name": " NAVD88 ", "datum": "D1", "informationSources": sources }))
        .await;

    assert_eq!(clean["name"], "NAVD88");
    assert_eq!(clean["datum"], "D1");
    assert_eq!(clean["informationSources"], sources);
}

#[test]
fn edit_replacements_keep_unmodelled_keys() {
    let registry = georeg::registry(&RegistryConfig::default()).expect("registry builds");
    let vertical = registry.require("crs--vertical").expect("known");
    let item = json!({ "name": "NAVD88", "datum": "D1", "informationSources": ["NGS"] });

    let seen: Rc<RefCell<Vec<Value>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let form = vertical
        .edit_view(
            &item,
            Some(OnChange::new(move |value| sink.borrow_mut().push(value))),
            &ViewContext::detached(),
        )
        .expect("decodes");
    form.control("Scope").and_then(Control::as_text).expect("scope").input("Levelling");

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0]["scope"], "Levelling");
    assert_eq!(seen[0]["name"], "NAVD88");
    assert_eq!(seen[0]["informationSources"], json!(["NGS"]));
}

#[tokio::test]
async fn validation_follows_configuration() {
    let compound = json!({ "verticalCRS": { "classID": "crs--projected", "itemID": "P1" } });

    let strict = georeg::registry(&RegistryConfig::default()).expect("registry builds");
    assert!(!strict.require("crs--compound").expect("known").validate_payload(&compound).await);

    let mut config = RegistryConfig::default();
    config.validation.enforce_reference_targets = false;
    let lenient = georeg::registry(&config).expect("registry builds");
    assert!(lenient.require("crs--compound").expect("known").validate_payload(&compound).await);
}

#[test]
fn nested_previews_use_registered_classes() {
    let registry = georeg::registry(&RegistryConfig::default()).expect("registry builds");
    let store = Datums;
    let cx = ViewContext::new(&store, &registry);
    let crs = registry.require("crs--geodetic").expect("known");

    let nodes = crs
        .detail_view(&json!({ "name": "WGS 84", "datum": "D6326" }), &cx)
        .expect("decodes");
    let rendered = text::render(&nodes);
    assert!(rendered.contains("Datum (geodetic): D6326"));

    let compound = registry.require("crs--compound").expect("known");
    let nodes = compound
        .detail_view(
            &json!({ "name": "WGS 84 + EGM96", "horizontalCRS": { "classID": "crs--geodetic", "itemID": "G1" } }),
            &cx,
        )
        .expect("decodes");
    let rendered = text::render(&nodes);
    assert!(rendered.contains("Horizontal CRS:\n  Geodetic CRS: WGS 84 (4326)\n"));
}

struct Datums;

impl georeg::kernel::context::RegisterItemData for Datums {
    fn item_data(
        &self,
        item_ref: &georeg::domain::ItemRef,
    ) -> georeg::kernel::context::ItemDataState {
        use georeg::kernel::context::ItemDataState;
        match item_ref.item_id.as_str() {
            "G1" => ItemDataState::Ready(json!({ "identifier": 4326, "name": "WGS 84", "datum": "D6326" })),
            _ => ItemDataState::Missing,
        }
    }
}
