//! Layered CRS presentations.
//!
//! Each builder renders its own fields after the more general layer's fields and appends the
//! caller's `slots` last.

use crate::data::{CrsData, NonCompoundCrsData};
use georeg_kernel::domain::classes::COORDINATE_SYSTEM_TARGETS;
use georeg_kernel::prelude::*;
use std::rc::Rc;

const SCOPE_HINT: &str = "Description of usage, or limitations of usage, for which this CRS is valid.";

pub fn crs_detail_view(item: &CrsData, cx: &ViewContext<'_>, slots: Vec<Node>) -> Vec<Node> {
    let mut nodes: Vec<Node> = vec![
        Property::new("Scope").child(fields::display(cx, &item.scope)).into(),
        Property::new("Extent").child(Node::Extent(item.extent.clone())).into(),
    ];
    nodes.extend(slots);
    common::detail_view(&item.common, cx, nodes)
}

pub fn crs_edit_view(
    item: &CrsData,
    on_change: Option<OnChange<CrsData>>,
    cx: &ViewContext<'_>,
    slots: Vec<Node>,
) -> Form {
    let rc = Rc::new(item.clone());
    let handler = on_change.as_ref();

    let mut nodes: Vec<Node> = vec![
        Property::new("Scope")
            .sub_label(SCOPE_HINT)
            .child(fields::text(cx, &item.scope, &rc, handler, |d, v| d.with_scope(v)))
            .into(),
        Property::new("Extent")
            .child(fields::extent(&item.extent, &rc, handler, CrsData::with_extent))
            .into(),
    ];
    nodes.extend(slots);
    common::edit_view(&item.common, on_change.map(|oc| oc.lift(rc)), cx, nodes)
}

pub fn non_compound_detail_view(
    item: &NonCompoundCrsData,
    cx: &ViewContext<'_>,
    slots: Vec<Node>,
) -> Vec<Node> {
    let coordinate_system =
        RelatedItem::generic(item.coordinate_system.clone(), COORDINATE_SYSTEM_TARGETS).view(cx);
    let base_crs = RelatedItem::unrestricted(item.base_crs.clone()).view(cx);
    let operation = RelatedItem::unrestricted(item.operation.clone()).view(cx);

    let mut nodes: Vec<Node> = vec![
        Property::new("Coordinate system").child(Node::Related(coordinate_system)).into(),
        Property::new("Base CRS").child(Node::Related(base_crs)).into(),
        Property::new("Operation").child(Node::Related(operation)).into(),
    ];
    nodes.extend(slots);
    crs_detail_view(&item.crs, cx, nodes)
}

pub fn non_compound_edit_view(
    item: &NonCompoundCrsData,
    on_change: Option<OnChange<NonCompoundCrsData>>,
    cx: &ViewContext<'_>,
    slots: Vec<Node>,
) -> Form {
    let rc = Rc::new(item.clone());
    let handler = on_change.as_ref();

    let coordinate_system = RelatedItem::generic(
        item.coordinate_system.clone(),
        COORDINATE_SYSTEM_TARGETS,
    )
    .render(
        cx,
        &rc,
        handler,
        NonCompoundCrsData::with_coordinate_system,
        NonCompoundCrsData::without_coordinate_system,
    );
    let base_crs = RelatedItem::unrestricted(item.base_crs.clone()).render(
        cx,
        &rc,
        handler,
        NonCompoundCrsData::with_base_crs,
        NonCompoundCrsData::without_base_crs,
    );
    let operation = RelatedItem::unrestricted(item.operation.clone()).render(
        cx,
        &rc,
        handler,
        NonCompoundCrsData::with_operation,
        NonCompoundCrsData::without_operation,
    );

    let mut nodes: Vec<Node> = vec![
        Property::new("Coordinate system").child(coordinate_system).into(),
        Property::new("Base CRS").child(base_crs).into(),
        Property::new("Operation")
            .helper_text("Conversion or transformation from the base CRS")
            .child(operation)
            .into(),
    ];
    nodes.extend(slots);
    crs_edit_view(&item.crs, on_change.map(|oc| oc.lift(rc)), cx, nodes)
}
