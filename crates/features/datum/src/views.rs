//! Datum presentations. Geodetic fields follow the shared datum fields.

use crate::data::DatumData;
use georeg_kernel::prelude::*;
use std::rc::Rc;

const SCOPE_HINT: &str = "Description of usage, or limitations of usage, for which this item is.";
const RELEASE_DATE_HINT: &str = "The date that the datum was released to the public. \
                                 The date may be precise or merely a year if not well-defined.";
const EPOCH_HINT: &str = "The epoch applying to defining coordinates.";
const ANCHOR_HINT: &str =
    "A description, possibly including coordinates of an identified point. A.k.a. “origin description”.";

const DATE_FORMAT: &str = "yyyy-mm-dd";
const EPOCH_FORMAT: &str = "yyyy.y";

pub fn datum_detail_view(item: &DatumData, cx: &ViewContext<'_>, slots: Vec<Node>) -> Vec<Node> {
    let epoch = fields::optional_display(cx, item.coordinate_reference_epoch.as_deref());
    let anchor = if item.origin_description.trim().is_empty() {
        cx.placeholder()
    } else {
        Node::Paragraph(item.origin_description.clone())
    };

    let mut nodes: Vec<Node> = vec![
        Property::new("Scope").child(fields::display(cx, &item.scope)).into(),
        Property::new("Publication Date").child(fields::display(cx, &item.release_date)).into(),
        Property::new("Coordinate reference epoch").child(epoch).into(),
        Property::new("Extent").child(Node::Extent(item.extent.clone())).into(),
        Property::new("Anchor definition").child(anchor).into(),
    ];
    nodes.extend(slots);
    common::detail_view(&item.common, cx, nodes)
}

pub fn datum_edit_view(
    item: &DatumData,
    on_change: Option<OnChange<DatumData>>,
    cx: &ViewContext<'_>,
    slots: Vec<Node>,
) -> Form {
    let rc = Rc::new(item.clone());
    let handler = on_change.as_ref();

    let mut nodes: Vec<Node> = vec![
        Property::new("Scope")
            .sub_label(SCOPE_HINT)
            .child(fields::required_text(cx, &item.scope, &rc, handler, |d, v| d.with_scope(v)))
            .into(),
        Property::new("Publication Date")
            .sub_label(RELEASE_DATE_HINT)
            .helper_text(DATE_FORMAT)
            .child(fields::formatted_text(cx, &item.release_date, DATE_FORMAT, &rc, handler, |d, v| {
                d.with_release_date(v)
            }))
            .into(),
        Property::new("Coordinate reference epoch")
            .sub_label(EPOCH_HINT)
            .helper_text(EPOCH_FORMAT)
            .child(fields::optional_text(
                cx,
                item.coordinate_reference_epoch.as_deref(),
                EPOCH_FORMAT,
                &rc,
                handler,
                DatumData::with_coordinate_reference_epoch,
            ))
            .into(),
        Property::new("Extent")
            .child(fields::extent(&item.extent, &rc, handler, DatumData::with_extent))
            .into(),
        Property::new("Anchor definition")
            .sub_label(ANCHOR_HINT)
            .child(fields::paragraph(cx, &item.origin_description, &rc, handler, |d, v| {
                d.with_origin_description(v)
            }))
            .into(),
    ];
    nodes.extend(slots);
    common::edit_view(&item.common, on_change.map(|oc| oc.lift(rc)), cx, nodes)
}
