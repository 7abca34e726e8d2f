//! Presentations of the fields every entity carries.
//!
//! Class-specific builders pass their own nodes as `slots`; they are placed after the common
//! fields, so more specific layers always render below more general ones.

use crate::class::ListItem;
use crate::context::ViewContext;
use crate::update::OnChange;
use crate::view::{Form, Node, Property, fields};
use georeg_domain::CommonItemData;
use std::rc::Rc;

#[must_use]
pub fn list_item_view(item: &CommonItemData) -> ListItem {
    ListItem { identifier: item.identifier, name: item.name.clone() }
}

/// Detail rows for the common fields followed by `slots`.
///
/// Empty optional text (aliases, description, remarks) is left out of details.
pub fn detail_view(item: &CommonItemData, cx: &ViewContext<'_>, slots: Vec<Node>) -> Vec<Node> {
    let mut nodes: Vec<Node> = vec![
        Property::new("Identifier").child(Node::Text(item.identifier.to_string())).into(),
        Property::new("Name").child(fields::display(cx, &item.name)).into(),
    ];
    if !item.aliases.is_empty() {
        nodes.push(Property::new("Aliases").child(Node::Aliases(item.aliases.clone())).into());
    }
    if !item.description.trim().is_empty() {
        nodes.push(
            Property::new("Description").child(Node::Paragraph(item.description.clone())).into(),
        );
    }
    if !item.remarks.trim().is_empty() {
        nodes.push(Property::new("Remarks").child(Node::Paragraph(item.remarks.clone())).into());
    }
    nodes.extend(slots);
    nodes
}

/// Form fields for the common fields followed by `slots`.
pub fn edit_view(
    item: &CommonItemData,
    on_change: Option<OnChange<CommonItemData>>,
    cx: &ViewContext<'_>,
    slots: Vec<Node>,
) -> Form {
    let rc = Rc::new(item.clone());
    let on_change = on_change.as_ref();

    let mut nodes: Vec<Node> = vec![
        Property::new("Identifier")
            .child(fields::number(item.identifier, &rc, on_change, CommonItemData::with_identifier))
            .into(),
        Property::new("Name")
            .child(fields::required_text(cx, &item.name, &rc, on_change, |d, v| d.with_name(v)))
            .into(),
        Property::new("Aliases")
            .helper_text("Other names this item is known by")
            .child(fields::aliases(cx, &item.aliases, &rc, on_change, CommonItemData::with_aliases))
            .into(),
        Property::new("Description")
            .child(fields::paragraph(cx, &item.description, &rc, on_change, |d, v| {
                d.with_description(v)
            }))
            .into(),
        Property::new("Remarks")
            .child(fields::paragraph(cx, &item.remarks, &rc, on_change, |d, v| d.with_remarks(v)))
            .into(),
    ];
    nodes.extend(slots);
    Form::new(nodes)
}
