//! Toolkit-neutral presentation tree.
//!
//! Class definitions describe their list, detail and edit presentations as [`Node`] trees. A host
//! maps the tree onto whatever widgets it has; [`text::render`] is the plain-text mapping used by
//! the command-line host and tests.

mod controls;
pub mod fields;
pub mod text;

pub use controls::{AliasesInput, Control, ExtentInput, NumberInput, OptionalTextInput, TextInput};

use crate::relation::RelatedItemView;
use georeg_domain::Extent;
use std::borrow::Cow;

/// One element of a presentation.
#[derive(Debug)]
pub enum Node {
    /// Titled group (a labelled field in forms, a row in detail views).
    Property(Property),
    /// Short inline text.
    Text(String),
    /// Longer free-form text.
    Paragraph(String),
    /// Stands in for an absent or unavailable value.
    Placeholder(String),
    Aliases(Vec<String>),
    Extent(Extent),
    Related(RelatedItemView),
    /// Ordered list of child nodes.
    List(Vec<Node>),
    Control(Control),
}

#[derive(Debug)]
pub struct Property {
    pub title: Cow<'static, str>,
    pub sub_label: Option<Cow<'static, str>>,
    pub helper_text: Option<Cow<'static, str>>,
    pub body: Vec<Node>,
}

impl Property {
    pub fn new(title: impl Into<Cow<'static, str>>) -> Self {
        Self { title: title.into(), sub_label: None, helper_text: None, body: Vec::new() }
    }

    #[must_use]
    pub fn sub_label(mut self, sub_label: impl Into<Cow<'static, str>>) -> Self {
        self.sub_label = Some(sub_label.into());
        self
    }

    #[must_use]
    pub fn helper_text(mut self, helper_text: impl Into<Cow<'static, str>>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    #[must_use]
    pub fn child(mut self, node: Node) -> Self {
        self.body.push(node);
        self
    }

    /// First control directly or transitively inside this property.
    #[must_use]
    pub fn control(&self) -> Option<&Control> {
        let mut found = None;
        walk(&self.body, &mut |node| {
            if found.is_none()
                && let Node::Control(control) = node
            {
                found = Some(control);
            }
        });
        found
    }
}

impl From<Property> for Node {
    fn from(property: Property) -> Self {
        Self::Property(property)
    }
}

impl From<Control> for Node {
    fn from(control: Control) -> Self {
        Self::Control(control)
    }
}

/// The edit presentation of one item.
///
/// A form built without a change callback contains no [`Control`], so it is read-only.
#[derive(Debug, Default)]
pub struct Form {
    nodes: Vec<Node>,
}

impl Form {
    #[must_use]
    pub const fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Every control in document order.
    #[must_use]
    pub fn controls(&self) -> Vec<&Control> {
        let mut controls = Vec::new();
        walk(&self.nodes, &mut |node| {
            if let Node::Control(control) = node {
                controls.push(control);
            }
        });
        controls
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.controls().is_empty()
    }

    /// Titles of the top-level properties in display order.
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        titles(&self.nodes)
    }

    /// First property with the given title, searched depth-first.
    #[must_use]
    pub fn property(&self, title: &str) -> Option<&Property> {
        find_property(&self.nodes, title)
    }

    /// The control of the property with the given title.
    #[must_use]
    pub fn control(&self, title: &str) -> Option<&Control> {
        self.property(title).and_then(Property::control)
    }
}

/// Titles of the top-level properties in display order.
#[must_use]
pub fn titles(nodes: &[Node]) -> Vec<&str> {
    nodes
        .iter()
        .filter_map(|node| match node {
            Node::Property(property) => Some(property.title.as_ref()),
            _ => None,
        })
        .collect()
}

/// First property with the given title, searched depth-first.
#[must_use]
pub fn find_property<'a>(nodes: &'a [Node], title: &str) -> Option<&'a Property> {
    let mut found = None;
    walk(nodes, &mut |node| {
        if found.is_none()
            && let Node::Property(property) = node
            && property.title == title
        {
            found = Some(property);
        }
    });
    found
}

/// Visits every node depth-first, parents before children.
///
/// Nested previews of related items are not entered: they describe other items.
pub fn walk<'a>(nodes: &'a [Node], visit: &mut impl FnMut(&'a Node)) {
    for node in nodes {
        visit(node);
        match node {
            Node::Property(property) => walk(&property.body, visit),
            Node::List(children) => walk(children, visit),
            _ => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::OnChange;
    use std::rc::Rc;

    #[test]
    fn controls_are_found_inside_properties() {
        let on_change = OnChange::new(|_: String| {});
        let item = Rc::new(String::new());
        let form = Form::new(vec![
            Property::new("Name")
                .child(Control::Text(TextInput::new("", on_change.field(&item, |_, v| v))).into())
                .into(),
            Property::new("Remarks").child(Node::Paragraph("none".to_owned())).into(),
        ]);

        assert_eq!(form.titles(), vec!["Name", "Remarks"]);
        assert_eq!(form.controls().len(), 1);
        assert!(form.control("Name").and_then(Control::as_text).is_some());
        assert!(form.control("Remarks").is_none());
        assert!(!form.is_read_only());
    }
}
