//! Plain-text rendering of presentation trees.
//!
//! One property per line, nested content indented by two spaces. Controls render their current
//! value in brackets.

use super::{Control, Node, Property};
use crate::relation::{Preview, RelatedItemView};

const INDENT: &str = "  ";

/// Renders `nodes` as indented text lines.
#[must_use]
pub fn render(nodes: &[Node]) -> String {
    let mut out = Renderer::default();
    out.nodes(nodes, 0);
    out.buf
}

#[derive(Default)]
struct Renderer {
    buf: String,
}

impl Renderer {
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn nodes(&mut self, nodes: &[Node], depth: usize) {
        for node in nodes {
            self.node(node, depth);
        }
    }

    fn node(&mut self, node: &Node, depth: usize) {
        if let Some(text) = inline(node) {
            self.line(depth, &text);
            return;
        }
        match node {
            Node::Property(property) => self.property(property, depth),
            Node::Paragraph(text) => {
                for line in text.lines() {
                    self.line(depth, line);
                }
            },
            Node::Related(view) => self.related(view, depth, false),
            Node::List(children) => self.nodes(children, depth),
            Node::Control(Control::Related(control)) => self.related(control.view(), depth, true),
            Node::Control(Control::RelatedList(control)) => {
                for view in &control.items {
                    self.related(view, depth, true);
                }
            },
            _ => {},
        }
    }

    fn property(&mut self, property: &Property, depth: usize) {
        let title = match &property.sub_label {
            Some(sub_label) => format!("{} ({sub_label})", property.title),
            None => property.title.to_string(),
        };

        if let [single] = property.body.as_slice()
            && let Some(value) = inline(single)
        {
            self.line(depth, &format!("{title}: {value}"));
            return;
        }
        self.line(depth, &format!("{title}:"));
        self.nodes(&property.body, depth + 1);
    }

    fn related(&mut self, view: &RelatedItemView, depth: usize, editable: bool) {
        let label = related_label(view);
        self.line(depth, &if editable { format!("[{label}]") } else { label });
        if let Preview::Resolved { details, .. } = &view.preview {
            self.nodes(details, depth + 1);
        }
    }
}

/// Single-line rendering, when the node has one.
fn inline(node: &Node) -> Option<String> {
    match node {
        Node::Text(text) | Node::Placeholder(text) => Some(text.clone()),
        Node::Aliases(aliases) => Some(aliases.join(", ")),
        Node::Extent(extent) => Some(extent.summary()),
        Node::Related(view) if !has_details(view) => Some(related_label(view)),
        Node::Control(control) => inline_control(control),
        Node::Property(_) | Node::Paragraph(_) | Node::Related(_) | Node::List(_) => None,
    }
}

fn inline_control(control: &Control) -> Option<String> {
    let value = match control {
        Control::Text(input) if input.multiline => return None,
        Control::Text(input) => input.value.clone(),
        Control::Number(input) => input.value.to_string(),
        Control::OptionalText(input) => input.value.clone().unwrap_or_else(|| "n/a".to_owned()),
        Control::Extent(input) => input.value.summary(),
        Control::Aliases(input) => input.values.join(", "),
        Control::Related(control) if !has_details(control.view()) => related_label(control.view()),
        Control::RelatedList(control) if control.items.is_empty() => String::new(),
        Control::Related(_) | Control::RelatedList(_) => return None,
    };
    Some(format!("[{value}]"))
}

fn has_details(view: &RelatedItemView) -> bool {
    matches!(&view.preview, Preview::Resolved { details, .. } if !details.is_empty())
}

fn related_label(view: &RelatedItemView) -> String {
    match &view.preview {
        Preview::Unspecified => view.placeholder.clone(),
        Preview::Pending(item_ref) => format!("{item_ref} (loading)"),
        Preview::Missing(item_ref) => format!("{} ({item_ref} not found)", view.placeholder),
        Preview::Id(item_ref) if item_ref.item_id.trim().is_empty() => view.placeholder.clone(),
        Preview::Id(item_ref) => item_ref.item_id.clone(),
        Preview::Resolved { class_title: Some(title), label, .. } => format!("{title}: {label}"),
        Preview::Resolved { label, .. } => label.clone(),
    }
}
