//! Field builders shared by every class.
//!
//! Each builder renders a plain node when no change callback is given and an input control
//! otherwise. The `set` function receives the rendered item and the new field value and returns
//! the replacement item.

use super::{AliasesInput, Control, ExtentInput, Node, NumberInput, OptionalTextInput, TextInput};
use crate::context::ViewContext;
use crate::update::OnChange;
use georeg_domain::Extent;
use std::rc::Rc;

/// Read-only rendering of a value marked as not applicable.
pub const NOT_APPLICABLE: &str = "not applicable";

/// Single-line text; empty values render as the placeholder.
pub fn text<T: 'static>(
    cx: &ViewContext<'_>,
    value: &str,
    item: &Rc<T>,
    on_change: Option<&OnChange<T>>,
    set: impl Fn(&T, String) -> T + 'static,
) -> Node {
    match on_change {
        Some(on_change) => Control::Text(TextInput::new(value, on_change.field(item, set))).into(),
        None => display(cx, value),
    }
}

/// Required single-line text, such as a name.
pub fn required_text<T: 'static>(
    cx: &ViewContext<'_>,
    value: &str,
    item: &Rc<T>,
    on_change: Option<&OnChange<T>>,
    set: impl Fn(&T, String) -> T + 'static,
) -> Node {
    match on_change {
        Some(on_change) => {
            Control::Text(TextInput::new(value, on_change.field(item, set)).required()).into()
        },
        None => display(cx, value),
    }
}

/// Single-line text with a format hint, such as a date.
pub fn formatted_text<T: 'static>(
    cx: &ViewContext<'_>,
    value: &str,
    format: &'static str,
    item: &Rc<T>,
    on_change: Option<&OnChange<T>>,
    set: impl Fn(&T, String) -> T + 'static,
) -> Node {
    match on_change {
        Some(on_change) => Control::Text(
            TextInput::new(value, on_change.field(item, set)).with_placeholder(format),
        )
        .into(),
        None => display(cx, value),
    }
}

/// Multi-line text.
pub fn paragraph<T: 'static>(
    cx: &ViewContext<'_>,
    value: &str,
    item: &Rc<T>,
    on_change: Option<&OnChange<T>>,
    set: impl Fn(&T, String) -> T + 'static,
) -> Node {
    match on_change {
        Some(on_change) => {
            Control::Text(TextInput::new(value, on_change.field(item, set)).multiline()).into()
        },
        None if value.trim().is_empty() => cx.placeholder(),
        None => Node::Paragraph(value.to_owned()),
    }
}

/// Text that may be explicitly not applicable. `None` and `Some("")` stay distinct.
pub fn optional_text<T: 'static>(
    cx: &ViewContext<'_>,
    value: Option<&str>,
    format: &'static str,
    item: &Rc<T>,
    on_change: Option<&OnChange<T>>,
    set: impl Fn(&T, Option<String>) -> T + 'static,
) -> Node {
    match on_change {
        Some(on_change) => Control::OptionalText(
            OptionalTextInput::new(value.map(str::to_owned), on_change.field(item, set))
                .with_placeholder(format),
        )
        .into(),
        None => optional_display(cx, value),
    }
}

/// Read-only optional text: `None` reads as [`NOT_APPLICABLE`], blank text as the placeholder.
pub fn optional_display(cx: &ViewContext<'_>, value: Option<&str>) -> Node {
    value.map_or_else(|| Node::Text(NOT_APPLICABLE.to_owned()), |value| display(cx, value))
}

pub fn number<T: 'static>(
    value: u64,
    item: &Rc<T>,
    on_change: Option<&OnChange<T>>,
    set: impl Fn(&T, u64) -> T + 'static,
) -> Node {
    match on_change {
        Some(on_change) => Control::Number(NumberInput::new(value, on_change.field(item, set))).into(),
        None => Node::Text(value.to_string()),
    }
}

pub fn extent<T: 'static>(
    value: &Extent,
    item: &Rc<T>,
    on_change: Option<&OnChange<T>>,
    set: impl Fn(&T, Extent) -> T + 'static,
) -> Node {
    match on_change {
        Some(on_change) => {
            Control::Extent(ExtentInput::new(value.clone(), on_change.field(item, set))).into()
        },
        None => Node::Extent(value.clone()),
    }
}

pub fn aliases<T: 'static>(
    cx: &ViewContext<'_>,
    values: &[String],
    item: &Rc<T>,
    on_change: Option<&OnChange<T>>,
    set: impl Fn(&T, Vec<String>) -> T + 'static,
) -> Node {
    match on_change {
        Some(on_change) => {
            Control::Aliases(AliasesInput::new(values.to_vec(), on_change.field(item, set))).into()
        },
        None if values.is_empty() => cx.placeholder(),
        None => Node::Aliases(values.to_vec()),
    }
}

/// Read-only text; empty values render as the placeholder.
pub fn display(cx: &ViewContext<'_>, value: &str) -> Node {
    if value.trim().is_empty() { cx.placeholder() } else { Node::Text(value.to_owned()) }
}
