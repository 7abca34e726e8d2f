use crate::relation::{RelatedItemControl, RelatedListControl};
use crate::update::Handler;
use georeg_domain::Extent;
use std::fmt;

/// An editable element of a form.
///
/// Only controls carry mutation entry points, and controls only exist in trees built with a
/// change callback. A read-only tree therefore cannot be edited through any of its nodes.
#[derive(Debug)]
pub enum Control {
    Text(TextInput),
    Number(NumberInput),
    OptionalText(OptionalTextInput),
    Extent(ExtentInput),
    Aliases(AliasesInput),
    Related(RelatedItemControl),
    RelatedList(RelatedListControl),
}

impl Control {
    #[must_use]
    pub const fn as_text(&self) -> Option<&TextInput> {
        if let Self::Text(input) = self { Some(input) } else { None }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<&NumberInput> {
        if let Self::Number(input) = self { Some(input) } else { None }
    }

    #[must_use]
    pub const fn as_optional_text(&self) -> Option<&OptionalTextInput> {
        if let Self::OptionalText(input) = self { Some(input) } else { None }
    }

    #[must_use]
    pub const fn as_extent(&self) -> Option<&ExtentInput> {
        if let Self::Extent(input) = self { Some(input) } else { None }
    }

    #[must_use]
    pub const fn as_aliases(&self) -> Option<&AliasesInput> {
        if let Self::Aliases(input) = self { Some(input) } else { None }
    }

    #[must_use]
    pub const fn as_related(&self) -> Option<&RelatedItemControl> {
        if let Self::Related(control) = self { Some(control) } else { None }
    }

    #[must_use]
    pub const fn as_related_list(&self) -> Option<&RelatedListControl> {
        if let Self::RelatedList(control) = self { Some(control) } else { None }
    }
}

/// Single or multi-line text.
pub struct TextInput {
    pub value: String,
    pub multiline: bool,
    pub required: bool,
    pub placeholder: Option<&'static str>,
    on_input: Handler<String>,
}

impl TextInput {
    pub fn new(value: impl Into<String>, on_input: Handler<String>) -> Self {
        Self { value: value.into(), multiline: false, required: false, placeholder: None, on_input }
    }

    #[must_use]
    pub const fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Format hint shown while the input is empty, e.g. `yyyy-mm-dd`.
    #[must_use]
    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn input(&self, value: impl Into<String>) {
        (self.on_input)(value.into());
    }
}

/// Non-negative integer input.
pub struct NumberInput {
    pub value: u64,
    on_input: Handler<u64>,
}

impl NumberInput {
    pub fn new(value: u64, on_input: Handler<u64>) -> Self {
        Self { value, on_input }
    }

    pub fn input(&self, value: u64) {
        (self.on_input)(value);
    }
}

/// Text that may also be marked as not applicable (`None`), distinct from an empty string.
pub struct OptionalTextInput {
    pub value: Option<String>,
    pub placeholder: Option<&'static str>,
    on_input: Handler<Option<String>>,
}

impl OptionalTextInput {
    pub fn new(value: Option<String>, on_input: Handler<Option<String>>) -> Self {
        Self { value, placeholder: None, on_input }
    }

    #[must_use]
    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn input(&self, value: impl Into<String>) {
        (self.on_input)(Some(value.into()));
    }

    pub fn mark_not_applicable(&self) {
        (self.on_input)(None);
    }
}

/// Extent editor; every method emits a complete new extent.
pub struct ExtentInput {
    pub value: Extent,
    on_input: Handler<Extent>,
}

impl ExtentInput {
    pub fn new(value: Extent, on_input: Handler<Extent>) -> Self {
        Self { value, on_input }
    }

    pub fn input(&self, extent: Extent) {
        (self.on_input)(extent);
    }

    pub fn rename(&self, name: impl Into<String>) {
        self.input(self.value.with_name(name));
    }

    pub fn set_bounds(&self, n: f64, e: f64, s: f64, w: f64) {
        self.input(self.value.with_bounds(n, e, s, w));
    }
}

/// Editable list of alternative names.
pub struct AliasesInput {
    pub values: Vec<String>,
    on_input: Handler<Vec<String>>,
}

impl AliasesInput {
    pub fn new(values: Vec<String>, on_input: Handler<Vec<String>>) -> Self {
        Self { values, on_input }
    }

    pub fn add(&self, alias: impl Into<String>) {
        let mut values = self.values.clone();
        values.push(alias.into());
        (self.on_input)(values);
    }

    /// Out-of-range indices are ignored.
    pub fn replace(&self, index: usize, alias: impl Into<String>) {
        if index < self.values.len() {
            let mut values = self.values.clone();
            values[index] = alias.into();
            (self.on_input)(values);
        }
    }

    /// Out-of-range indices are ignored.
    pub fn remove(&self, index: usize) {
        if index < self.values.len() {
            let mut values = self.values.clone();
            values.remove(index);
            (self.on_input)(values);
        }
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("value", &self.value)
            .field("multiline", &self.multiline)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for NumberInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberInput").field("value", &self.value).finish_non_exhaustive()
    }
}

impl fmt::Debug for OptionalTextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionalTextInput").field("value", &self.value).finish_non_exhaustive()
    }
}

impl fmt::Debug for ExtentInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtentInput").field("value", &self.value).finish_non_exhaustive()
    }
}

impl fmt::Debug for AliasesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AliasesInput").field("values", &self.values).finish_non_exhaustive()
    }
}
