#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the registry crates.
//!
//! * [`item_model`] turns a plain struct into a persisted registry payload (serde derives,
//!   camelCase keys, defaults for partially populated items).
//! * [`georeg_error`] turns an enum into a context-aware error type.
//!
//! Examples below are `ignore`d because they would need the consuming crates' dependencies;
//! the integration tests under `tests/` exercise both macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for registry item payloads.
///
/// Every persisted item shape in the registry is a plain field mapping. This macro keeps
/// those shapes consistent.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Clone`, `PartialEq`, `Serialize` and `Deserialize` unless already
///   derived.
/// * **Serde Policy**:
///     * `rename_all = "camelCase"` by default (can be overridden).
///     * `default` on the container, so missing keys are filled from the type's `Default`
///       implementation (can be disabled for value types that have no sensible default).
///
/// # Arguments
///
/// * `rename_all = "snake_case"` - Overrides the default rename policy.
/// * `default = false` - Does not inject the container-level `#[serde(default)]`.
///
/// # Example
///
/// ```rust,ignore
/// use georeg_derive::item_model;
///
/// #[item_model]
/// pub struct AxisData {
///     pub abbreviation: String,
///     pub unit_of_measurement: Option<String>,
/// }
///
/// impl Default for AxisData { /* class defaults */ }
/// ```
#[proc_macro_attribute]
pub fn item_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::model::expand_item_model(attr.into(), input).into()
}

/// Attribute macro for crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(...)`
///   to any `Result` whose error converts into this enum.
/// * **Source Conversions**: Implements `From<T>` for variants carrying a `source` field (or a
///   field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
/// * **Formatting Helper**: A private `format_context` function for `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. A variant with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use georeg_derive::georeg_error;
/// use std::borrow::Cow;
///
/// #[georeg_error]
/// pub enum ClassError {
///     #[error("Payload decode error{}: {source}", format_context(.context))]
///     Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal class error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn decode(raw: &str) -> Result<Payload, ClassError> {
///     serde_json::from_str(raw).context("Decoding stored item")
/// }
/// ```
#[proc_macro_attribute]
pub fn georeg_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_error(input).into()
}
