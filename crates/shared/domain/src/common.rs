//! Fields every registry entity carries.

use georeg_derive::item_model;
use serde_json::{Map, Value};

/// Shared entity fields: identifier, name, aliases and free-form text.
///
/// Alias order carries no meaning. Keys no class models (host bookkeeping such as
/// `informationSources`) are kept in `extra` and written back unchanged.
#[item_model]
#[derive(Default, Eq)]
pub struct CommonItemData {
    pub identifier: u64,
    pub name: String,
    pub aliases: Vec<String>,
    pub description: String,
    pub remarks: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CommonItemData {
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self.clone() }
    }

    #[must_use]
    pub fn with_identifier(&self, identifier: u64) -> Self {
        Self { identifier, ..self.clone() }
    }

    #[must_use]
    pub fn with_aliases(&self, aliases: Vec<String>) -> Self {
        Self { aliases, ..self.clone() }
    }

    #[must_use]
    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self { description: description.into(), ..self.clone() }
    }

    #[must_use]
    pub fn with_remarks(&self, remarks: impl Into<String>) -> Self {
        Self { remarks: remarks.into(), ..self.clone() }
    }

    /// Trims text and drops blank or repeated aliases (first occurrence wins).
    #[must_use]
    pub fn sanitized(self) -> Self {
        let mut aliases: Vec<String> = Vec::with_capacity(self.aliases.len());
        for alias in self.aliases.iter().map(|a| a.trim()).filter(|a| !a.is_empty()) {
            if !aliases.iter().any(|seen| seen == alias) {
                aliases.push(alias.to_owned());
            }
        }

        Self {
            identifier: self.identifier,
            name: self.name.trim().to_owned(),
            aliases,
            description: self.description,
            remarks: self.remarks,
            extra: self.extra,
        }
    }
}
