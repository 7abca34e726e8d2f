//! Geographic applicability of an entity's definition.

use georeg_derive::item_model;

/// Bounding description an entity is valid for.
///
/// Edits never happen in place: every helper returns a new value.
#[item_model]
pub struct Extent {
    pub name: String,
    pub n: f64,
    pub e: f64,
    pub s: f64,
    pub w: f64,
}

/// Extent used whenever none was set.
pub const DEFAULT_EXTENT: Extent = Extent { name: String::new(), n: 0.0, e: 0.0, s: 0.0, w: 0.0 };

impl Default for Extent {
    fn default() -> Self {
        DEFAULT_EXTENT
    }
}

impl Extent {
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self.clone() }
    }

    /// Replaces the bounds, given as north, east, south and west.
    #[must_use]
    pub fn with_bounds(&self, n: f64, e: f64, s: f64, w: f64) -> Self {
        Self { name: self.name.clone(), n, e, s, w }
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == DEFAULT_EXTENT
    }

    /// Human-readable one-liner, e.g. `World: N 90, E 180, S -90, W -180`.
    #[must_use]
    pub fn summary(&self) -> String {
        let bounds = format!("N {}, E {}, S {}, W {}", self.n, self.e, self.s, self.w);
        if self.name.trim().is_empty() { bounds } else { format!("{}: {bounds}", self.name) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_leave_the_original_untouched() {
        let original = DEFAULT_EXTENT;
        let renamed = original.with_name("World");
        let bounded = renamed.with_bounds(90.0, 180.0, -90.0, -180.0);

        assert!(original.is_default());
        assert_eq!(renamed.name, "World");
        assert_eq!(renamed.n, 0.0);
        assert_eq!(bounded.summary(), "World: N 90, E 180, S -90, W -180");
    }

    #[test]
    fn partial_payloads_fall_back_to_default_extent() {
        let extent: Extent = serde_json::from_str(r#"{"n": 10.5}"#).unwrap();
        assert_eq!(extent.n, 10.5);
        assert_eq!(extent.name, "");
        assert_eq!(extent.with_bounds(0.0, 0.0, 0.0, 0.0), DEFAULT_EXTENT);
    }
}
