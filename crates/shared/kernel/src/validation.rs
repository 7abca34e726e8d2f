//! Payload checks applied before the host commits an item.

use crate::class::ItemData;
use georeg_domain::config::ValidationConfig;
use georeg_domain::{ClassSet, ItemRef};
use fxhash::FxHashSet;

/// One reference held by a payload, as seen by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefSlot {
    /// Persisted field name, e.g. `verticalCRS`.
    pub field: &'static str,
    /// Permitted target classes; `None` means unrestricted.
    pub targets: Option<ClassSet>,
    pub value: ItemRef,
}

impl RefSlot {
    #[must_use]
    pub const fn restricted(field: &'static str, targets: ClassSet, value: ItemRef) -> Self {
        Self { field, targets: Some(targets), value }
    }

    #[must_use]
    pub const fn unrestricted(field: &'static str, value: ItemRef) -> Self {
        Self { field, targets: None, value }
    }
}

/// Why a payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("`{field}` may not reference items of class `{class_id}`")]
    ForbiddenTarget { field: &'static str, class_id: String },

    #[error("`{field}` holds a reference without an item id")]
    BlankReference { field: &'static str },

    #[error("`{field}` references `{item_id}` more than once")]
    DuplicateReference { field: &'static str, item_id: String },
}

/// Which reference checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub enforce_reference_targets: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::from(&ValidationConfig::default())
    }
}

impl From<&ValidationConfig> for ValidationPolicy {
    fn from(config: &ValidationConfig) -> Self {
        Self { enforce_reference_targets: config.enforce_reference_targets }
    }
}

impl ValidationPolicy {
    /// Accepts every payload; the editor's candidate filtering is trusted.
    #[must_use]
    pub const fn permissive() -> Self {
        Self { enforce_reference_targets: false }
    }

    /// Every problem found in `item`, in field order. Empty means valid.
    #[must_use]
    pub fn check<T: ItemData>(self, item: &T) -> Vec<Violation> {
        if !self.enforce_reference_targets {
            return Vec::new();
        }

        let mut seen: FxHashSet<(&'static str, String)> = FxHashSet::default();
        let mut violations = Vec::new();

        for slot in item.references() {
            if slot.value.is_blank() {
                violations.push(Violation::BlankReference { field: slot.field });
                continue;
            }
            if let Some(targets) = slot.targets
                && !targets.admits(&slot.value.class_id)
            {
                violations.push(Violation::ForbiddenTarget {
                    field: slot.field,
                    class_id: slot.value.class_id.clone(),
                });
            }
            if !seen.insert((slot.field, slot.value.item_id.clone())) {
                violations.push(Violation::DuplicateReference {
                    field: slot.field,
                    item_id: slot.value.item_id,
                });
            }
        }

        violations
    }
}
