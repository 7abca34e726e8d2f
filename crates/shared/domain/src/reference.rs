//! Reference descriptors: typed pointers to other registry items.
//!
//! A reference is a relationship, never ownership. "Not specified" is modelled by leaving the
//! field out (`None`), not by a descriptor with empty parts.

use georeg_derive::item_model;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies another registry item by its class and id.
#[item_model(default = false)]
#[derive(Eq, Hash, PartialOrd, Ord)]
pub struct ItemRef {
    #[serde(rename = "classID")]
    pub class_id: String,
    #[serde(rename = "itemID")]
    pub item_id: String,
}

impl ItemRef {
    pub fn new(class_id: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self { class_id: class_id.into(), item_id: item_id.into() }
    }

    /// A descriptor whose item id is blank points nowhere.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.item_id.trim().is_empty()
    }

    /// Copy with surrounding whitespace removed from both parts.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self::new(self.class_id.trim(), self.item_id.trim())
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.class_id, self.item_id)
    }
}

/// Drops blank descriptors and trims the rest.
#[must_use]
pub fn normalize_ref(item_ref: Option<ItemRef>) -> Option<ItemRef> {
    item_ref.map(|r| r.trimmed()).filter(|r| !r.is_blank())
}

/// Value of an id-mode reference field.
///
/// Id-mode fields store only the item id because the target class is fixed by the field.
/// Older payloads stored the whole descriptor; that shape is kept as decoded, class included,
/// so a descriptor of the wrong class is still visible to validation and is never re-targeted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdRef {
    Id(String),
    Ref(ItemRef),
}

impl IdRef {
    #[must_use]
    pub fn item_id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Ref(item_ref) => &item_ref.item_id,
        }
    }

    /// Full descriptor; a plain id takes the field's class.
    #[must_use]
    pub fn to_item_ref(&self, field_class: &str) -> ItemRef {
        match self {
            Self::Id(id) => ItemRef::new(field_class, id.as_str()),
            Self::Ref(item_ref) => item_ref.clone(),
        }
    }

    /// Trimmed copy. A descriptor collapses to its id only when its class is the field's class
    /// or when it points nowhere.
    #[must_use]
    pub fn normalized(self, field_class: &str) -> Self {
        match self {
            Self::Id(id) => Self::Id(id.trim().to_owned()),
            Self::Ref(item_ref) => {
                let item_ref = item_ref.trimmed();
                if item_ref.is_blank() || item_ref.class_id == field_class {
                    Self::Id(item_ref.item_id)
                } else {
                    Self::Ref(item_ref)
                }
            },
        }
    }
}

impl Default for IdRef {
    fn default() -> Self {
        Self::Id(String::new())
    }
}

impl From<&str> for IdRef {
    fn from(id: &str) -> Self {
        Self::Id(id.to_owned())
    }
}

impl From<String> for IdRef {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default)]
        datum: Option<IdRef>,
    }

    #[test]
    fn descriptor_uses_registry_key_names() {
        let value = serde_json::to_value(ItemRef::new("datums--geodetic", "D1")).unwrap();
        assert_eq!(value, json!({ "classID": "datums--geodetic", "itemID": "D1" }));
    }

    #[test]
    fn id_fields_accept_both_shapes() {
        let plain: Holder = serde_json::from_value(json!({ "datum": "D1" })).unwrap();
        assert_eq!(plain.datum, Some(IdRef::from("D1")));

        let legacy: Holder = serde_json::from_value(
            json!({ "datum": { "classID": "datums--vertical", "itemID": "D2" } }),
        )
        .unwrap();
        let legacy = legacy.datum.unwrap();
        assert_eq!(legacy.item_id(), "D2");
        assert_eq!(
            legacy.to_item_ref("datums--geodetic"),
            ItemRef::new("datums--vertical", "D2")
        );

        let missing: Holder = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.datum, None);

        let null: Holder = serde_json::from_value(json!({ "datum": null })).unwrap();
        assert_eq!(null.datum, None);
    }

    #[test]
    fn legacy_descriptors_keep_a_foreign_class() {
        let foreign = IdRef::Ref(ItemRef::new(" datums--vertical ", " V1 ")).normalized("datums--geodetic");
        assert_eq!(foreign, IdRef::Ref(ItemRef::new("datums--vertical", "V1")));
        assert_eq!(foreign.clone().normalized("datums--geodetic"), foreign);
        assert_eq!(
            serde_json::to_value(&foreign).unwrap(),
            json!({ "classID": "datums--vertical", "itemID": "V1" })
        );

        let own = IdRef::Ref(ItemRef::new("datums--geodetic", "D1")).normalized("datums--geodetic");
        assert_eq!(own, IdRef::from("D1"));

        let nowhere = IdRef::Ref(ItemRef::new("ellipsoid", " ")).normalized("prime-meridian");
        assert_eq!(nowhere, IdRef::default());
    }

    #[test]
    fn blank_descriptors_normalize_to_absence() {
        assert_eq!(normalize_ref(Some(ItemRef::new("crs--vertical", "  "))), None);
        assert_eq!(
            normalize_ref(Some(ItemRef::new(" crs--vertical ", " V1 "))),
            Some(ItemRef::new("crs--vertical", "V1"))
        );
        assert_eq!(normalize_ref(None), None);
    }
}
