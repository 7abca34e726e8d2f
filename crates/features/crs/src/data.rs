//! Persisted CRS payloads.
//!
//! Layers nest through `#[serde(flatten)]`, so every kind persists as one flat field mapping:
//! common fields, then CRS fields, then the kind's own fields.

use crate::kind::DatumKind;
use georeg_derive::item_model;
use georeg_kernel::class::ItemData;
use georeg_kernel::domain::classes::{
    COORDINATE_SYSTEM_TARGETS, HORIZONTAL_CRS_TARGETS, VERTICAL_CRS_TARGETS,
};
use georeg_kernel::domain::reference::normalize_ref;
use georeg_kernel::domain::{CommonItemData, Extent, IdRef, ItemRef};
use georeg_kernel::update::Layered;
use georeg_kernel::validation::RefSlot;
use std::marker::PhantomData;

/// Fields shared by every CRS.
#[item_model]
#[derive(Default)]
pub struct CrsData {
    #[serde(flatten)]
    pub common: CommonItemData,
    pub scope: String,
    pub extent: Extent,
}

impl CrsData {
    #[must_use]
    pub fn with_scope(&self, scope: impl Into<String>) -> Self {
        Self { scope: scope.into(), ..self.clone() }
    }

    #[must_use]
    pub fn with_extent(&self, extent: Extent) -> Self {
        Self { extent, ..self.clone() }
    }

    #[must_use]
    pub fn sanitized(self) -> Self {
        let extent = self.extent.with_name(self.extent.name.trim());
        Self { common: self.common.sanitized(), scope: self.scope.trim().to_owned(), extent }
    }
}

impl Layered<CommonItemData> for CrsData {
    fn layer(&self) -> &CommonItemData {
        &self.common
    }

    fn with_layer(&self, common: CommonItemData) -> Self {
        Self { common, ..self.clone() }
    }
}

/// A CRS built from exactly one coordinate system. Projected CRSs add nothing to it.
#[item_model]
#[derive(Default)]
pub struct NonCompoundCrsData {
    #[serde(flatten)]
    pub crs: CrsData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate_system: Option<ItemRef>,
    #[serde(rename = "baseCRS", skip_serializing_if = "Option::is_none")]
    pub base_crs: Option<ItemRef>,
    /// Conversion or transformation deriving this CRS from its base.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<ItemRef>,
}

pub type ProjectedCrsData = NonCompoundCrsData;

impl NonCompoundCrsData {
    #[must_use]
    pub fn with_coordinate_system(&self, coordinate_system: ItemRef) -> Self {
        Self { coordinate_system: Some(coordinate_system), ..self.clone() }
    }

    #[must_use]
    pub fn without_coordinate_system(&self) -> Self {
        Self { coordinate_system: None, ..self.clone() }
    }

    #[must_use]
    pub fn with_base_crs(&self, base_crs: ItemRef) -> Self {
        Self { base_crs: Some(base_crs), ..self.clone() }
    }

    #[must_use]
    pub fn without_base_crs(&self) -> Self {
        Self { base_crs: None, ..self.clone() }
    }

    #[must_use]
    pub fn with_operation(&self, operation: ItemRef) -> Self {
        Self { operation: Some(operation), ..self.clone() }
    }

    #[must_use]
    pub fn without_operation(&self) -> Self {
        Self { operation: None, ..self.clone() }
    }
}

impl Layered<CrsData> for NonCompoundCrsData {
    fn layer(&self) -> &CrsData {
        &self.crs
    }

    fn with_layer(&self, crs: CrsData) -> Self {
        Self { crs, ..self.clone() }
    }
}

impl ItemData for NonCompoundCrsData {
    fn common(&self) -> &CommonItemData {
        &self.crs.common
    }

    fn references(&self) -> Vec<RefSlot> {
        let mut slots = Vec::new();
        if let Some(value) = &self.coordinate_system {
            slots.push(RefSlot::restricted("coordinateSystem", COORDINATE_SYSTEM_TARGETS, value.clone()));
        }
        if let Some(value) = &self.base_crs {
            slots.push(RefSlot::unrestricted("baseCRS", value.clone()));
        }
        if let Some(value) = &self.operation {
            slots.push(RefSlot::unrestricted("operation", value.clone()));
        }
        slots
    }

    fn sanitized(self) -> Self {
        Self {
            crs: self.crs.sanitized(),
            coordinate_system: normalize_ref(self.coordinate_system),
            base_crs: normalize_ref(self.base_crs),
            operation: normalize_ref(self.operation),
        }
    }
}

/// Two CRSs combined: a horizontal one and a vertical one.
#[item_model]
#[derive(Default)]
pub struct CompoundCrsData {
    #[serde(flatten)]
    pub crs: CrsData,
    #[serde(rename = "horizontalCRS", skip_serializing_if = "Option::is_none")]
    pub horizontal_crs: Option<ItemRef>,
    #[serde(rename = "verticalCRS", skip_serializing_if = "Option::is_none")]
    pub vertical_crs: Option<ItemRef>,
}

impl CompoundCrsData {
    #[must_use]
    pub fn with_horizontal_crs(&self, horizontal_crs: ItemRef) -> Self {
        Self { horizontal_crs: Some(horizontal_crs), ..self.clone() }
    }

    #[must_use]
    pub fn without_horizontal_crs(&self) -> Self {
        Self { horizontal_crs: None, ..self.clone() }
    }

    #[must_use]
    pub fn with_vertical_crs(&self, vertical_crs: ItemRef) -> Self {
        Self { vertical_crs: Some(vertical_crs), ..self.clone() }
    }

    #[must_use]
    pub fn without_vertical_crs(&self) -> Self {
        Self { vertical_crs: None, ..self.clone() }
    }
}

impl Layered<CrsData> for CompoundCrsData {
    fn layer(&self) -> &CrsData {
        &self.crs
    }

    fn with_layer(&self, crs: CrsData) -> Self {
        Self { crs, ..self.clone() }
    }
}

impl ItemData for CompoundCrsData {
    fn common(&self) -> &CommonItemData {
        &self.crs.common
    }

    fn references(&self) -> Vec<RefSlot> {
        let mut slots = Vec::new();
        if let Some(value) = &self.horizontal_crs {
            slots.push(RefSlot::restricted("horizontalCRS", HORIZONTAL_CRS_TARGETS, value.clone()));
        }
        if let Some(value) = &self.vertical_crs {
            slots.push(RefSlot::restricted("verticalCRS", VERTICAL_CRS_TARGETS, value.clone()));
        }
        slots
    }

    fn sanitized(self) -> Self {
        Self {
            crs: self.crs.sanitized(),
            horizontal_crs: normalize_ref(self.horizontal_crs),
            vertical_crs: normalize_ref(self.vertical_crs),
        }
    }
}

/// A non-compound CRS tied to a datum of family `K`.
///
/// The datum is stored by item id only: its class follows from `K`. `Some("")` marks a datum
/// that applies but has not been chosen yet (the defaults); `None` means the field is absent.
/// A legacy descriptor keeps its own class, which validation checks against `K`.
#[item_model]
#[serde(bound = "")]
pub struct DatumCrsData<K: DatumKind> {
    #[serde(flatten)]
    pub base: NonCompoundCrsData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datum: Option<IdRef>,
    #[serde(skip)]
    kind: PhantomData<K>,
}

pub type VerticalCrsData = DatumCrsData<crate::kind::Vertical>;
pub type GeodeticCrsData = DatumCrsData<crate::kind::Geodetic>;
pub type EngineeringCrsData = DatumCrsData<crate::kind::Engineering>;

impl<K: DatumKind> Default for DatumCrsData<K> {
    fn default() -> Self {
        Self::new(NonCompoundCrsData::default(), Some(IdRef::default()))
    }
}

impl<K: DatumKind> DatumCrsData<K> {
    #[must_use]
    pub const fn new(base: NonCompoundCrsData, datum: Option<IdRef>) -> Self {
        Self { base, datum, kind: PhantomData }
    }

    /// The datum as a full descriptor.
    #[must_use]
    pub fn datum_ref(&self) -> Option<ItemRef> {
        self.datum.as_ref().map(|datum| datum.to_item_ref(K::DATUM_CLASS))
    }

    /// Stores the descriptor's item id; the class is implied by `K`.
    #[must_use]
    pub fn with_datum_ref(&self, datum: ItemRef) -> Self {
        self.with_datum(datum.item_id)
    }

    #[must_use]
    pub fn with_datum(&self, id: impl Into<String>) -> Self {
        Self { datum: Some(IdRef::Id(id.into())), ..self.clone() }
    }

    /// Item id of the datum, whatever shape it was stored in.
    #[must_use]
    pub fn datum_id(&self) -> Option<&str> {
        self.datum.as_ref().map(IdRef::item_id)
    }

    #[must_use]
    pub fn without_datum(&self) -> Self {
        Self { datum: None, ..self.clone() }
    }
}

impl<K: DatumKind> Layered<NonCompoundCrsData> for DatumCrsData<K> {
    fn layer(&self) -> &NonCompoundCrsData {
        &self.base
    }

    fn with_layer(&self, base: NonCompoundCrsData) -> Self {
        Self { base, ..self.clone() }
    }
}

impl<K: DatumKind> ItemData for DatumCrsData<K> {
    fn common(&self) -> &CommonItemData {
        self.base.common()
    }

    fn references(&self) -> Vec<RefSlot> {
        let mut slots = self.base.references();
        if let Some(datum) = self.datum_ref().filter(|datum| !datum.is_blank()) {
            slots.push(RefSlot::restricted("datum", K::datum_targets(), datum));
        }
        slots
    }

    fn sanitized(self) -> Self {
        let datum = self.datum.map(|datum| datum.normalized(K::DATUM_CLASS));
        Self::new(self.base.sanitized(), datum)
    }
}
