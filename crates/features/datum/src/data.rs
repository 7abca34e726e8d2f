use georeg_derive::item_model;
use georeg_kernel::class::ItemData;
use georeg_kernel::domain::classes::{ELLIPSOID, PRIME_MERIDIAN};
use georeg_kernel::domain::{ClassSet, CommonItemData, Extent, IdRef, ItemRef};
use georeg_kernel::update::Layered;
use georeg_kernel::validation::RefSlot;

/// Fields shared by every datum. Vertical and engineering datums persist exactly this.
#[item_model]
#[derive(Default)]
pub struct DatumData {
    #[serde(flatten)]
    pub common: CommonItemData,
    pub scope: String,
    pub extent: Extent,
    /// Anchor definition: a description, possibly with coordinates of an identified point.
    pub origin_description: String,
    /// `yyyy.y`. `None` means no epoch applies, which differs from an epoch not yet entered.
    pub coordinate_reference_epoch: Option<String>,
    /// Publication date, `yyyy-mm-dd` or just a year.
    pub release_date: String,
}

impl DatumData {
    #[must_use]
    pub fn with_scope(&self, scope: impl Into<String>) -> Self {
        Self { scope: scope.into(), ..self.clone() }
    }

    #[must_use]
    pub fn with_extent(&self, extent: Extent) -> Self {
        Self { extent, ..self.clone() }
    }

    #[must_use]
    pub fn with_origin_description(&self, origin_description: impl Into<String>) -> Self {
        Self { origin_description: origin_description.into(), ..self.clone() }
    }

    #[must_use]
    pub fn with_coordinate_reference_epoch(&self, epoch: Option<String>) -> Self {
        Self { coordinate_reference_epoch: epoch, ..self.clone() }
    }

    #[must_use]
    pub fn with_release_date(&self, release_date: impl Into<String>) -> Self {
        Self { release_date: release_date.into(), ..self.clone() }
    }
}

impl Layered<CommonItemData> for DatumData {
    fn layer(&self) -> &CommonItemData {
        &self.common
    }

    fn with_layer(&self, common: CommonItemData) -> Self {
        Self { common, ..self.clone() }
    }
}

impl ItemData for DatumData {
    fn common(&self) -> &CommonItemData {
        &self.common
    }

    fn sanitized(self) -> Self {
        Self {
            common: self.common.sanitized(),
            scope: self.scope.trim().to_owned(),
            extent: self.extent.with_name(self.extent.name.trim()),
            origin_description: self.origin_description,
            coordinate_reference_epoch: self.coordinate_reference_epoch.map(|e| e.trim().to_owned()),
            release_date: self.release_date.trim().to_owned(),
        }
    }
}

/// A datum that also names its ellipsoid and prime meridian, both by item id.
#[item_model]
pub struct GeodeticDatumData {
    #[serde(flatten)]
    pub datum: DatumData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ellipsoid: Option<IdRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prime_meridian: Option<IdRef>,
}

impl Default for GeodeticDatumData {
    fn default() -> Self {
        Self {
            datum: DatumData::default(),
            ellipsoid: Some(IdRef::default()),
            prime_meridian: Some(IdRef::default()),
        }
    }
}

impl GeodeticDatumData {
    #[must_use]
    pub fn ellipsoid_id(&self) -> Option<&str> {
        self.ellipsoid.as_ref().map(IdRef::item_id)
    }

    #[must_use]
    pub fn prime_meridian_id(&self) -> Option<&str> {
        self.prime_meridian.as_ref().map(IdRef::item_id)
    }

    /// The ellipsoid as a full descriptor; a legacy descriptor keeps its stored class.
    #[must_use]
    pub fn ellipsoid_ref(&self) -> Option<ItemRef> {
        self.ellipsoid.as_ref().map(|ellipsoid| ellipsoid.to_item_ref(ELLIPSOID))
    }

    #[must_use]
    pub fn prime_meridian_ref(&self) -> Option<ItemRef> {
        self.prime_meridian.as_ref().map(|meridian| meridian.to_item_ref(PRIME_MERIDIAN))
    }

    #[must_use]
    pub fn with_ellipsoid(&self, ellipsoid: ItemRef) -> Self {
        Self { ellipsoid: Some(IdRef::Id(ellipsoid.item_id)), ..self.clone() }
    }

    #[must_use]
    pub fn without_ellipsoid(&self) -> Self {
        Self { ellipsoid: None, ..self.clone() }
    }

    #[must_use]
    pub fn with_prime_meridian(&self, prime_meridian: ItemRef) -> Self {
        Self { prime_meridian: Some(IdRef::Id(prime_meridian.item_id)), ..self.clone() }
    }

    #[must_use]
    pub fn without_prime_meridian(&self) -> Self {
        Self { prime_meridian: None, ..self.clone() }
    }
}

impl Layered<DatumData> for GeodeticDatumData {
    fn layer(&self) -> &DatumData {
        &self.datum
    }

    fn with_layer(&self, datum: DatumData) -> Self {
        Self { datum, ..self.clone() }
    }
}

impl ItemData for GeodeticDatumData {
    fn common(&self) -> &CommonItemData {
        &self.datum.common
    }

    fn references(&self) -> Vec<RefSlot> {
        [
            ("ellipsoid", ClassSet::ELLIPSOID, self.ellipsoid_ref()),
            ("primeMeridian", ClassSet::PRIME_MERIDIAN, self.prime_meridian_ref()),
        ]
        .into_iter()
        .filter_map(|(field, targets, value)| {
            value.filter(|v| !v.is_blank()).map(|v| RefSlot::restricted(field, targets, v))
        })
        .collect()
    }

    fn sanitized(self) -> Self {
        Self {
            datum: self.datum.sanitized(),
            ellipsoid: self.ellipsoid.map(|ellipsoid| ellipsoid.normalized(ELLIPSOID)),
            prime_meridian: self.prime_meridian.map(|meridian| meridian.normalized(PRIME_MERIDIAN)),
        }
    }
}
