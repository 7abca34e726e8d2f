//! # Coordinate System Axes
//!
//! One axis of a coordinate system: its abbreviation, its orientation and the unit its values
//! are measured in.

use georeg_derive::item_model;
use georeg_kernel::domain::classes::{COORDINATE_SYS_AXIS, UNIT_OF_MEASUREMENT};
use georeg_kernel::prelude::*;
use std::rc::Rc;

#[item_model]
pub struct CoordinateSysAxisData {
    #[serde(flatten)]
    pub common: CommonItemData,
    /// Short axis label, e.g. `E` or `h`.
    pub abbreviation: String,
    /// Direction of increasing values, e.g. `north` or `up`.
    pub orientation: String,
    /// Item id of the unit; older payloads may hold a full descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_of_measurement: Option<IdRef>,
}

impl Default for CoordinateSysAxisData {
    fn default() -> Self {
        Self {
            common: CommonItemData::default(),
            abbreviation: String::new(),
            orientation: String::new(),
            unit_of_measurement: Some(IdRef::default()),
        }
    }
}

impl CoordinateSysAxisData {
    #[must_use]
    pub fn with_abbreviation(&self, abbreviation: impl Into<String>) -> Self {
        Self { abbreviation: abbreviation.into(), ..self.clone() }
    }

    #[must_use]
    pub fn with_orientation(&self, orientation: impl Into<String>) -> Self {
        Self { orientation: orientation.into(), ..self.clone() }
    }

    #[must_use]
    pub fn unit_id(&self) -> Option<&str> {
        self.unit_of_measurement.as_ref().map(IdRef::item_id)
    }

    #[must_use]
    pub fn unit_ref(&self) -> Option<ItemRef> {
        self.unit_of_measurement.as_ref().map(|unit| unit.to_item_ref(UNIT_OF_MEASUREMENT))
    }

    #[must_use]
    pub fn with_unit(&self, unit: ItemRef) -> Self {
        Self { unit_of_measurement: Some(IdRef::Id(unit.item_id)), ..self.clone() }
    }

    #[must_use]
    pub fn without_unit(&self) -> Self {
        Self { unit_of_measurement: None, ..self.clone() }
    }
}

impl Layered<CommonItemData> for CoordinateSysAxisData {
    fn layer(&self) -> &CommonItemData {
        &self.common
    }

    fn with_layer(&self, common: CommonItemData) -> Self {
        Self { common, ..self.clone() }
    }
}

impl ItemData for CoordinateSysAxisData {
    fn common(&self) -> &CommonItemData {
        &self.common
    }

    fn references(&self) -> Vec<RefSlot> {
        self.unit_ref()
            .filter(|unit| !unit.is_blank())
            .map(|unit| RefSlot::restricted("unitOfMeasurement", ClassSet::UNIT_OF_MEASUREMENT, unit))
            .into_iter()
            .collect()
    }

    fn sanitized(self) -> Self {
        Self {
            common: self.common.sanitized(),
            abbreviation: self.abbreviation.trim().to_owned(),
            orientation: self.orientation.trim().to_owned(),
            unit_of_measurement: self
                .unit_of_measurement
                .map(|unit| unit.normalized(UNIT_OF_MEASUREMENT)),
        }
    }
}

static META: ClassMeta = ClassMeta {
    title: "Coordinate System Axis",
    description: "Coordinate System Axis",
    id: COORDINATE_SYS_AXIS,
    alternative_names: &[],
};

#[derive(Debug, Default, Clone, Copy)]
pub struct CoordinateSysAxis {
    policy: ValidationPolicy,
}

impl CoordinateSysAxis {
    #[must_use]
    pub const fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }
}

impl ItemClass for CoordinateSysAxis {
    type Data = CoordinateSysAxisData;

    fn meta(&self) -> &'static ClassMeta {
        &META
    }

    fn defaults(&self) -> CoordinateSysAxisData {
        CoordinateSysAxisData::default()
    }

    fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    fn detail_view(&self, item: &CoordinateSysAxisData, cx: &ViewContext<'_>) -> Vec<Node> {
        // A blank unit id has nothing to resolve.
        let unit = item.unit_ref().filter(|unit| !unit.is_blank());
        let unit = RelatedItem::generic(unit, ClassSet::UNIT_OF_MEASUREMENT).view(cx);

        let slots: Vec<Node> = vec![
            Property::new("Abbreviation").child(fields::display(cx, &item.abbreviation)).into(),
            Property::new("Orientation").child(fields::display(cx, &item.orientation)).into(),
            Property::new("Unit of measurement").child(Node::Related(unit)).into(),
        ];
        common::detail_view(&item.common, cx, slots)
    }

    fn edit_view(
        &self,
        item: &CoordinateSysAxisData,
        on_change: Option<OnChange<CoordinateSysAxisData>>,
        cx: &ViewContext<'_>,
    ) -> Form {
        let rc = Rc::new(item.clone());
        let handler = on_change.as_ref();

        let unit = RelatedItem::by_id(item.unit_ref(), ClassSet::UNIT_OF_MEASUREMENT).render(
            cx,
            &rc,
            handler,
            CoordinateSysAxisData::with_unit,
            CoordinateSysAxisData::without_unit,
        );
        let slots: Vec<Node> = vec![
            Property::new("Abbreviation")
                .child(fields::text(cx, &item.abbreviation, &rc, handler, |d, v| d.with_abbreviation(v)))
                .into(),
            Property::new("Orientation")
                .child(fields::text(cx, &item.orientation, &rc, handler, |d, v| d.with_orientation(v)))
                .into(),
            Property::new("Unit of measurement").child(unit).into(),
        ];
        common::edit_view(&item.common, on_change.map(|oc| oc.lift(rc)), cx, slots)
    }
}

/// # Errors
/// Fails if `coordinate-sys-axis` is already registered.
pub fn register(registry: &mut ClassRegistry, policy: ValidationPolicy) -> Result<(), RegistryError> {
    registry.register(CoordinateSysAxis::new(policy))?;
    tracing::debug!("Coordinate system axis class registered");
    Ok(())
}
