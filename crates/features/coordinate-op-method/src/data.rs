use georeg_derive::item_model;
use georeg_kernel::class::ItemData;
use georeg_kernel::domain::{ClassSet, CommonItemData, ItemRef};
use georeg_kernel::domain::classes::COORDINATE_OP_PARAMETER;
use georeg_kernel::update::Layered;
use georeg_kernel::validation::RefSlot;

#[item_model]
#[derive(Default)]
pub struct CoordinateOpMethodData {
    #[serde(flatten)]
    pub common: CommonItemData,
    /// Ids of `coordinate-op-parameter` items. Order is significant.
    pub parameters: Vec<String>,
    pub formula: String,
}

impl CoordinateOpMethodData {
    #[must_use]
    pub fn with_parameters(&self, parameters: Vec<String>) -> Self {
        Self { parameters, ..self.clone() }
    }

    #[must_use]
    pub fn with_formula(&self, formula: impl Into<String>) -> Self {
        Self { formula: formula.into(), ..self.clone() }
    }

    pub fn parameter_refs(&self) -> impl Iterator<Item = ItemRef> + '_ {
        self.parameters.iter().map(|id| ItemRef::new(COORDINATE_OP_PARAMETER, id.as_str()))
    }
}

impl Layered<CommonItemData> for CoordinateOpMethodData {
    fn layer(&self) -> &CommonItemData {
        &self.common
    }

    fn with_layer(&self, common: CommonItemData) -> Self {
        Self { common, ..self.clone() }
    }
}

impl ItemData for CoordinateOpMethodData {
    fn common(&self) -> &CommonItemData {
        &self.common
    }

    fn references(&self) -> Vec<RefSlot> {
        self.parameter_refs()
            .map(|value| RefSlot::restricted("parameters", ClassSet::COORDINATE_OP_PARAMETER, value))
            .collect()
    }

    /// Trims parameter ids and drops blank or repeated ones, keeping first occurrences in order.
    fn sanitized(self) -> Self {
        let mut parameters: Vec<String> = Vec::with_capacity(self.parameters.len());
        for id in self.parameters.iter().map(|id| id.trim()).filter(|id| !id.is_empty()) {
            if !parameters.iter().any(|seen| seen == id) {
                parameters.push(id.to_owned());
            }
        }
        Self { common: self.common.sanitized(), parameters, formula: self.formula }
    }
}
