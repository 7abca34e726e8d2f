use crate::data::CoordinateOpMethodData;
use georeg_kernel::domain::classes::{COORDINATE_OP_METHOD, COORDINATE_OP_PARAMETER};
use georeg_kernel::prelude::*;
use std::rc::Rc;

static META: ClassMeta = ClassMeta {
    title: "Coordinate Operation Method",
    description: "Coordinate Operation Method",
    id: COORDINATE_OP_METHOD,
    alternative_names: &[],
};

#[derive(Debug, Default, Clone, Copy)]
pub struct CoordinateOpMethod {
    policy: ValidationPolicy,
}

impl CoordinateOpMethod {
    #[must_use]
    pub const fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }
}

impl ItemClass for CoordinateOpMethod {
    type Data = CoordinateOpMethodData;

    fn meta(&self) -> &'static ClassMeta {
        &META
    }

    fn defaults(&self) -> CoordinateOpMethodData {
        CoordinateOpMethodData::default()
    }

    fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    fn detail_view(&self, item: &CoordinateOpMethodData, cx: &ViewContext<'_>) -> Vec<Node> {
        let mut slots: Vec<Node> = Vec::new();
        if !item.formula.trim().is_empty() {
            slots.push(Property::new("Formula").child(Node::Paragraph(item.formula.clone())).into());
        }
        if !item.parameters.is_empty() {
            let rc = Rc::new(item.clone());
            let parameters = related_list(
                cx,
                &item.parameters,
                COORDINATE_OP_PARAMETER,
                &rc,
                None,
                CoordinateOpMethodData::with_parameters,
            );
            slots.push(Property::new("Parameters").child(parameters).into());
        }
        common::detail_view(&item.common, cx, slots)
    }

    fn edit_view(
        &self,
        item: &CoordinateOpMethodData,
        on_change: Option<OnChange<CoordinateOpMethodData>>,
        cx: &ViewContext<'_>,
    ) -> Form {
        let rc = Rc::new(item.clone());
        let handler = on_change.as_ref();

        let formula = fields::paragraph(cx, &item.formula, &rc, handler, |d, v| d.with_formula(v));
        let parameters = related_list(
            cx,
            &item.parameters,
            COORDINATE_OP_PARAMETER,
            &rc,
            handler,
            CoordinateOpMethodData::with_parameters,
        );

        let slots: Vec<Node> = vec![
            Property::new("Formula").child(formula).into(),
            Property::new("Parameters").child(parameters).into(),
        ];
        common::edit_view(&item.common, on_change.map(|oc| oc.lift(rc)), cx, slots)
    }
}
