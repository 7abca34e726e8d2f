use crate::data::{CompoundCrsData, DatumCrsData, NonCompoundCrsData};
use crate::kind::{DatumKind, Engineering, Geodetic, Vertical};
use crate::views::{crs_detail_view, crs_edit_view, non_compound_detail_view, non_compound_edit_view};
use georeg_kernel::domain::classes::{
    CRS_COMPOUND, CRS_PROJECTED, HORIZONTAL_CRS_TARGETS, VERTICAL_CRS_TARGETS,
};
use georeg_kernel::prelude::*;
use std::marker::PhantomData;
use std::rc::Rc;

static COMPOUND_META: ClassMeta = ClassMeta {
    title: "Compound CRS",
    description: "Compound Coordinate Reference System",
    id: CRS_COMPOUND,
    alternative_names: &[],
};

static PROJECTED_META: ClassMeta = ClassMeta {
    title: "Projected CRS",
    description: "Projected Coordinate Reference System",
    id: CRS_PROJECTED,
    alternative_names: &[],
};

/// Horizontal CRS paired with a vertical CRS.
#[derive(Debug, Default, Clone, Copy)]
pub struct CompoundCrs {
    policy: ValidationPolicy,
}

impl CompoundCrs {
    #[must_use]
    pub const fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }
}

impl ItemClass for CompoundCrs {
    type Data = CompoundCrsData;

    fn meta(&self) -> &'static ClassMeta {
        &COMPOUND_META
    }

    fn defaults(&self) -> CompoundCrsData {
        CompoundCrsData::default()
    }

    fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    fn detail_view(&self, item: &CompoundCrsData, cx: &ViewContext<'_>) -> Vec<Node> {
        let mut slots: Vec<Node> = Vec::new();
        if let Some(horizontal) = &item.horizontal_crs {
            let view = RelatedItem::generic(Some(horizontal.clone()), HORIZONTAL_CRS_TARGETS).view(cx);
            slots.push(Property::new("Horizontal CRS").child(Node::Related(view)).into());
        }
        if let Some(vertical) = &item.vertical_crs {
            let view = RelatedItem::generic(Some(vertical.clone()), VERTICAL_CRS_TARGETS).view(cx);
            slots.push(Property::new("Vertical CRS").child(Node::Related(view)).into());
        }
        crs_detail_view(&item.crs, cx, slots)
    }

    fn edit_view(
        &self,
        item: &CompoundCrsData,
        on_change: Option<OnChange<CompoundCrsData>>,
        cx: &ViewContext<'_>,
    ) -> Form {
        let rc = Rc::new(item.clone());
        let handler = on_change.as_ref();

        let horizontal = RelatedItem::generic(item.horizontal_crs.clone(), HORIZONTAL_CRS_TARGETS)
            .render(
                cx,
                &rc,
                handler,
                CompoundCrsData::with_horizontal_crs,
                CompoundCrsData::without_horizontal_crs,
            );
        let vertical = RelatedItem::generic(item.vertical_crs.clone(), VERTICAL_CRS_TARGETS).render(
            cx,
            &rc,
            handler,
            CompoundCrsData::with_vertical_crs,
            CompoundCrsData::without_vertical_crs,
        );

        let slots: Vec<Node> = vec![
            Property::new("Horizontal CRS").child(horizontal).into(),
            Property::new("Vertical CRS").child(vertical).into(),
        ];
        crs_edit_view(&item.crs, on_change.map(|oc| oc.lift(rc)), cx, slots)
    }
}

/// CRS derived from a base CRS by a map projection.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectedCrs {
    policy: ValidationPolicy,
}

impl ProjectedCrs {
    #[must_use]
    pub const fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }
}

impl ItemClass for ProjectedCrs {
    type Data = NonCompoundCrsData;

    fn meta(&self) -> &'static ClassMeta {
        &PROJECTED_META
    }

    fn defaults(&self) -> NonCompoundCrsData {
        NonCompoundCrsData::default()
    }

    fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    fn detail_view(&self, item: &NonCompoundCrsData, cx: &ViewContext<'_>) -> Vec<Node> {
        non_compound_detail_view(item, cx, Vec::new())
    }

    fn edit_view(
        &self,
        item: &NonCompoundCrsData,
        on_change: Option<OnChange<NonCompoundCrsData>>,
        cx: &ViewContext<'_>,
    ) -> Form {
        non_compound_edit_view(item, on_change, cx, Vec::new())
    }
}

/// Non-compound CRS bound to a datum of family `K`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DatumBoundCrs<K: DatumKind> {
    policy: ValidationPolicy,
    kind: PhantomData<K>,
}

pub type VerticalCrs = DatumBoundCrs<Vertical>;
pub type GeodeticCrs = DatumBoundCrs<Geodetic>;
pub type EngineeringCrs = DatumBoundCrs<Engineering>;

impl<K: DatumKind> DatumBoundCrs<K> {
    #[must_use]
    pub const fn new(policy: ValidationPolicy) -> Self {
        Self { policy, kind: PhantomData }
    }
}

impl<K: DatumKind> ItemClass for DatumBoundCrs<K> {
    type Data = DatumCrsData<K>;

    fn meta(&self) -> &'static ClassMeta {
        K::crs_meta()
    }

    fn defaults(&self) -> DatumCrsData<K> {
        DatumCrsData::default()
    }

    fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    fn detail_view(&self, item: &DatumCrsData<K>, cx: &ViewContext<'_>) -> Vec<Node> {
        let datum = RelatedItem::by_id(item.datum_ref(), K::datum_targets()).view(cx);
        let slots: Vec<Node> = vec![
            Property::new("Datum").sub_label(K::LABEL).child(Node::Related(datum)).into(),
        ];
        non_compound_detail_view(&item.base, cx, slots)
    }

    fn edit_view(
        &self,
        item: &DatumCrsData<K>,
        on_change: Option<OnChange<DatumCrsData<K>>>,
        cx: &ViewContext<'_>,
    ) -> Form {
        let rc = Rc::new(item.clone());
        let datum = RelatedItem::by_id(item.datum_ref(), K::datum_targets()).render(
            cx,
            &rc,
            on_change.as_ref(),
            DatumCrsData::with_datum_ref,
            DatumCrsData::without_datum,
        );
        let slots: Vec<Node> = vec![Property::new("Datum").sub_label(K::LABEL).child(datum).into()];
        non_compound_edit_view(&item.base, on_change.map(|oc| oc.lift(rc)), cx, slots)
    }
}
