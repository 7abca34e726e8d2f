use crate::data::{DatumData, GeodeticDatumData};
use crate::views::{datum_detail_view, datum_edit_view};
use georeg_kernel::domain::classes::{DATUM_ENGINEERING, DATUM_GEODETIC, DATUM_VERTICAL};
use georeg_kernel::prelude::*;
use std::rc::Rc;

static GEODETIC_META: ClassMeta = ClassMeta {
    title: "Geodetic Datum",
    description: "Geodetic Reference Frame",
    id: DATUM_GEODETIC,
    alternative_names: &[],
};

static VERTICAL_META: ClassMeta = ClassMeta {
    title: "Vertical Datum",
    description: "Vertical Reference Frame",
    id: DATUM_VERTICAL,
    alternative_names: &[],
};

static ENGINEERING_META: ClassMeta = ClassMeta {
    title: "Engineering Datum",
    description: "Engineering Reference Frame",
    id: DATUM_ENGINEERING,
    alternative_names: &[],
};

#[derive(Debug, Default, Clone, Copy)]
pub struct GeodeticDatum {
    policy: ValidationPolicy,
}

impl GeodeticDatum {
    #[must_use]
    pub const fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }
}

impl ItemClass for GeodeticDatum {
    type Data = GeodeticDatumData;

    fn meta(&self) -> &'static ClassMeta {
        &GEODETIC_META
    }

    fn defaults(&self) -> GeodeticDatumData {
        GeodeticDatumData::default()
    }

    fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    fn detail_view(&self, item: &GeodeticDatumData, cx: &ViewContext<'_>) -> Vec<Node> {
        let ellipsoid = RelatedItem::by_id(item.ellipsoid_ref(), ClassSet::ELLIPSOID).view(cx);
        let prime_meridian =
            RelatedItem::by_id(item.prime_meridian_ref(), ClassSet::PRIME_MERIDIAN).view(cx);
        let slots: Vec<Node> = vec![
            Property::new("Ellipsoid").child(Node::Related(ellipsoid)).into(),
            Property::new("Prime meridian").child(Node::Related(prime_meridian)).into(),
        ];
        datum_detail_view(&item.datum, cx, slots)
    }

    fn edit_view(
        &self,
        item: &GeodeticDatumData,
        on_change: Option<OnChange<GeodeticDatumData>>,
        cx: &ViewContext<'_>,
    ) -> Form {
        let rc = Rc::new(item.clone());
        let handler = on_change.as_ref();

        let ellipsoid = RelatedItem::by_id(item.ellipsoid_ref(), ClassSet::ELLIPSOID).render(
            cx,
            &rc,
            handler,
            GeodeticDatumData::with_ellipsoid,
            GeodeticDatumData::without_ellipsoid,
        );
        let prime_meridian = RelatedItem::by_id(item.prime_meridian_ref(), ClassSet::PRIME_MERIDIAN)
            .render(
                cx,
                &rc,
                handler,
                GeodeticDatumData::with_prime_meridian,
                GeodeticDatumData::without_prime_meridian,
            );

        let slots: Vec<Node> = vec![
            Property::new("Ellipsoid")
                .sub_label("Relevant ellipsoid from the registry.")
                .child(ellipsoid)
                .into(),
            Property::new("Prime meridian").child(prime_meridian).into(),
        ];
        datum_edit_view(&item.datum, on_change.map(|oc| oc.lift(rc)), cx, slots)
    }
}

/// Vertical or engineering datum: the shared datum fields and nothing else.
#[derive(Debug, Clone, Copy)]
pub struct FrameDatum {
    meta: &'static ClassMeta,
    policy: ValidationPolicy,
}

impl FrameDatum {
    #[must_use]
    pub const fn vertical(policy: ValidationPolicy) -> Self {
        Self { meta: &VERTICAL_META, policy }
    }

    #[must_use]
    pub const fn engineering(policy: ValidationPolicy) -> Self {
        Self { meta: &ENGINEERING_META, policy }
    }
}

impl ItemClass for FrameDatum {
    type Data = DatumData;

    fn meta(&self) -> &'static ClassMeta {
        self.meta
    }

    fn defaults(&self) -> DatumData {
        DatumData::default()
    }

    fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    fn detail_view(&self, item: &DatumData, cx: &ViewContext<'_>) -> Vec<Node> {
        datum_detail_view(item, cx, Vec::new())
    }

    fn edit_view(
        &self,
        item: &DatumData,
        on_change: Option<OnChange<DatumData>>,
        cx: &ViewContext<'_>,
    ) -> Form {
        datum_edit_view(item, on_change, cx, Vec::new())
    }
}
