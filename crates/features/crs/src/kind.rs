use georeg_kernel::class::ClassMeta;
use georeg_kernel::domain::ClassSet;
use georeg_kernel::domain::classes::{
    CRS_ENGINEERING, CRS_GEODETIC, CRS_VERTICAL, DATUM_ENGINEERING, DATUM_GEODETIC, DATUM_VERTICAL,
};
use std::fmt;

/// Which datum family a datum-bound CRS refers to.
pub trait DatumKind: fmt::Debug + Clone + Copy + PartialEq + Eq + Default + Send + Sync + 'static {
    /// Class of the referenced datum.
    const DATUM_CLASS: &'static str;
    /// Sub label of the datum field.
    const LABEL: &'static str;

    fn crs_meta() -> &'static ClassMeta;

    #[must_use]
    fn datum_targets() -> ClassSet {
        ClassSet::from(Self::DATUM_CLASS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vertical;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geodetic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Engineering;

static VERTICAL_META: ClassMeta = ClassMeta {
    title: "Vertical CRS",
    description: "Vertical Coordinate Reference System",
    id: CRS_VERTICAL,
    alternative_names: &[],
};

static GEODETIC_META: ClassMeta = ClassMeta {
    title: "Geodetic CRS",
    description: "Geodetic Coordinate Reference System",
    id: CRS_GEODETIC,
    alternative_names: &[],
};

static ENGINEERING_META: ClassMeta = ClassMeta {
    title: "Engineering CRS",
    description: "Engineering Coordinate Reference System",
    id: CRS_ENGINEERING,
    alternative_names: &[],
};

impl DatumKind for Vertical {
    const DATUM_CLASS: &'static str = DATUM_VERTICAL;
    const LABEL: &'static str = "vertical";

    fn crs_meta() -> &'static ClassMeta {
        &VERTICAL_META
    }
}

impl DatumKind for Geodetic {
    const DATUM_CLASS: &'static str = DATUM_GEODETIC;
    const LABEL: &'static str = "geodetic";

    fn crs_meta() -> &'static ClassMeta {
        &GEODETIC_META
    }
}

impl DatumKind for Engineering {
    const DATUM_CLASS: &'static str = DATUM_ENGINEERING;
    const LABEL: &'static str = "engineering";

    fn crs_meta() -> &'static ClassMeta {
        &ENGINEERING_META
    }
}
