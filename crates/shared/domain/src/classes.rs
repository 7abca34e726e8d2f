//! Stable class identifiers and sets of them.
//!
//! Class ids are host-visible strings: they address items inside reference descriptors and
//! must never be renamed without a data migration.

use bitflags::bitflags;

pub const COORDINATE_OP_METHOD: &str = "coordinate-op-method";
pub const COORDINATE_OP_PARAMETER: &str = "coordinate-op-parameter";
pub const COORDINATE_SYS_AXIS: &str = "coordinate-sys-axis";
pub const COORDINATE_SYS_CARTESIAN: &str = "coordinate-sys--cartesian";
pub const COORDINATE_SYS_ELLIPSOIDAL: &str = "coordinate-sys--ellipsoidal";
pub const COORDINATE_SYS_SPHERICAL: &str = "coordinate-sys--spherical";
pub const COORDINATE_SYS_VERTICAL: &str = "coordinate-sys--vertical";
pub const CRS_COMPOUND: &str = "crs--compound";
pub const CRS_ENGINEERING: &str = "crs--engineering";
pub const CRS_GEODETIC: &str = "crs--geodetic";
pub const CRS_PROJECTED: &str = "crs--projected";
pub const CRS_VERTICAL: &str = "crs--vertical";
pub const DATUM_ENGINEERING: &str = "datums--engineering";
pub const DATUM_GEODETIC: &str = "datums--geodetic";
pub const DATUM_VERTICAL: &str = "datums--vertical";
pub const ELLIPSOID: &str = "ellipsoid";
pub const PRIME_MERIDIAN: &str = "prime-meridian";
pub const UNIT_OF_MEASUREMENT: &str = "unit-of-measurement";

bitflags! {
    /// A set of known class identifiers.
    ///
    /// Used to describe which classes a reference field may point at.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ClassSet: u32 {
        const COORDINATE_OP_METHOD = 1 << 0;
        const COORDINATE_OP_PARAMETER = 1 << 1;
        const COORDINATE_SYS_AXIS = 1 << 2;
        const COORDINATE_SYS_CARTESIAN = 1 << 3;
        const COORDINATE_SYS_ELLIPSOIDAL = 1 << 4;
        const COORDINATE_SYS_SPHERICAL = 1 << 5;
        const COORDINATE_SYS_VERTICAL = 1 << 6;
        const CRS_COMPOUND = 1 << 7;
        const CRS_ENGINEERING = 1 << 8;
        const CRS_GEODETIC = 1 << 9;
        const CRS_PROJECTED = 1 << 10;
        const CRS_VERTICAL = 1 << 11;
        const DATUM_ENGINEERING = 1 << 12;
        const DATUM_GEODETIC = 1 << 13;
        const DATUM_VERTICAL = 1 << 14;
        const ELLIPSOID = 1 << 15;
        const PRIME_MERIDIAN = 1 << 16;
        const UNIT_OF_MEASUREMENT = 1 << 17;
    }
}

/// Flag to id mapping, in declaration order.
const IDS: &[(ClassSet, &str)] = &[
    (ClassSet::COORDINATE_OP_METHOD, COORDINATE_OP_METHOD),
    (ClassSet::COORDINATE_OP_PARAMETER, COORDINATE_OP_PARAMETER),
    (ClassSet::COORDINATE_SYS_AXIS, COORDINATE_SYS_AXIS),
    (ClassSet::COORDINATE_SYS_CARTESIAN, COORDINATE_SYS_CARTESIAN),
    (ClassSet::COORDINATE_SYS_ELLIPSOIDAL, COORDINATE_SYS_ELLIPSOIDAL),
    (ClassSet::COORDINATE_SYS_SPHERICAL, COORDINATE_SYS_SPHERICAL),
    (ClassSet::COORDINATE_SYS_VERTICAL, COORDINATE_SYS_VERTICAL),
    (ClassSet::CRS_COMPOUND, CRS_COMPOUND),
    (ClassSet::CRS_ENGINEERING, CRS_ENGINEERING),
    (ClassSet::CRS_GEODETIC, CRS_GEODETIC),
    (ClassSet::CRS_PROJECTED, CRS_PROJECTED),
    (ClassSet::CRS_VERTICAL, CRS_VERTICAL),
    (ClassSet::DATUM_ENGINEERING, DATUM_ENGINEERING),
    (ClassSet::DATUM_GEODETIC, DATUM_GEODETIC),
    (ClassSet::DATUM_VERTICAL, DATUM_VERTICAL),
    (ClassSet::ELLIPSOID, ELLIPSOID),
    (ClassSet::PRIME_MERIDIAN, PRIME_MERIDIAN),
    (ClassSet::UNIT_OF_MEASUREMENT, UNIT_OF_MEASUREMENT),
];

/// Targets of a compound CRS's horizontal component.
pub const HORIZONTAL_CRS_TARGETS: ClassSet =
    ClassSet::CRS_PROJECTED.union(ClassSet::CRS_ENGINEERING).union(ClassSet::CRS_GEODETIC);

/// Targets of a compound CRS's vertical component.
pub const VERTICAL_CRS_TARGETS: ClassSet = ClassSet::CRS_VERTICAL.union(ClassSet::CRS_ENGINEERING);

/// Coordinate systems a non-compound CRS may be defined on.
pub const COORDINATE_SYSTEM_TARGETS: ClassSet = ClassSet::COORDINATE_SYS_CARTESIAN
    .union(ClassSet::COORDINATE_SYS_VERTICAL)
    .union(ClassSet::COORDINATE_SYS_ELLIPSOIDAL)
    .union(ClassSet::COORDINATE_SYS_SPHERICAL);

impl ClassSet {
    /// Returns `true` if `class_id` is a known class contained in this set.
    #[must_use]
    pub fn admits(self, class_id: &str) -> bool {
        let class = Self::from(class_id);
        !class.is_empty() && self.contains(class)
    }

    /// Class ids of the members, in a stable order.
    pub fn ids(self) -> impl Iterator<Item = &'static str> {
        IDS.iter().filter(move |(flag, _)| self.contains(*flag)).map(|(_, id)| *id)
    }
}

impl From<&str> for ClassSet {
    fn from(class_id: &str) -> Self {
        IDS.iter().find(|(_, id)| *id == class_id).map_or_else(Self::empty, |(flag, _)| *flag)
    }
}
