//! # Coordinate Reference Systems
//!
//! Five CRS classes over three payload shapes:
//!
//! * [`CompoundCrs`] (`crs--compound`): a horizontal CRS paired with a vertical CRS.
//! * [`ProjectedCrs`] (`crs--projected`): a non-compound CRS with nothing of its own.
//! * [`VerticalCrs`], [`GeodeticCrs`], [`EngineeringCrs`]: non-compound CRSs bound to a datum
//!   of the matching family, one generic implementation over [`kind::DatumKind`].
//!
//! Presentations are layered: common entity fields, then CRS fields (scope, extent), then
//! non-compound fields (coordinate system, base CRS, operation), then the kind's own fields.

pub mod classes;
pub mod data;
pub mod kind;
pub mod views;

pub use classes::{CompoundCrs, DatumBoundCrs, EngineeringCrs, GeodeticCrs, ProjectedCrs, VerticalCrs};
pub use data::{
    CompoundCrsData, CrsData, DatumCrsData, EngineeringCrsData, GeodeticCrsData,
    NonCompoundCrsData, ProjectedCrsData, VerticalCrsData,
};

use georeg_kernel::registry::{ClassRegistry, RegistryError};
use georeg_kernel::validation::ValidationPolicy;

/// Registers every CRS class.
///
/// # Errors
/// Fails if one of the CRS class ids is already registered.
pub fn register(registry: &mut ClassRegistry, policy: ValidationPolicy) -> Result<(), RegistryError> {
    registry
        .register(CompoundCrs::new(policy))?
        .register(ProjectedCrs::new(policy))?
        .register(VerticalCrs::new(policy))?
        .register(GeodeticCrs::new(policy))?
        .register(EngineeringCrs::new(policy))?;

    tracing::debug!("CRS classes registered");
    Ok(())
}
