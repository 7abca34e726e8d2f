//! # Datums
//!
//! Reference frames a CRS is anchored to. All three families share scope, extent, anchor
//! definition, publication date and an optional coordinate reference epoch; a geodetic datum
//! also names its ellipsoid and prime meridian.

pub mod classes;
pub mod data;
pub mod views;

pub use classes::{FrameDatum, GeodeticDatum};
pub use data::{DatumData, GeodeticDatumData};

use georeg_kernel::registry::{ClassRegistry, RegistryError};
use georeg_kernel::validation::ValidationPolicy;

/// Registers the geodetic, vertical and engineering datum classes.
///
/// # Errors
/// Fails if one of the datum class ids is already registered.
pub fn register(registry: &mut ClassRegistry, policy: ValidationPolicy) -> Result<(), RegistryError> {
    registry
        .register(GeodeticDatum::new(policy))?
        .register(FrameDatum::vertical(policy))?
        .register(FrameDatum::engineering(policy))?;

    tracing::debug!("Datum classes registered");
    Ok(())
}
