//! # Coordinate Operation Methods
//!
//! A method names the algorithm of a conversion or transformation: a formula and the ordered
//! list of parameters it takes, each a `coordinate-op-parameter` item.

pub mod class;
pub mod data;

pub use class::CoordinateOpMethod;
pub use data::CoordinateOpMethodData;

use georeg_kernel::registry::{ClassRegistry, RegistryError};
use georeg_kernel::validation::ValidationPolicy;

/// # Errors
/// Fails if `coordinate-op-method` is already registered.
pub fn register(registry: &mut ClassRegistry, policy: ValidationPolicy) -> Result<(), RegistryError> {
    registry.register(CoordinateOpMethod::new(policy))?;
    tracing::debug!("Coordinate operation method class registered");
    Ok(())
}
