//! Facade crate for the geodetic registry item classes.
//! Re-exports domain/kernel primitives and assembles the class registry.
//! Keep this crate thin: it should compose other crates, not implement class logic.
//!
//! ## Usage
//! - Add `georeg` with the class families you need (all by default).
//! - Call [`registry`] with the host's [`RegistryConfig`](domain::config::RegistryConfig).

pub use georeg_domain as domain;
pub use georeg_kernel as kernel;

use georeg_domain::config::RegistryConfig;
use georeg_kernel::registry::{ClassRegistry, RegistryError};
use georeg_kernel::validation::ValidationPolicy;
use tracing::info;

/// Class families, re-exported by Cargo feature.
pub mod features {
    #[cfg(feature = "coordinate-op-method")]
    pub use georeg_coordinate_op_method as coordinate_op_method;
    #[cfg(feature = "coordinate-sys-axis")]
    pub use georeg_coordinate_sys_axis as coordinate_sys_axis;
    #[cfg(feature = "crs")]
    pub use georeg_crs as crs;
    #[cfg(feature = "datum")]
    pub use georeg_datum as datum;

    /// Build-time enabled families.
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "crs")]
        "crs",
        #[cfg(feature = "datum")]
        "datum",
        #[cfg(feature = "coordinate-op-method")]
        "coordinate-op-method",
        #[cfg(feature = "coordinate-sys-axis")]
        "coordinate-sys-axis",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Builds a registry holding every enabled class, validated per `config.validation`.
///
/// # Errors
/// Returns an error if two families register the same class id.
pub fn registry(config: &RegistryConfig) -> Result<ClassRegistry, RegistryError> {
    let policy = ValidationPolicy::from(&config.validation);
    let mut registry = ClassRegistry::new();

    #[cfg(feature = "crs")]
    features::crs::register(&mut registry, policy)?;
    #[cfg(feature = "datum")]
    features::datum::register(&mut registry, policy)?;
    #[cfg(feature = "coordinate-op-method")]
    features::coordinate_op_method::register(&mut registry, policy)?;
    #[cfg(feature = "coordinate-sys-axis")]
    features::coordinate_sys_axis::register(&mut registry, policy)?;

    info!(
        classes = registry.len(),
        enforce_reference_targets = policy.enforce_reference_targets,
        "Class registry ready"
    );
    Ok(registry)
}
