//! # Domain Models
//!
//! Pure registry data shapes shared by every item class: reference descriptors, class
//! identifiers, extents, the fields common to every entity, and configuration.
//! Keep it lean: no I/O and no presentation logic, just data and small pure helpers.

pub mod classes;
pub mod common;
pub mod config;
pub mod extent;
pub mod reference;

pub use classes::ClassSet;
pub use common::CommonItemData;
pub use extent::{DEFAULT_EXTENT, Extent};
pub use reference::{IdRef, ItemRef};
