//! Kernel shared by the registry slices.
//!
//! Keep this crate free of class-specific knowledge. It defines what a class is
//! ([`class::ItemClass`]), how presentations are described ([`view`]), how references to other
//! items are resolved ([`relation`]) and how payloads are checked ([`validation`]).
//!
//! ## Rendering a class
//! ```rust,ignore
//! use georeg_kernel::prelude::*;
//!
//! let cx = ViewContext::new(&store, &registry).with_presentation(&config.presentation);
//! let details = class.detail_view(&payload, &cx)?;
//! println!("{}", georeg_kernel::view::text::render(&details));
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use georeg_kernel::config::load_config;
//! let cfg: georeg_kernel::domain::config::RegistryConfig = load_config(Some("georeg.toml"))?;
//! ```
pub mod class;
pub mod common;
pub mod config;
pub mod context;
pub mod error;
pub mod prelude;
pub mod registry;
pub mod relation;
pub mod update;
pub mod validation;
pub mod view;

pub use georeg_domain as domain;
