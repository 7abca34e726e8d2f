//! Everything a class slice needs in one import.

pub use crate::class::{BoxFuture, ClassMeta, DynItemClass, ItemClass, ItemData, ListItem};
pub use crate::common;
pub use crate::context::{
    ItemDataState, RegisterItemData, RelatedClassConfiguration, ViewContext,
};
pub use crate::error::ClassError;
pub use crate::registry::{ClassRegistry, RegistryError};
pub use crate::relation::{RelatedItem, RelationError, RelationMode, related_list};
pub use crate::update::{Layered, OnChange};
pub use crate::validation::{RefSlot, ValidationPolicy, Violation};
pub use crate::view::{Control, Form, Node, Property, fields};
pub use georeg_domain::{ClassSet, CommonItemData, DEFAULT_EXTENT, Extent, IdRef, ItemRef};
