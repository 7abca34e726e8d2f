//! Class registration keyed by stable class id.

use crate::class::{DynItemClass, Erased, ItemClass};
use crate::context::RelatedClassConfiguration;
use crate::error::ClassError;
use fxhash::FxHashMap;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

#[georeg_derive::georeg_error]
pub enum RegistryError {
    #[error("Class registration error{}: `{class_id}` is already registered", format_context(.context))]
    Duplicate { class_id: &'static str, context: Option<Cow<'static, str>> },
}

/// Every class a host knows, by id.
#[derive(Debug, Default, Clone)]
pub struct ClassRegistry {
    classes: FxHashMap<&'static str, Arc<dyn DynItemClass>>,
}

impl ClassRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a typed class.
    ///
    /// # Errors
    /// Fails if a class with the same id is already registered.
    pub fn register<C: ItemClass>(&mut self, class: C) -> Result<&mut Self, RegistryError> {
        self.register_dyn(Arc::new(Erased(class)))
    }

    /// Registers an already erased class.
    ///
    /// # Errors
    /// Fails if a class with the same id is already registered.
    pub fn register_dyn(
        &mut self,
        class: Arc<dyn DynItemClass>,
    ) -> Result<&mut Self, RegistryError> {
        let class_id = class.meta().id;
        if self.classes.contains_key(class_id) {
            return Err(RegistryError::Duplicate { class_id, context: None });
        }
        debug!(class_id, "Registered item class");
        self.classes.insert(class_id, class);
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, class_id: &str) -> Option<&Arc<dyn DynItemClass>> {
        self.classes.get(class_id)
    }

    /// Looks up a class, reporting unknown ids as errors.
    ///
    /// # Errors
    /// Fails if no class has the given id.
    pub fn require(&self, class_id: &str) -> Result<&Arc<dyn DynItemClass>, ClassError> {
        self.get(class_id)
            .ok_or_else(|| ClassError::UnknownClass { class_id: class_id.to_owned(), context: None })
    }

    /// Registered classes ordered by id.
    pub fn classes(&self) -> impl Iterator<Item = &Arc<dyn DynItemClass>> {
        let mut classes: Vec<_> = self.classes.values().collect();
        classes.sort_by_key(|class| class.meta().id);
        classes.into_iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl RelatedClassConfiguration for ClassRegistry {
    fn related_item_class_configuration(&self, class_id: &str) -> Option<Arc<dyn DynItemClass>> {
        self.get(class_id).cloned()
    }
}
