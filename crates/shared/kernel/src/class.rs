//! The class definition contract.
//!
//! Every registry class (a CRS kind, a datum kind, ...) implements [`ItemClass`] over its typed
//! payload. Hosts work with [`DynItemClass`], the JSON-facing erasure registered in the
//! [`ClassRegistry`](crate::registry::ClassRegistry).

use crate::common;
use crate::context::ViewContext;
use crate::error::{ClassError, ClassErrorExt};
use crate::update::OnChange;
use crate::validation::{RefSlot, ValidationPolicy, Violation};
use crate::view::{Form, Node};
use georeg_domain::CommonItemData;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::future::{self, Future};
use std::pin::Pin;
use tracing::{debug, warn};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Static description of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassMeta {
    pub title: &'static str,
    pub description: &'static str,
    /// Stable identifier used in reference descriptors.
    pub id: &'static str,
    pub alternative_names: &'static [&'static str],
}

/// A row of a list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub identifier: u64,
    pub name: String,
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.trim().is_empty() { "Unnamed item" } else { self.name.as_str() };
        if self.identifier == 0 { f.write_str(name) } else { write!(f, "{name} ({})", self.identifier) }
    }
}

/// A persisted item payload.
pub trait ItemData:
    Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    fn common(&self) -> &CommonItemData;

    /// References held by the payload, for validation. Absent fields are not listed.
    fn references(&self) -> Vec<RefSlot> {
        Vec::new()
    }

    /// Normalized copy. Applying it twice gives the same value as applying it once.
    #[must_use]
    fn sanitized(self) -> Self;
}

/// A registry class over a typed payload.
pub trait ItemClass: fmt::Debug + Send + Sync + 'static {
    type Data: ItemData;

    fn meta(&self) -> &'static ClassMeta;

    /// Payload of a freshly created item.
    fn defaults(&self) -> Self::Data;

    fn policy(&self) -> ValidationPolicy {
        ValidationPolicy::default()
    }

    fn list_item_view(&self, item: &Self::Data) -> ListItem {
        common::list_item_view(item.common())
    }

    fn detail_view(&self, item: &Self::Data, cx: &ViewContext<'_>) -> Vec<Node>;

    /// Form for `item`; read-only when `on_change` is `None`.
    fn edit_view(
        &self,
        item: &Self::Data,
        on_change: Option<OnChange<Self::Data>>,
        cx: &ViewContext<'_>,
    ) -> Form;

    /// Reasons `candidate` would be rejected.
    fn diagnose(&self, candidate: &Self::Data) -> Vec<Violation> {
        self.policy().check(candidate)
    }

    fn validate_payload(&self, candidate: &Self::Data) -> impl Future<Output = bool> + Send {
        let violations = self.diagnose(candidate);
        if !violations.is_empty() {
            debug!(class = self.meta().id, ?violations, "Payload rejected");
        }
        future::ready(violations.is_empty())
    }

    fn sanitize_payload(&self, candidate: Self::Data) -> impl Future<Output = Self::Data> + Send {
        future::ready(candidate.sanitized())
    }
}

/// JSON-facing class surface used by hosts and for nested previews.
pub trait DynItemClass: fmt::Debug + Send + Sync {
    fn meta(&self) -> &'static ClassMeta;

    /// # Errors
    /// Fails only if the defaults cannot be encoded.
    fn defaults(&self) -> Result<Value, ClassError>;

    /// # Errors
    /// Fails if `data` does not decode as this class's payload.
    fn list_item_view(&self, data: &Value) -> Result<ListItem, ClassError>;

    /// # Errors
    /// Fails if `data` does not decode as this class's payload.
    fn detail_view(&self, data: &Value, cx: &ViewContext<'_>) -> Result<Vec<Node>, ClassError>;

    /// # Errors
    /// Fails if `data` does not decode as this class's payload.
    fn edit_view(
        &self,
        data: &Value,
        on_change: Option<OnChange<Value>>,
        cx: &ViewContext<'_>,
    ) -> Result<Form, ClassError>;

    /// # Errors
    /// Fails if `candidate` does not decode as this class's payload.
    fn diagnose(&self, candidate: &Value) -> Result<Vec<Violation>, ClassError>;

    /// `false` for undecodable payloads.
    fn validate_payload<'a>(&'a self, candidate: &'a Value) -> BoxFuture<'a, bool>;

    /// Undecodable payloads come back unchanged.
    fn sanitize_payload<'a>(&'a self, candidate: Value) -> BoxFuture<'a, Value>;
}

/// Adapts an [`ItemClass`] to [`DynItemClass`].
#[derive(Debug)]
pub struct Erased<C>(pub C);

impl<C: ItemClass> Erased<C> {
    fn decode(&self, data: &Value) -> Result<C::Data, ClassError> {
        C::Data::deserialize(data).context(self.0.meta().id)
    }
}

impl<C: ItemClass> DynItemClass for Erased<C> {
    fn meta(&self) -> &'static ClassMeta {
        self.0.meta()
    }

    fn defaults(&self) -> Result<Value, ClassError> {
        serde_json::to_value(self.0.defaults()).context(self.0.meta().id)
    }

    fn list_item_view(&self, data: &Value) -> Result<ListItem, ClassError> {
        Ok(self.0.list_item_view(&self.decode(data)?))
    }

    fn detail_view(&self, data: &Value, cx: &ViewContext<'_>) -> Result<Vec<Node>, ClassError> {
        Ok(self.0.detail_view(&self.decode(data)?, cx))
    }

    fn edit_view(
        &self,
        data: &Value,
        on_change: Option<OnChange<Value>>,
        cx: &ViewContext<'_>,
    ) -> Result<Form, ClassError> {
        let item = self.decode(data)?;
        let class_id = self.0.meta().id;
        let on_change = on_change.map(|on_change| {
            OnChange::new(move |item: C::Data| match serde_json::to_value(&item) {
                Ok(value) => on_change.emit(value),
                Err(err) => warn!(class = class_id, "Edited payload does not encode: {err}"),
            })
        });
        Ok(self.0.edit_view(&item, on_change, cx))
    }

    fn diagnose(&self, candidate: &Value) -> Result<Vec<Violation>, ClassError> {
        Ok(self.0.diagnose(&self.decode(candidate)?))
    }

    fn validate_payload<'a>(&'a self, candidate: &'a Value) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            match self.decode(candidate) {
                Ok(item) => self.0.validate_payload(&item).await,
                Err(err) => {
                    debug!(class = self.0.meta().id, "Payload rejected: {err}");
                    false
                },
            }
        })
    }

    fn sanitize_payload<'a>(&'a self, candidate: Value) -> BoxFuture<'a, Value> {
        Box::pin(async move {
            let item = match self.decode(&candidate) {
                Ok(item) => item,
                Err(err) => {
                    debug!(class = self.0.meta().id, "Payload left unsanitized: {err}");
                    return candidate;
                },
            };
            let sanitized = self.0.sanitize_payload(item).await;
            serde_json::to_value(&sanitized).unwrap_or(candidate)
        })
    }
}
