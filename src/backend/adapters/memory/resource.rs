//! Resource assembled from named attributes and operations.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::backend::{
    domain::{AttributeInfo, BackendError, ResourceId, ResourceInfo},
    ports::{BackendResult, ManagedResource},
};

type Operation = Box<dyn Fn(&[Value]) -> BackendResult<Value> + Send + Sync>;

struct AttributeSlot {
    value: Value,
    writable: bool,
}

/// Managed resource built from attribute values and operation closures.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use switchboard::backend::adapters::memory::AttributeResource;
/// use switchboard::backend::domain::ResourceId;
/// use switchboard::backend::ports::ManagedResource;
///
/// let id = ResourceId::new("app:type=Cache").expect("valid id");
/// let cache = AttributeResource::new(id)
///     .with_attribute("Size", json!(42))
///     .with_writable_attribute("Limit", json!(100));
///
/// assert_eq!(cache.get_attribute("Size").expect("readable"), json!(42));
/// ```
pub struct AttributeResource {
    id: ResourceId,
    attributes: RwLock<BTreeMap<String, AttributeSlot>>,
    operations: BTreeMap<String, Operation>,
}

impl AttributeResource {
    /// Creates a resource with no attributes or operations.
    #[must_use]
    pub fn new(id: ResourceId) -> Self {
        Self {
            id,
            attributes: RwLock::new(BTreeMap::new()),
            operations: BTreeMap::new(),
        }
    }

    /// Adds a read-only attribute.
    #[must_use]
    pub fn with_attribute(self, name: impl Into<String>, value: Value) -> Self {
        self.with_slot(name.into(), value, false)
    }

    /// Adds an attribute that accepts writes.
    #[must_use]
    pub fn with_writable_attribute(self, name: impl Into<String>, value: Value) -> Self {
        self.with_slot(name.into(), value, true)
    }

    /// Adds an operation.
    #[must_use]
    pub fn with_operation(
        mut self,
        name: impl Into<String>,
        operation: impl Fn(&[Value]) -> BackendResult<Value> + Send + Sync + 'static,
    ) -> Self {
        self.operations.insert(name.into(), Box::new(operation));
        self
    }

    fn with_slot(mut self, name: String, value: Value, writable: bool) -> Self {
        self.attributes
            .get_mut()
            .insert(name, AttributeSlot { value, writable });
        self
    }
}

impl ManagedResource for AttributeResource {
    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn info(&self) -> ResourceInfo {
        let attributes = self
            .attributes
            .read()
            .iter()
            .map(|(name, slot)| AttributeInfo {
                name: name.clone(),
                writable: slot.writable,
            })
            .collect();
        ResourceInfo {
            attributes,
            operations: self.operations.keys().cloned().collect(),
        }
    }

    fn get_attribute(&self, attribute: &str) -> BackendResult<Value> {
        self.attributes
            .read()
            .get(attribute)
            .map(|slot| slot.value.clone())
            .ok_or_else(|| BackendError::attribute_not_found(&self.id, attribute))
    }

    fn set_attribute(&self, attribute: &str, value: Value) -> BackendResult<Value> {
        let mut attributes = self.attributes.write();
        let slot = attributes
            .get_mut(attribute)
            .ok_or_else(|| BackendError::attribute_not_found(&self.id, attribute))?;
        if !slot.writable {
            return Err(BackendError::ReadOnlyAttribute {
                resource: self.id.clone(),
                attribute: attribute.to_owned(),
            });
        }
        Ok(std::mem::replace(&mut slot.value, value))
    }

    fn invoke(&self, operation: &str, arguments: &[Value]) -> BackendResult<Value> {
        let handler =
            self.operations
                .get(operation)
                .ok_or_else(|| BackendError::OperationNotFound {
                    resource: self.id.clone(),
                    operation: operation.to_owned(),
                })?;
        handler(arguments)
    }
}
