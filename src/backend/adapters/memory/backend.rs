//! In-memory management backend.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::backend::{
    domain::{BackendError, BackendId, ResourceId, ResourceInfo},
    ports::{BackendResult, ManagedResource, ManagementBackend},
};

/// Thread-safe registry of resources held in process memory.
///
/// Used as the always-present fallback backend and as the registry behind
/// in-process platform integrations.
pub struct InMemoryBackend {
    id: BackendId,
    name: String,
    resources: RwLock<BTreeMap<ResourceId, Arc<dyn ManagedResource>>>,
}

impl InMemoryBackend {
    /// Creates an empty backend with the given diagnostic name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BackendId::new(),
            name: name.into(),
            resources: RwLock::new(BTreeMap::new()),
        }
    }

    /// Creates the default process-wide backend.
    #[must_use]
    pub fn platform() -> Self {
        Self::new("platform")
    }

    /// Returns the number of registered resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.read().len()
    }

    /// Returns `true` when no resource is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.read().is_empty()
    }

    fn lookup(&self, resource: &ResourceId) -> BackendResult<Arc<dyn ManagedResource>> {
        self.resources
            .read()
            .get(resource)
            .cloned()
            .ok_or_else(|| BackendError::ResourceNotFound(resource.clone()))
    }
}

impl ManagementBackend for InMemoryBackend {
    fn id(&self) -> BackendId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn resource_info(&self, resource: &ResourceId) -> BackendResult<ResourceInfo> {
        Ok(self.lookup(resource)?.info())
    }

    fn resource_ids(&self) -> BackendResult<Vec<ResourceId>> {
        Ok(self.resources.read().keys().cloned().collect())
    }

    fn read_attribute(&self, resource: &ResourceId, attribute: &str) -> BackendResult<Value> {
        self.lookup(resource)?.get_attribute(attribute)
    }

    fn write_attribute(
        &self,
        resource: &ResourceId,
        attribute: &str,
        value: Value,
    ) -> BackendResult<Value> {
        self.lookup(resource)?.set_attribute(attribute, value)
    }

    fn invoke(
        &self,
        resource: &ResourceId,
        operation: &str,
        arguments: &[Value],
    ) -> BackendResult<Value> {
        self.lookup(resource)?.invoke(operation, arguments)
    }

    fn register(&self, resource: Arc<dyn ManagedResource>) -> BackendResult<ResourceId> {
        let id = resource.id().clone();
        let mut resources = self.resources.write();
        if resources.contains_key(&id) {
            return Err(BackendError::AlreadyRegistered(id));
        }
        resources.insert(id.clone(), resource);
        Ok(id)
    }

    fn unregister(&self, resource: &ResourceId) -> BackendResult<()> {
        self.resources
            .write()
            .remove(resource)
            .map(|_| ())
            .ok_or_else(|| BackendError::ResourceNotFound(resource.clone()))
    }
}
