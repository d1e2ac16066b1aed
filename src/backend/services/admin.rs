//! Registration of administrative resources.

use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::backend::{
    domain::{BackendError, ResourceId},
    ports::{BackendSet, ManagedResource},
};

/// Errors returned by administrative registration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdminError {
    /// The backend set is empty.
    #[error("no management backend initialised yet")]
    NoBackend,
    /// The backend rejected the call.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Result type for administrative registration.
pub type AdminResult<T> = Result<T, AdminError>;

/// Registers administrative resources on the first available backend.
#[derive(Debug, Clone)]
pub struct AdminRegistrar {
    backends: BackendSet,
}

impl AdminRegistrar {
    /// Creates a registrar over a backend set.
    #[must_use]
    pub const fn new(backends: BackendSet) -> Self {
        Self { backends }
    }

    /// Registers a resource on the first backend.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NoBackend`] when the set is empty, or the
    /// backend's own error.
    pub fn register(&self, resource: Arc<dyn ManagedResource>) -> AdminResult<ResourceId> {
        let backend = self.backends.first().ok_or(AdminError::NoBackend)?;
        let id = backend.register(resource)?;
        info!(resource = %id, backend = backend.name(), "registered administrative resource");
        Ok(id)
    }

    /// Unregisters a resource from the first backend.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NoBackend`] when the set is empty, or the
    /// backend's own error.
    pub fn unregister(&self, resource: &ResourceId) -> AdminResult<()> {
        let backend = self.backends.first().ok_or(AdminError::NoBackend)?;
        backend.unregister(resource)?;
        info!(resource = %resource, backend = backend.name(), "unregistered administrative resource");
        Ok(())
    }
}
