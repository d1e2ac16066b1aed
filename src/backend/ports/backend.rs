//! Backend port: one registry of manageable resources.

use crate::backend::domain::{BackendError, BackendId, ResourceId, ResourceInfo};
use crate::backend::ports::ManagedResource;
use serde_json::Value;
use std::sync::Arc;

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Shared handle to a backend.
pub type Backend = Arc<dyn ManagementBackend>;

/// Contract of a management registry inside the host runtime.
///
/// Implementations are called synchronously from request threads and must
/// be safe to share between them.
pub trait ManagementBackend: Send + Sync {
    /// Returns the stable identity of this backend.
    fn id(&self) -> BackendId;

    /// Returns a human-readable backend name for diagnostics.
    fn name(&self) -> &str;

    /// Fetches metadata for a resource.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::ResourceNotFound`] when this backend does not
    /// hold the resource, or [`BackendError::Introspection`] when metadata
    /// cannot be produced.
    fn resource_info(&self, resource: &ResourceId) -> BackendResult<ResourceInfo>;

    /// Lists the identifiers of every resource held by this backend.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Introspection`] when the registry cannot be
    /// enumerated.
    fn resource_ids(&self) -> BackendResult<Vec<ResourceId>>;

    /// Reads one attribute of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::ResourceNotFound`],
    /// [`BackendError::AttributeNotFound`], or the resource's own failure.
    fn read_attribute(&self, resource: &ResourceId, attribute: &str) -> BackendResult<Value>;

    /// Writes one attribute of a resource, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::ResourceNotFound`],
    /// [`BackendError::AttributeNotFound`],
    /// [`BackendError::ReadOnlyAttribute`], or the resource's own failure.
    fn write_attribute(
        &self,
        resource: &ResourceId,
        attribute: &str,
        value: Value,
    ) -> BackendResult<Value>;

    /// Invokes an operation on a resource.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::ResourceNotFound`],
    /// [`BackendError::OperationNotFound`], or the resource's own failure.
    fn invoke(
        &self,
        resource: &ResourceId,
        operation: &str,
        arguments: &[Value],
    ) -> BackendResult<Value>;

    /// Registers a resource with this backend and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::AlreadyRegistered`] when the identifier is
    /// taken.
    fn register(&self, resource: Arc<dyn ManagedResource>) -> BackendResult<ResourceId>;

    /// Removes a resource from this backend.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::ResourceNotFound`] when nothing is registered
    /// under the identifier.
    fn unregister(&self, resource: &ResourceId) -> BackendResult<()>;
}
