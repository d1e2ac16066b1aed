//! Managed resource port.

use crate::backend::domain::{ResourceId, ResourceInfo};
use crate::backend::ports::BackendResult;
use serde_json::Value;

/// A manageable object that a backend can hold.
pub trait ManagedResource: Send + Sync {
    /// Returns the identifier the resource is registered under.
    fn id(&self) -> &ResourceId;

    /// Describes the resource's attributes and operations.
    fn info(&self) -> ResourceInfo;

    /// Reads an attribute.
    ///
    /// # Errors
    ///
    /// Returns [`crate::backend::domain::BackendError::AttributeNotFound`]
    /// for unknown attributes, or the resource's own failure.
    fn get_attribute(&self, attribute: &str) -> BackendResult<Value>;

    /// Writes an attribute and returns the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::backend::domain::BackendError::AttributeNotFound`]
    /// for unknown attributes or
    /// [`crate::backend::domain::BackendError::ReadOnlyAttribute`] for
    /// attributes that refuse writes.
    fn set_attribute(&self, attribute: &str, value: Value) -> BackendResult<Value>;

    /// Invokes an operation with positional arguments.
    ///
    /// # Errors
    ///
    /// Returns [`crate::backend::domain::BackendError::OperationNotFound`]
    /// for unknown operations, or the operation's own failure.
    fn invoke(&self, operation: &str, arguments: &[Value]) -> BackendResult<Value>;
}
