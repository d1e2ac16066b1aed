//! Error types for backend domain values and backend operations.

use super::ResourceId;
use thiserror::Error;

/// Errors returned while constructing backend domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendDomainError {
    /// The resource identifier is empty after trimming.
    #[error("resource identifier must not be empty")]
    EmptyResourceId,
}

/// Errors returned by management backends and the resources they hold.
///
/// Only [`BackendError::ResourceNotFound`] and
/// [`BackendError::AttributeNotFound`] are recoverable: a different backend
/// may still answer the request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// The backend does not hold the resource.
    #[error("resource {0} not found")]
    ResourceNotFound(ResourceId),

    /// The resource exists but has no attribute with this name.
    #[error("attribute '{attribute}' not found on resource {resource}")]
    AttributeNotFound {
        /// Resource that was addressed.
        resource: ResourceId,
        /// Missing attribute name.
        attribute: String,
    },

    /// The resource exists but has no operation with this name.
    #[error("operation '{operation}' not found on resource {resource}")]
    OperationNotFound {
        /// Resource that was addressed.
        resource: ResourceId,
        /// Missing operation name.
        operation: String,
    },

    /// The attribute exists but does not accept writes.
    #[error("attribute '{attribute}' on resource {resource} is read-only")]
    ReadOnlyAttribute {
        /// Resource that was addressed.
        resource: ResourceId,
        /// Read-only attribute name.
        attribute: String,
    },

    /// A resource with the same identifier is already registered.
    #[error("resource {0} is already registered")]
    AlreadyRegistered(ResourceId),

    /// The request carried an argument the resource cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Metadata about the resource could not be obtained.
    #[error("introspection failed: {0}")]
    Introspection(String),

    /// The resource itself failed while performing the operation.
    #[error("operation failed: {0}")]
    Operation(String),

    /// The backend or handler does not support the requested call.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl BackendError {
    /// Returns `true` for errors that allow trying the next backend.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ResourceNotFound(_) | Self::AttributeNotFound { .. }
        )
    }

    /// Builds an [`BackendError::AttributeNotFound`] for a resource.
    #[must_use]
    pub fn attribute_not_found(resource: &ResourceId, attribute: impl Into<String>) -> Self {
        Self::AttributeNotFound {
            resource: resource.clone(),
            attribute: attribute.into(),
        }
    }

    /// Wraps a failure raised by the resource itself.
    #[must_use]
    pub fn operation(message: impl Into<String>) -> Self {
        Self::Operation(message.into())
    }
}
