//! Dispatch error taxonomy.

use thiserror::Error;

use crate::backend::domain::{BackendError, ResourceId};
use crate::dispatch::domain::Request;

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Errors raised while dispatching a request.
///
/// `ResourceNotFound` and `AttributeNotFound` are the recoverable kinds
/// surfaced after every backend was tried; `Fatal` wraps anything else and
/// is never retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No backend holds the resource.
    #[error("resource {0} not found")]
    ResourceNotFound(ResourceId),

    /// The resource exists somewhere but not with this attribute.
    #[error("attribute '{attribute}' not found on resource {resource}")]
    AttributeNotFound {
        /// Resource that was addressed.
        resource: ResourceId,
        /// Missing attribute name.
        attribute: String,
    },

    /// An unexpected backend failure.
    #[error("failed to handle '{attribute}' on resource {resource}: {source}")]
    Fatal {
        /// Resource that was addressed, or `-`.
        resource: String,
        /// Attribute or operation name, or `-`.
        attribute: String,
        /// Underlying backend failure.
        #[source]
        source: BackendError,
    },

    /// The metadata refresh probe failed.
    #[error("metadata refresh for resource {resource} failed: {source}")]
    Refresh {
        /// Resource that was probed.
        resource: ResourceId,
        /// Underlying backend failure.
        #[source]
        source: BackendError,
    },

    /// The backend set is empty.
    #[error("no management backend available")]
    NoBackend,
}

impl DispatchError {
    /// Classifies a backend error raised while handling `request`.
    #[must_use]
    pub fn from_backend(source: BackendError, request: &Request) -> Self {
        match source {
            BackendError::ResourceNotFound(resource) => Self::ResourceNotFound(resource),
            BackendError::AttributeNotFound {
                resource,
                attribute,
            } => Self::AttributeNotFound {
                resource,
                attribute,
            },
            source => Self::fatal(source, request),
        }
    }

    /// Wraps a backend error as fatal for `request`.
    #[must_use]
    pub fn fatal(source: BackendError, request: &Request) -> Self {
        Self::Fatal {
            resource: request.resource_label(),
            attribute: request.name_label(),
            source,
        }
    }

    /// Returns `true` for every kind that is not a not-found error.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal { .. } | Self::Refresh { .. } | Self::NoBackend)
    }
}
