//! Handler port: per-kind request execution.

use serde_json::Value;

use crate::backend::{
    domain::BackendError,
    ports::{BackendResult, BackendSet, ManagementBackend},
};
use crate::dispatch::domain::{Request, RequestKind};

/// Executes one kind of request against backends.
///
/// Handlers answering from a single backend implement [`Self::handle`] and
/// let the dispatcher try each backend in turn. Handlers that aggregate over
/// every backend return `true` from [`Self::handles_all_backends`] and
/// implement [`Self::handle_all`] instead.
pub trait RequestHandler: Send + Sync {
    /// Returns the request kind this handler serves.
    fn kind(&self) -> RequestKind;

    /// Whether the handler consumes the whole backend set at once.
    fn handles_all_backends(&self) -> bool {
        false
    }

    /// Handles a request against one backend.
    ///
    /// # Errors
    ///
    /// Returns the backend's error; not-found kinds let the dispatcher try
    /// the next backend.
    fn handle(&self, backend: &dyn ManagementBackend, request: &Request) -> BackendResult<Value>;

    /// Handles a request against every backend in one call.
    ///
    /// # Errors
    ///
    /// The default implementation returns [`BackendError::Unsupported`].
    fn handle_all(&self, _backends: &BackendSet, request: &Request) -> BackendResult<Value> {
        Err(BackendError::Unsupported(format!(
            "{} requests cannot be broadcast",
            request.kind()
        )))
    }
}
