//! Request dispatch service.
//!
//! Provides [`RequestDispatcher`], which routes a request to the backend set
//! produced by discovery and applies the fallback and error-priority rules.

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::backend::{
    domain::{BackendError, ResourceId},
    ports::{BackendSet, ManagedResource},
    services::{AdminRegistrar, AdminResult, BackendDiscovery},
};
use crate::dispatch::{
    domain::{DispatchError, DispatchResult, Request},
    ports::RequestHandler,
};

/// Routes requests to the discovered backends.
#[derive(Debug, Clone)]
pub struct RequestDispatcher {
    discovery: BackendDiscovery,
    registrar: AdminRegistrar,
}

impl RequestDispatcher {
    /// Creates a dispatcher over a completed discovery.
    #[must_use]
    pub fn new(discovery: BackendDiscovery) -> Self {
        let registrar = AdminRegistrar::new(discovery.backends().clone());
        Self {
            discovery,
            registrar,
        }
    }

    /// Returns the backend set requests are dispatched against.
    #[must_use]
    pub const fn backends(&self) -> &BackendSet {
        self.discovery.backends()
    }

    /// Dispatches `request` using `handler`.
    ///
    /// Broadcast handlers are called once with the whole backend set. Other
    /// handlers are tried against each backend in discovery order; the first
    /// success wins. When every backend reports a not-found error, an
    /// attribute-not-found takes priority over a resource-not-found.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::AttributeNotFound`] or
    /// [`DispatchError::ResourceNotFound`] when no backend could answer,
    /// [`DispatchError::Fatal`] for any other backend failure, or
    /// [`DispatchError::Refresh`] when the metadata refresh probe fails.
    pub fn dispatch(
        &self,
        handler: &dyn RequestHandler,
        request: &Request,
    ) -> DispatchResult<Value> {
        if handler.handles_all_backends() {
            return handler
                .handle_all(self.backends(), request)
                .map_err(|err| DispatchError::from_backend(err, request));
        }

        self.refresh_metadata(request)?;

        let mut attribute_error = None;
        let mut resource_error = None;
        for (position, backend) in self.backends().iter().enumerate() {
            match handler.handle(backend.as_ref(), request) {
                Ok(value) => return Ok(value),
                Err(err @ BackendError::AttributeNotFound { .. }) => {
                    debug!(position, error = %err, "backend lacks attribute, trying next");
                    attribute_error = Some(err);
                }
                Err(err @ BackendError::ResourceNotFound(_)) => {
                    debug!(position, error = %err, "backend lacks resource, trying next");
                    resource_error = Some(err);
                }
                Err(err) => {
                    warn!(
                        position,
                        resource = %request.resource_label(),
                        attribute = %request.name_label(),
                        error = %err,
                        "backend failed, aborting dispatch"
                    );
                    return Err(DispatchError::fatal(err, request));
                }
            }
        }

        Err(attribute_error
            .or(resource_error)
            .map_or(DispatchError::NoBackend, |err| {
                DispatchError::from_backend(err, request)
            }))
    }

    /// Registers an administrative resource on the first backend.
    ///
    /// # Errors
    ///
    /// Returns the registrar's error.
    pub fn register_resource(&self, resource: Arc<dyn ManagedResource>) -> AdminResult<ResourceId> {
        self.registrar.register(resource)
    }

    /// Unregisters an administrative resource from the first backend.
    ///
    /// # Errors
    ///
    /// Returns the registrar's error.
    pub fn unregister_resource(&self, resource: &ResourceId) -> AdminResult<()> {
        self.registrar.unregister(resource)
    }

    /// Probes backends for the request's resource so that platforms with a
    /// stale metadata cache refetch it before the real call.
    fn refresh_metadata(&self, request: &Request) -> DispatchResult<()> {
        if !self.discovery.requires_metadata_refresh() {
            return Ok(());
        }
        let Some(resource) = request.resource() else {
            return Ok(());
        };
        for backend in self.backends() {
            match backend.resource_info(resource) {
                Ok(_) => return Ok(()),
                Err(BackendError::ResourceNotFound(_)) => {}
                Err(source) => {
                    return Err(DispatchError::Refresh {
                        resource: resource.clone(),
                        source,
                    });
                }
            }
        }
        Ok(())
    }
}
