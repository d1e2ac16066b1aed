//! Bridge facade wiring discovery, dispatch and history together.

use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::backend::domain::{BackendDomainError, ResourceId};
use crate::backend::ports::{BackendSet, DiscoveryError, ManagedResource};
use crate::backend::services::{AdminError, BackendDiscovery};
use crate::config::SwitchboardConfig;
use crate::dispatch::adapters::handlers;
use crate::dispatch::domain::{DispatchResult, Request, Response};
use crate::dispatch::ports::RequestHandler;
use crate::dispatch::services::RequestDispatcher;
use crate::history::adapters::HistoryAdminResource;
use crate::history::services::HistoryStore;

/// Errors raised while starting or stopping the bridge.
#[derive(Debug, Error)]
pub enum SwitchboardError {
    /// Backend discovery failed.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    /// Registering or unregistering the history resource failed.
    #[error(transparent)]
    Admin(#[from] AdminError),
    /// The configured history resource identifier is unusable.
    #[error("invalid history resource id: {0}")]
    InvalidResourceId(#[from] BackendDomainError),
}

/// Running bridge instance.
pub struct Switchboard<C>
where
    C: Clock + Send + Sync + 'static,
{
    dispatcher: RequestDispatcher,
    history: Arc<HistoryStore<C>>,
    admin_resource: Option<ResourceId>,
}

impl<C> Switchboard<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Starts the bridge over already discovered backends.
    ///
    /// Registers the history resource on the first backend unless the
    /// configuration disables it.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchboardError`] when the history resource cannot be
    /// registered.
    pub fn start(
        discovery: BackendDiscovery,
        config: &SwitchboardConfig,
        clock: Arc<C>,
    ) -> Result<Self, SwitchboardError> {
        let dispatcher = RequestDispatcher::new(discovery);
        let history = Arc::new(HistoryStore::new(config.history, clock));

        let admin_resource = if config.admin.register_history_resource {
            let id = ResourceId::new(config.admin.resource_id.as_str())?;
            let resource: Arc<dyn ManagedResource> =
                Arc::new(HistoryAdminResource::new(id, Arc::clone(&history)));
            Some(dispatcher.register_resource(resource)?)
        } else {
            None
        };

        info!(
            backends = dispatcher.backends().len(),
            max_entries = config.history.max_entries,
            "switchboard started"
        );
        Ok(Self {
            dispatcher,
            history,
            admin_resource,
        })
    }

    /// Executes `request` with the built-in handler for its kind.
    ///
    /// # Errors
    ///
    /// Returns the dispatcher's error when no backend could serve it.
    pub fn execute(&self, request: &Request) -> DispatchResult<Response> {
        self.handle_with(handlers::for_kind(request.kind()), request)
    }

    /// Executes `request` with a caller-supplied handler.
    ///
    /// # Errors
    ///
    /// Returns the dispatcher's error when no backend could serve it.
    pub fn handle_with(
        &self,
        handler: &dyn RequestHandler,
        request: &Request,
    ) -> DispatchResult<Response> {
        let value = self.dispatcher.dispatch(handler, request)?;
        let mut response = Response::new(value);
        self.history.update_and_record(request, &mut response);
        Ok(response)
    }

    /// Returns the discovered backends.
    #[must_use]
    pub const fn backends(&self) -> &BackendSet {
        self.dispatcher.backends()
    }

    /// Returns the dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &RequestDispatcher {
        &self.dispatcher
    }

    /// Returns the history store.
    #[must_use]
    pub const fn history(&self) -> &Arc<HistoryStore<C>> {
        &self.history
    }

    /// Returns the identifier of the registered history resource.
    #[must_use]
    pub const fn admin_resource(&self) -> Option<&ResourceId> {
        self.admin_resource.as_ref()
    }

    /// Stops the bridge, unregistering the history resource.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchboardError::Admin`] when unregistration fails.
    pub fn shutdown(self) -> Result<(), SwitchboardError> {
        if let Some(id) = &self.admin_resource {
            self.dispatcher.unregister_resource(id)?;
        }
        info!("switchboard stopped");
        Ok(())
    }
}
