//! Shared world state for history tracking BDD scenarios.

use serde_json::{Value, json};
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use switchboard::{
    Switchboard,
    backend::{
        adapters::memory::{AttributeResource, InMemoryBackend},
        domain::ResourceId,
        ports::{Backend, ManagementBackend},
        services::BackendDiscovery,
    },
    config::SwitchboardConfig,
    dispatch::domain::{Request, Response},
    history::domain::HistoryKey,
};

/// Resource holding the tracked attribute.
pub const COUNTER_RESOURCE: &str = "app:name=counter";
/// Tracked attribute name.
pub const COUNTER_ATTRIBUTE: &str = "Count";

/// Scenario world for history tracking behaviour tests.
pub struct HistoryWorld {
    /// Backend the switchboard runs over.
    pub backend: Arc<InMemoryBackend>,
    /// Running switchboard, absent after shutdown.
    pub switchboard: Option<Switchboard<DefaultClock>>,
    /// Response to the most recent counter read.
    pub last_response: Option<Response>,
}

impl HistoryWorld {
    /// Creates a world with a bare backend and no switchboard.
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: Arc::new(InMemoryBackend::platform()),
            switchboard: None,
            last_response: None,
        }
    }

    /// Registers the counter resource and starts the switchboard.
    ///
    /// # Errors
    ///
    /// Returns an error when discovery or startup fails.
    pub fn start(&mut self) -> Result<(), eyre::Report> {
        let counter = AttributeResource::new(counter_id()?)
            .with_writable_attribute(COUNTER_ATTRIBUTE, json!(0));
        self.backend
            .register(Arc::new(counter))
            .map_err(|err| eyre::eyre!("register counter: {err}"))?;

        let fallback: Backend = Arc::clone(&self.backend) as Backend;
        let discovery = BackendDiscovery::discover(&[], fallback)
            .map_err(|err| eyre::eyre!("discovery failed: {err}"))?;
        let switchboard = Switchboard::start(
            discovery,
            &SwitchboardConfig::default(),
            Arc::new(DefaultClock),
        )
        .map_err(|err| eyre::eyre!("startup failed: {err}"))?;
        self.switchboard = Some(switchboard);
        Ok(())
    }

    /// Returns the running switchboard.
    ///
    /// # Errors
    ///
    /// Returns an error when the switchboard has not been started.
    pub fn switchboard(&self) -> Result<&Switchboard<DefaultClock>, eyre::Report> {
        self.switchboard
            .as_ref()
            .ok_or_else(|| eyre::eyre!("switchboard not running"))
    }

    /// Executes a request through the switchboard.
    ///
    /// # Errors
    ///
    /// Returns an error when dispatch fails.
    pub fn execute(&self, request: &Request) -> Result<Response, eyre::Report> {
        self.switchboard()?
            .execute(request)
            .map_err(|err| eyre::eyre!("{} request failed: {err}", request.kind()))
    }
}

impl Default for HistoryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> HistoryWorld {
    HistoryWorld::default()
}

/// Identifier of the counter resource.
///
/// # Errors
///
/// Returns an error if the identifier is rejected.
pub fn counter_id() -> Result<ResourceId, eyre::Report> {
    ResourceId::new(COUNTER_RESOURCE).map_err(|err| eyre::eyre!("counter id: {err}"))
}

/// History key of the counter attribute.
///
/// # Errors
///
/// Returns an error if the identifier is rejected.
pub fn counter_key() -> Result<HistoryKey, eyre::Report> {
    Ok(HistoryKey::attribute(counter_id()?, COUNTER_ATTRIBUTE))
}

/// Parses a comma-separated list of integers into JSON values.
///
/// # Errors
///
/// Returns an error for entries that are not integers.
pub fn parse_values(raw: &str) -> Result<Vec<Value>, eyre::Report> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|err| eyre::eyre!("invalid value '{part}': {err}"))
        })
        .collect()
}
