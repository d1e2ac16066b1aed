//! Backend discovery service.
//!
//! [`BackendDiscovery`] runs an ordered list of strategies once and merges
//! their output into a single [`BackendSet`].

use tracing::{debug, error, info};

use crate::backend::ports::{
    Backend, BackendSet, DiscoveryError, DiscoveryResult, DiscoveryStrategy,
};

/// The immutable outcome of backend discovery.
#[derive(Debug, Clone)]
pub struct BackendDiscovery {
    backends: BackendSet,
    requires_metadata_refresh: bool,
}

impl BackendDiscovery {
    /// Runs every strategy in order and appends `fallback` last.
    ///
    /// Strategies reporting [`DiscoveryError::NotApplicable`] are skipped.
    /// A backend reported by several strategies appears once, at the
    /// position of its first report.
    ///
    /// # Errors
    ///
    /// Returns the first fatal strategy error (such as
    /// [`DiscoveryError::Integration`]) without consulting the remaining
    /// strategies, or [`DiscoveryError::NoBackendFound`] if the merged set
    /// is empty.
    pub fn discover(
        strategies: &[Box<dyn DiscoveryStrategy>],
        fallback: Backend,
    ) -> DiscoveryResult<Self> {
        let mut found = Vec::new();
        let mut requires_metadata_refresh = false;

        for strategy in strategies {
            match strategy.discover() {
                Ok(backends) => {
                    info!(
                        strategy = strategy.name(),
                        count = backends.len(),
                        "discovery strategy produced backends"
                    );
                    requires_metadata_refresh |= strategy.requires_metadata_refresh();
                    found.extend(backends);
                }
                Err(DiscoveryError::NotApplicable { reason, .. }) => {
                    debug!(strategy = strategy.name(), %reason, "discovery strategy skipped");
                }
                Err(err) => {
                    error!(strategy = strategy.name(), error = %err, "discovery failed");
                    return Err(err);
                }
            }
        }
        found.push(fallback);

        Self::from_backends(BackendSet::new(found), requires_metadata_refresh)
    }

    /// Wraps an already assembled backend set.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::NoBackendFound`] when `backends` is empty.
    pub fn from_backends(
        backends: BackendSet,
        requires_metadata_refresh: bool,
    ) -> DiscoveryResult<Self> {
        if backends.is_empty() {
            return Err(DiscoveryError::NoBackendFound);
        }
        info!(
            backends = ?backends,
            requires_metadata_refresh,
            "backend discovery complete"
        );
        Ok(Self {
            backends,
            requires_metadata_refresh,
        })
    }

    /// Returns the discovered backends.
    #[must_use]
    pub const fn backends(&self) -> &BackendSet {
        &self.backends
    }

    /// Whether a detected platform needs the metadata refresh probe before
    /// attribute access.
    #[must_use]
    pub const fn requires_metadata_refresh(&self) -> bool {
        self.requires_metadata_refresh
    }
}
