//! Discovery strategy port and platform locator contract.

use crate::backend::ports::{Backend, BackendResult};
use thiserror::Error;

/// Result type for discovery operations.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// One way of locating backends in the current runtime.
///
/// Strategies are consulted in a fixed order. A strategy whose target
/// platform is missing reports [`DiscoveryError::NotApplicable`], which the
/// discovery service swallows.
pub trait DiscoveryStrategy: Send + Sync {
    /// Returns the strategy name used in diagnostics.
    fn name(&self) -> &str;

    /// Produces zero or more backends.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::NotApplicable`] when the strategy does not
    /// apply to this runtime, or [`DiscoveryError::Integration`] when the
    /// platform is present but its integration surface is unusable.
    fn discover(&self) -> DiscoveryResult<Vec<Backend>>;

    /// Whether backends from this platform need a metadata refresh probe
    /// before attribute access.
    fn requires_metadata_refresh(&self) -> bool {
        false
    }
}

/// Locator for one hosting platform's backend.
pub trait PlatformLocator: Send + Sync {
    /// Returns the platform name.
    fn platform(&self) -> &str;

    /// Returns `true` when the platform is detected in this runtime.
    fn is_present(&self) -> bool;

    /// Obtains the platform's backends through its integration surface.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::backend::domain::BackendError`] when the
    /// integration surface fails.
    fn locate(&self) -> BackendResult<Vec<Backend>>;

    /// Whether this platform's registry is known to serve stale metadata
    /// until it is probed.
    fn requires_metadata_refresh(&self) -> bool {
        false
    }
}

/// Errors returned while discovering backends.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiscoveryError {
    /// The strategy does not apply to this runtime.
    #[error("discovery strategy '{strategy}' not applicable: {reason}")]
    NotApplicable {
        /// Strategy name.
        strategy: String,
        /// Why the strategy was skipped.
        reason: String,
    },

    /// The platform was detected but its integration could not be used.
    #[error(
        "found {platform} via strategy '{strategy}' but could not use its integration \
         (wrong {platform} version?): {reason}"
    )]
    Integration {
        /// Strategy name.
        strategy: String,
        /// Platform name.
        platform: String,
        /// Underlying failure.
        reason: String,
    },

    /// No backend could be located at all.
    #[error("unable to locate any management backend")]
    NoBackendFound,
}

impl DiscoveryError {
    /// Builds a [`DiscoveryError::NotApplicable`].
    #[must_use]
    pub fn not_applicable(strategy: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NotApplicable {
            strategy: strategy.into(),
            reason: reason.into(),
        }
    }
}
