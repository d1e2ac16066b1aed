//! Built-in discovery strategies.

use std::sync::Arc;

use crate::backend::{
    adapters::memory::BackendDirectory,
    ports::{Backend, DiscoveryError, DiscoveryResult, DiscoveryStrategy, PlatformLocator},
};

/// Strategy backed by a platform-specific locator.
///
/// An absent platform is not applicable. A present platform whose locator
/// fails is a fatal integration error.
pub struct PlatformStrategy<L> {
    locator: L,
}

impl<L: PlatformLocator> PlatformStrategy<L> {
    /// Wraps a platform locator.
    #[must_use]
    pub const fn new(locator: L) -> Self {
        Self { locator }
    }
}

impl<L: PlatformLocator> DiscoveryStrategy for PlatformStrategy<L> {
    fn name(&self) -> &str {
        self.locator.platform()
    }

    fn discover(&self) -> DiscoveryResult<Vec<Backend>> {
        let platform = self.locator.platform();
        if !self.locator.is_present() {
            return Err(DiscoveryError::not_applicable(
                platform,
                format!("{platform} is not present in this runtime"),
            ));
        }
        self.locator
            .locate()
            .map_err(|err| DiscoveryError::Integration {
                strategy: platform.to_owned(),
                platform: platform.to_owned(),
                reason: err.to_string(),
            })
    }

    fn requires_metadata_refresh(&self) -> bool {
        self.locator.requires_metadata_refresh()
    }
}

/// Strategy returning every backend published in a directory.
pub struct DirectoryStrategy {
    directory: Arc<BackendDirectory>,
}

impl DirectoryStrategy {
    /// Creates a strategy reading from the directory.
    #[must_use]
    pub const fn new(directory: Arc<BackendDirectory>) -> Self {
        Self { directory }
    }
}

impl DiscoveryStrategy for DirectoryStrategy {
    fn name(&self) -> &str {
        "directory"
    }

    fn discover(&self) -> DiscoveryResult<Vec<Backend>> {
        Ok(self.directory.published())
    }
}

/// Strategy looking up one backend bound under a well-known name.
pub struct NamedBindingStrategy {
    directory: Arc<BackendDirectory>,
    binding: String,
}

impl NamedBindingStrategy {
    /// Conventional binding name for the runtime's own backend.
    pub const DEFAULT_BINDING: &'static str = "env/management/runtime";

    /// Creates a strategy looking up `binding`.
    #[must_use]
    pub fn new(directory: Arc<BackendDirectory>, binding: impl Into<String>) -> Self {
        Self {
            directory,
            binding: binding.into(),
        }
    }
}

impl DiscoveryStrategy for NamedBindingStrategy {
    fn name(&self) -> &str {
        "named-binding"
    }

    fn discover(&self) -> DiscoveryResult<Vec<Backend>> {
        self.directory
            .lookup(&self.binding)
            .map(|backend| vec![backend])
            .ok_or_else(|| {
                DiscoveryError::not_applicable(
                    self.name(),
                    format!("nothing bound under '{}'", self.binding),
                )
            })
    }
}
