//! In-process directory where components publish their backends.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::backend::ports::Backend;

/// Shared directory of backends.
///
/// Components publish backends anonymously (the registry-factory lookup) or
/// bind one under a name (the naming-context lookup). Discovery strategies
/// read from it once at startup.
#[derive(Default)]
pub struct BackendDirectory {
    published: RwLock<Vec<Backend>>,
    bindings: RwLock<HashMap<String, Backend>>,
}

impl BackendDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a backend for registry-factory lookup.
    pub fn publish(&self, backend: Backend) {
        self.published.write().push(backend);
    }

    /// Returns every published backend in publication order.
    #[must_use]
    pub fn published(&self) -> Vec<Backend> {
        self.published.read().clone()
    }

    /// Binds a backend under a name, replacing any previous binding.
    pub fn bind(&self, name: impl Into<String>, backend: Backend) {
        self.bindings.write().insert(name.into(), backend);
    }

    /// Looks up the backend bound under a name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Backend> {
        self.bindings.read().get(name).cloned()
    }
}
