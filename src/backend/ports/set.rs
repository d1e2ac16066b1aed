//! Ordered, duplicate-free collection of backends.

use crate::backend::domain::BackendId;
use crate::backend::ports::Backend;
use std::collections::HashSet;
use std::fmt;

/// Insertion-ordered set of backends, deduplicated by [`BackendId`].
///
/// A set is built once and never mutated afterwards; cloning it only clones
/// the backend handles.
#[derive(Clone, Default)]
pub struct BackendSet {
    backends: Vec<Backend>,
}

impl BackendSet {
    /// Builds a set, keeping the first occurrence of each backend.
    #[must_use]
    pub fn new(backends: impl IntoIterator<Item = Backend>) -> Self {
        let mut seen = HashSet::new();
        let backends = backends
            .into_iter()
            .filter(|backend| seen.insert(backend.id()))
            .collect();
        Self { backends }
    }

    /// Returns the number of backends.
    #[must_use]
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    /// Returns `true` when the set holds no backend.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Returns the first backend in discovery order.
    #[must_use]
    pub fn first(&self) -> Option<&Backend> {
        self.backends.first()
    }

    /// Iterates the backends in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Backend> {
        self.backends.iter()
    }

    /// Returns `true` when a backend with this identifier is a member.
    #[must_use]
    pub fn contains(&self, id: BackendId) -> bool {
        self.backends.iter().any(|backend| backend.id() == id)
    }

    /// Returns member identifiers in discovery order.
    #[must_use]
    pub fn ids(&self) -> Vec<BackendId> {
        self.backends.iter().map(|backend| backend.id()).collect()
    }
}

impl FromIterator<Backend> for BackendSet {
    fn from_iter<I: IntoIterator<Item = Backend>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a BackendSet {
    type Item = &'a Backend;
    type IntoIter = std::slice::Iter<'a, Backend>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for BackendSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.backends.iter().map(|backend| backend.name()))
            .finish()
    }
}
