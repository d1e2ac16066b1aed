//! Resource identifier type.

use super::BackendDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a manageable resource within a backend's namespace.
///
/// The addressing syntax belongs to the backend technology, so the only
/// rule enforced here is that the name is not blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Creates a resource identifier, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`BackendDomainError::EmptyResourceId`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BackendDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BackendDomainError::EmptyResourceId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
