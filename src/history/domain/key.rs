//! History key: the identity of a trackable request signature.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::backend::domain::ResourceId;
use crate::dispatch::domain::{Request, RequestKind};

/// What the key's name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryKeyKind {
    /// An attribute, shared by read and write requests.
    Attribute,
    /// An operation invoked by exec requests.
    Operation,
}

impl HistoryKeyKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attribute => "attribute",
            Self::Operation => "operation",
        }
    }
}

impl fmt::Display for HistoryKeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing a history key kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown history key kind: {0}")]
pub struct ParseHistoryKeyKindError(pub String);

impl TryFrom<&str> for HistoryKeyKind {
    type Error = ParseHistoryKeyKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "attribute" => Ok(Self::Attribute),
            "operation" => Ok(Self::Operation),
            _ => Err(ParseHistoryKeyKindError(value.to_owned())),
        }
    }
}

/// Identity of a request signature: resource plus attribute or operation.
///
/// Values and timestamps are not part of the key, so repeated requests to
/// the same attribute collapse onto one history entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryKey {
    kind: HistoryKeyKind,
    resource: ResourceId,
    name: String,
}

impl HistoryKey {
    /// Creates a key for an attribute.
    #[must_use]
    pub fn attribute(resource: ResourceId, attribute: impl Into<String>) -> Self {
        Self::new(HistoryKeyKind::Attribute, resource, attribute)
    }

    /// Creates a key for an operation.
    #[must_use]
    pub fn operation(resource: ResourceId, operation: impl Into<String>) -> Self {
        Self::new(HistoryKeyKind::Operation, resource, operation)
    }

    /// Creates a key of the given kind.
    #[must_use]
    pub fn new(kind: HistoryKeyKind, resource: ResourceId, name: impl Into<String>) -> Self {
        Self {
            kind,
            resource,
            name: name.into(),
        }
    }

    /// Derives the key of a request.
    ///
    /// Returns `None` for kinds that are never tracked or for requests
    /// missing a resource or name.
    #[must_use]
    pub fn for_request(request: &Request) -> Option<Self> {
        let kind = match request.kind() {
            RequestKind::Read | RequestKind::Write => HistoryKeyKind::Attribute,
            RequestKind::Exec => HistoryKeyKind::Operation,
            RequestKind::List => return None,
        };
        let resource = request.resource()?.clone();
        let name = request.name()?;
        Some(Self::new(kind, resource, name))
    }

    /// Returns the key kind.
    #[must_use]
    pub const fn kind(&self) -> HistoryKeyKind {
        self.kind
    }

    /// Returns the resource.
    #[must_use]
    pub const fn resource(&self) -> &ResourceId {
        &self.resource
    }

    /// Returns the attribute or operation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for HistoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}#{}", self.kind, self.resource, self.name)
    }
}
