//! Request value consumed by the dispatcher.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::backend::domain::ResourceId;

/// Operation kind of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// Read one attribute.
    Read,
    /// Write one attribute.
    Write,
    /// Invoke one operation.
    Exec,
    /// List every resource across all backends.
    List,
}

impl RequestKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Exec => "exec",
            Self::List => "list",
        }
    }

    /// Returns `true` for kinds whose values are tracked in history.
    #[must_use]
    pub const fn records_history(self) -> bool {
        matches!(self, Self::Read | Self::Write | Self::Exec)
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing a request kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown request kind: {0}")]
pub struct ParseRequestKindError(pub String);

impl TryFrom<&str> for RequestKind {
    type Error = ParseRequestKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "read" => Ok(Self::Read),
            "write" => Ok(Self::Write),
            "exec" => Ok(Self::Exec),
            "list" => Ok(Self::List),
            _ => Err(ParseRequestKindError(value.to_owned())),
        }
    }
}

/// A management request built by the request-handling layer.
///
/// `name` holds the attribute name for read and write requests and the
/// operation name for exec requests. List requests carry neither a resource
/// nor a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    kind: RequestKind,
    resource: Option<ResourceId>,
    name: Option<String>,
    value: Option<Value>,
    arguments: Vec<Value>,
}

impl Request {
    /// Creates a read request for one attribute.
    #[must_use]
    pub fn read(resource: ResourceId, attribute: impl Into<String>) -> Self {
        Self::targeted(RequestKind::Read, resource, attribute.into())
    }

    /// Creates a write request setting one attribute to `value`.
    #[must_use]
    pub fn write(resource: ResourceId, attribute: impl Into<String>, value: Value) -> Self {
        Self {
            value: Some(value),
            ..Self::targeted(RequestKind::Write, resource, attribute.into())
        }
    }

    /// Creates an exec request invoking one operation.
    #[must_use]
    pub fn exec(
        resource: ResourceId,
        operation: impl Into<String>,
        arguments: impl IntoIterator<Item = Value>,
    ) -> Self {
        Self {
            arguments: arguments.into_iter().collect(),
            ..Self::targeted(RequestKind::Exec, resource, operation.into())
        }
    }

    /// Creates a list request.
    #[must_use]
    pub const fn list() -> Self {
        Self {
            kind: RequestKind::List,
            resource: None,
            name: None,
            value: None,
            arguments: Vec::new(),
        }
    }

    const fn targeted(kind: RequestKind, resource: ResourceId, name: String) -> Self {
        Self {
            kind,
            resource: Some(resource),
            name: Some(name),
            value: None,
            arguments: Vec::new(),
        }
    }

    /// Returns the operation kind.
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        self.kind
    }

    /// Returns the addressed resource, if any.
    #[must_use]
    pub const fn resource(&self) -> Option<&ResourceId> {
        self.resource.as_ref()
    }

    /// Returns the attribute or operation name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the value to write, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Returns the operation arguments.
    #[must_use]
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// Returns the resource for diagnostics, or `-` when absent.
    #[must_use]
    pub fn resource_label(&self) -> String {
        self.resource
            .as_ref()
            .map_or_else(|| "-".to_owned(), ToString::to_string)
    }

    /// Returns the attribute or operation name for diagnostics, or `-`.
    #[must_use]
    pub fn name_label(&self) -> String {
        self.name.clone().unwrap_or_else(|| "-".to_owned())
    }
}
