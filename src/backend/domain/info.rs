//! Resource metadata exposed by backends.

use serde::{Deserialize, Serialize};

/// Description of one attribute of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeInfo {
    /// Attribute name.
    pub name: String,
    /// Whether the attribute accepts writes.
    pub writable: bool,
}

/// Metadata describing a resource: its attributes and operations.
///
/// Fetching this is the benign metadata call used to probe which backend
/// holds a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceInfo {
    /// Attributes in name order.
    pub attributes: Vec<AttributeInfo>,
    /// Operation names in name order.
    pub operations: Vec<String>,
}

impl ResourceInfo {
    /// Returns `true` when the resource has an attribute with this name.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|attribute| attribute.name == name)
    }

    /// Returns `true` when the resource has an operation with this name.
    #[must_use]
    pub fn has_operation(&self, name: &str) -> bool {
        self.operations.iter().any(|operation| operation == name)
    }
}
