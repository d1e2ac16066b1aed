//! Response value annotated with timestamp and history.

use serde::Serialize;
use serde_json::Value;

use crate::history::domain::HistorySample;

/// Result of a handled request, as handed to the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    history: Option<Vec<HistorySample>>,
}

impl Response {
    /// Creates an unannotated response carrying `value`.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self {
            value,
            timestamp: None,
            history: None,
        }
    }

    /// Returns the operation result.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the response timestamp in Unix seconds.
    #[must_use]
    pub const fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    /// Returns the history attached to this response.
    #[must_use]
    pub fn history(&self) -> Option<&[HistorySample]> {
        self.history.as_deref()
    }

    /// Stamps the response with a Unix timestamp in seconds.
    pub fn set_timestamp(&mut self, timestamp: i64) {
        self.timestamp = Some(timestamp);
    }

    /// Attaches previously recorded samples.
    pub fn set_history(&mut self, history: Vec<HistorySample>) {
        self.history = Some(history);
    }

    /// Consumes the response, returning its value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }
}
