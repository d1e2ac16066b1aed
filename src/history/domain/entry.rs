//! Bounded history entry.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::VecDeque;

/// One recorded value with its Unix timestamp in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySample {
    /// Recorded value.
    pub value: Value,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
}

/// Chronological samples for one key, bounded by `max_entries`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    samples: VecDeque<HistorySample>,
    max_entries: usize,
}

impl HistoryEntry {
    /// Creates an empty entry holding at most `max_entries` samples.
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            samples: VecDeque::new(),
            max_entries,
        }
    }

    /// Returns the cap.
    #[must_use]
    pub const fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Changes the cap and drops the oldest samples above it.
    pub fn set_max_entries(&mut self, max_entries: usize) {
        self.max_entries = max_entries;
        self.trim();
    }

    /// Appends a sample, dropping the oldest samples above the cap.
    pub fn push(&mut self, value: Value, timestamp: i64) {
        self.samples.push_back(HistorySample { value, timestamp });
        self.trim();
    }

    /// Drops the oldest samples above the cap.
    pub fn trim(&mut self) {
        while self.samples.len() > self.max_entries {
            self.samples.pop_front();
        }
    }

    /// Returns a copy of the samples, oldest first.
    #[must_use]
    pub fn samples(&self) -> Vec<HistorySample> {
        self.samples.iter().cloned().collect()
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` when no sample is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
