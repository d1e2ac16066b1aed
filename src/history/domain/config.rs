//! History configuration.

use serde::{Deserialize, Serialize};

/// Default global ceiling on samples per key.
const DEFAULT_MAX_ENTRIES: usize = 10;

/// Global history settings.
///
/// # Examples
///
/// ```
/// use switchboard::history::domain::HistoryConfig;
///
/// let config = HistoryConfig::default();
/// assert_eq!(config.max_entries, 10);
/// assert_eq!(HistoryConfig::disabled().max_entries, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Ceiling applied to every per-key cap.
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl HistoryConfig {
    /// Creates a configuration with the given ceiling.
    #[must_use]
    pub const fn new(max_entries: usize) -> Self {
        Self { max_entries }
    }

    /// Creates a configuration that clamps every cap to zero.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { max_entries: 0 }
    }
}
