//! Domain model for value history.

mod config;
mod entry;
mod key;

pub use config::HistoryConfig;
pub use entry::{HistoryEntry, HistorySample};
pub use key::{HistoryKey, HistoryKeyKind, ParseHistoryKeyKindError};
