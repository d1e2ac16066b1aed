//! Application services for value history.

mod store;

pub use store::HistoryStore;
