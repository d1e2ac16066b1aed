//! Application services for backend discovery and administration.

mod admin;
mod discovery;

pub use admin::{AdminError, AdminRegistrar, AdminResult};
pub use discovery::BackendDiscovery;
