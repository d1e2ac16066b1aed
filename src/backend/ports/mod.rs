//! Port contracts for management backends and their discovery.
//!
//! Ports define infrastructure-agnostic interfaces. Host integrations
//! implement [`ManagementBackend`] and [`PlatformLocator`]; the services in
//! this module only ever talk to these traits.

pub mod backend;
pub mod resource;
pub mod set;
pub mod strategy;

pub use backend::{Backend, BackendResult, ManagementBackend};
pub use resource::ManagedResource;
pub use set::BackendSet;
pub use strategy::{DiscoveryError, DiscoveryResult, DiscoveryStrategy, PlatformLocator};
