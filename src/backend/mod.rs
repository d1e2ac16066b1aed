//! Management backends and their discovery.
//!
//! A backend is one registry of manageable resources living inside the host
//! runtime. This module locates every reachable backend once at startup and
//! exposes the result as an immutable, ordered [`ports::BackendSet`]. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
