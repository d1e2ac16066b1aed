//! Request dispatch across management backends.
//!
//! A request is routed either to all backends in one broadcast call or to
//! each backend in turn until one answers. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
