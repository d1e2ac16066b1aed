//! Bounded per-request-signature value history.
//!
//! Tracking is opt-in per [`domain::HistoryKey`]: only keys configured with
//! a positive length collect samples. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod services;
