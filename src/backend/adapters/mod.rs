//! Adapter implementations for backend ports.

pub mod memory;
pub mod strategies;
