//! Step definitions for history tracking scenarios.

mod given;
mod then;
mod when;
pub mod world;
