//! Switchboard: a bridge over management-attribute backends.
//!
//! A request names a resource and an attribute or operation. The bridge
//! finds the backend that serves it, keeps a bounded rolling history of
//! returned values, and exposes that history as a manageable resource of
//! its own.
//!
//! # Architecture
//!
//! Each module follows a hexagonal layout:
//!
//! - **Domain**: value types and errors
//! - **Ports**: traits implemented by backends, resources and handlers
//! - **Adapters**: in-memory backends, discovery strategies and handlers
//! - **Services**: discovery, dispatch and the history store
//!
//! # Modules
//!
//! - [`backend`]: backend abstraction, discovery and admin registration
//! - [`dispatch`]: request model and try-each or broadcast dispatch
//! - [`history`]: bounded per-key history
//! - [`switchboard`]: the facade tying them together
//! - [`config`] and [`logging`]: runtime configuration and tracing setup

pub mod backend;
pub mod config;
pub mod dispatch;
pub mod history;
pub mod logging;
pub mod switchboard;

pub use switchboard::{Switchboard, SwitchboardError};
