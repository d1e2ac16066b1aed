//! Built-in request handlers.

pub mod handlers;
