//! Port contracts for request handling.

pub mod handler;

pub use handler::RequestHandler;
