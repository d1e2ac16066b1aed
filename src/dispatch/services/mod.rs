//! Application services for request dispatch.

mod dispatcher;

pub use dispatcher::RequestDispatcher;
