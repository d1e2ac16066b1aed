//! Domain model for requests, responses and dispatch errors.

mod error;
mod request;
mod response;

pub use error::{DispatchError, DispatchResult};
pub use request::{ParseRequestKindError, Request, RequestKind};
pub use response::Response;
