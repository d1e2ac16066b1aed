//! Domain model for management backends and the resources they hold.
//!
//! The types here are pure values: identifiers, resource metadata and the
//! error vocabulary shared by every backend implementation.

mod error;
mod ids;
mod info;
mod resource;

pub use error::{BackendDomainError, BackendError};
pub use ids::BackendId;
pub use info::{AttributeInfo, ResourceInfo};
pub use resource::ResourceId;
