//! In-process backend adapters.

mod backend;
mod directory;
mod resource;

pub use backend::InMemoryBackend;
pub use directory::BackendDirectory;
pub use resource::AttributeResource;
