//! Adapters exposing the history store through backend ports.

mod admin_resource;

pub use admin_resource::HistoryAdminResource;
