//! Administrative resource controlling the history store.
//!
//! Registered on the first backend so that clients can tune history with
//! ordinary read, write and exec requests:
//!
//! - attribute `MaxEntries` (read/write): the global ceiling
//! - attribute `TrackedKeys` (read-only): number of tracked keys
//! - operation `configure(resource, kind, name, maxEntries)`
//! - operation `reset()`

use mockable::Clock;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::backend::{
    domain::{AttributeInfo, BackendError, ResourceId, ResourceInfo},
    ports::{BackendResult, ManagedResource},
};
use crate::history::{
    domain::{HistoryKey, HistoryKeyKind},
    services::HistoryStore,
};

const MAX_ENTRIES: &str = "MaxEntries";
const TRACKED_KEYS: &str = "TrackedKeys";
const CONFIGURE: &str = "configure";
const RESET: &str = "reset";

/// Managed resource wrapping a [`HistoryStore`].
pub struct HistoryAdminResource<C>
where
    C: Clock + Send + Sync,
{
    id: ResourceId,
    store: Arc<HistoryStore<C>>,
}

impl<C> HistoryAdminResource<C>
where
    C: Clock + Send + Sync,
{
    /// Creates the resource under `id`.
    #[must_use]
    pub const fn new(id: ResourceId, store: Arc<HistoryStore<C>>) -> Self {
        Self { id, store }
    }

    fn configure(&self, arguments: &[Value]) -> BackendResult<Value> {
        let [resource, kind, name, max_entries] = arguments else {
            return Err(BackendError::InvalidArgument(format!(
                "{CONFIGURE} expects 4 arguments (resource, kind, name, maxEntries), got {}",
                arguments.len()
            )));
        };
        let resource = string_argument(resource, "resource")?;
        let resource = ResourceId::new(resource)
            .map_err(|err| BackendError::InvalidArgument(err.to_string()))?;
        let kind = HistoryKeyKind::try_from(string_argument(kind, "kind")?)
            .map_err(|err| BackendError::InvalidArgument(err.to_string()))?;
        let name = string_argument(name, "name")?;
        let max_entries = count_argument(max_entries, "maxEntries")?;

        self.store
            .configure(HistoryKey::new(kind, resource, name), max_entries);
        Ok(Value::Null)
    }
}

fn string_argument<'a>(value: &'a Value, label: &str) -> BackendResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| BackendError::InvalidArgument(format!("{label} must be a string")))
}

fn count_argument(value: &Value, label: &str) -> BackendResult<usize> {
    value
        .as_u64()
        .and_then(|count| usize::try_from(count).ok())
        .ok_or_else(|| {
            BackendError::InvalidArgument(format!("{label} must be a non-negative integer"))
        })
}

impl<C> ManagedResource for HistoryAdminResource<C>
where
    C: Clock + Send + Sync,
{
    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn info(&self) -> ResourceInfo {
        ResourceInfo {
            attributes: vec![
                AttributeInfo {
                    name: MAX_ENTRIES.to_owned(),
                    writable: true,
                },
                AttributeInfo {
                    name: TRACKED_KEYS.to_owned(),
                    writable: false,
                },
            ],
            operations: vec![CONFIGURE.to_owned(), RESET.to_owned()],
        }
    }

    fn get_attribute(&self, attribute: &str) -> BackendResult<Value> {
        match attribute {
            MAX_ENTRIES => Ok(json!(self.store.global_max_entries())),
            TRACKED_KEYS => Ok(json!(self.store.len())),
            _ => Err(BackendError::attribute_not_found(&self.id, attribute)),
        }
    }

    fn set_attribute(&self, attribute: &str, value: Value) -> BackendResult<Value> {
        match attribute {
            MAX_ENTRIES => {
                let max_entries = count_argument(&value, MAX_ENTRIES)?;
                let previous = self.store.global_max_entries();
                self.store.set_global_max_entries(max_entries);
                Ok(json!(previous))
            }
            TRACKED_KEYS => Err(BackendError::ReadOnlyAttribute {
                resource: self.id.clone(),
                attribute: attribute.to_owned(),
            }),
            _ => Err(BackendError::attribute_not_found(&self.id, attribute)),
        }
    }

    fn invoke(&self, operation: &str, arguments: &[Value]) -> BackendResult<Value> {
        match operation {
            CONFIGURE => self.configure(arguments),
            RESET => {
                self.store.reset();
                Ok(Value::Null)
            }
            _ => Err(BackendError::OperationNotFound {
                resource: self.id.clone(),
                operation: operation.to_owned(),
            }),
        }
    }
}
