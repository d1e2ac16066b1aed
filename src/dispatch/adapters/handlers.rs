//! Handlers for the built-in request kinds.

use serde_json::{Map, Value};

use crate::backend::{
    domain::{BackendError, ResourceId},
    ports::{BackendResult, BackendSet, ManagementBackend},
};
use crate::dispatch::{
    domain::{Request, RequestKind},
    ports::RequestHandler,
};

/// Reads one attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadHandler;

/// Writes one attribute and returns its previous value.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteHandler;

/// Invokes one operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecHandler;

/// Lists resource metadata merged across every backend.
///
/// When two backends hold the same resource identifier the earlier backend
/// wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListHandler;

static READ: ReadHandler = ReadHandler;
static WRITE: WriteHandler = WriteHandler;
static EXEC: ExecHandler = ExecHandler;
static LIST: ListHandler = ListHandler;

/// Returns the built-in handler for a request kind.
#[must_use]
pub fn for_kind(kind: RequestKind) -> &'static dyn RequestHandler {
    match kind {
        RequestKind::Read => &READ,
        RequestKind::Write => &WRITE,
        RequestKind::Exec => &EXEC,
        RequestKind::List => &LIST,
    }
}

fn target(request: &Request) -> BackendResult<(&ResourceId, &str)> {
    match (request.resource(), request.name()) {
        (Some(resource), Some(name)) => Ok((resource, name)),
        _ => Err(BackendError::InvalidArgument(format!(
            "{} request requires a resource and a name",
            request.kind()
        ))),
    }
}

impl RequestHandler for ReadHandler {
    fn kind(&self) -> RequestKind {
        RequestKind::Read
    }

    fn handle(&self, backend: &dyn ManagementBackend, request: &Request) -> BackendResult<Value> {
        let (resource, attribute) = target(request)?;
        backend.read_attribute(resource, attribute)
    }
}

impl RequestHandler for WriteHandler {
    fn kind(&self) -> RequestKind {
        RequestKind::Write
    }

    fn handle(&self, backend: &dyn ManagementBackend, request: &Request) -> BackendResult<Value> {
        let (resource, attribute) = target(request)?;
        let value = request.value().cloned().ok_or_else(|| {
            BackendError::InvalidArgument("write request requires a value".to_owned())
        })?;
        backend.write_attribute(resource, attribute, value)
    }
}

impl RequestHandler for ExecHandler {
    fn kind(&self) -> RequestKind {
        RequestKind::Exec
    }

    fn handle(&self, backend: &dyn ManagementBackend, request: &Request) -> BackendResult<Value> {
        let (resource, operation) = target(request)?;
        backend.invoke(resource, operation, request.arguments())
    }
}

impl RequestHandler for ListHandler {
    fn kind(&self) -> RequestKind {
        RequestKind::List
    }

    fn handles_all_backends(&self) -> bool {
        true
    }

    fn handle(&self, backend: &dyn ManagementBackend, _request: &Request) -> BackendResult<Value> {
        let mut listing = Map::new();
        collect_listing(backend, &mut listing)?;
        Ok(Value::Object(listing))
    }

    fn handle_all(&self, backends: &BackendSet, _request: &Request) -> BackendResult<Value> {
        let mut listing = Map::new();
        for backend in backends {
            collect_listing(backend.as_ref(), &mut listing)?;
        }
        Ok(Value::Object(listing))
    }
}

fn collect_listing(
    backend: &dyn ManagementBackend,
    listing: &mut Map<String, Value>,
) -> BackendResult<()> {
    for id in backend.resource_ids()? {
        if listing.contains_key(id.as_str()) {
            continue;
        }
        let info = backend.resource_info(&id)?;
        let info = serde_json::to_value(info)
            .map_err(|err| BackendError::Introspection(err.to_string()))?;
        listing.insert(id.to_string(), info);
    }
    Ok(())
}
