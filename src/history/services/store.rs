//! History store service.
//!
//! Locking discipline: the key map sits behind one coarse lock taken for
//! lookups and structural changes; each entry has its own mutex so appends
//! to different keys never contend.

use mockable::Clock;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

use crate::dispatch::domain::{Request, RequestKind, Response};
use crate::history::domain::{HistoryConfig, HistoryEntry, HistoryKey, HistorySample};

type SharedEntry = Arc<Mutex<HistoryEntry>>;

/// Bounded rolling history keyed by request signature.
pub struct HistoryStore<C>
where
    C: Clock + Send + Sync,
{
    entries: RwLock<HashMap<HistoryKey, SharedEntry>>,
    global_max_entries: AtomicUsize,
    clock: Arc<C>,
}

impl<C> HistoryStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store.
    #[must_use]
    pub fn new(config: HistoryConfig, clock: Arc<C>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            global_max_entries: AtomicUsize::new(config.max_entries),
            clock,
        }
    }

    /// Returns the ceiling applied to every per-key cap.
    #[must_use]
    pub fn global_max_entries(&self) -> usize {
        self.global_max_entries.load(Ordering::Acquire)
    }

    /// Changes the ceiling and trims every entry above it.
    pub fn set_global_max_entries(&self, max_entries: usize) {
        let entries = self.entries.write();
        self.global_max_entries.store(max_entries, Ordering::Release);
        for entry in entries.values() {
            let mut entry = entry.lock();
            if entry.max_entries() > max_entries {
                entry.set_max_entries(max_entries);
            }
        }
        info!(max_entries, "history ceiling changed");
    }

    /// Sets how many samples to keep for `key`.
    ///
    /// Zero removes the entry and disables tracking. Values above the
    /// global ceiling are clamped to it. An existing entry keeps its samples
    /// and is trimmed to the new cap.
    pub fn configure(&self, key: HistoryKey, max_entries: usize) {
        let mut entries = self.entries.write();
        if max_entries == 0 {
            if entries.remove(&key).is_some() {
                debug!(%key, "history tracking disabled");
            }
            return;
        }

        let max_entries = max_entries.min(self.global_max_entries());
        if let Some(entry) = entries.get(&key) {
            entry.lock().set_max_entries(max_entries);
        } else {
            entries.insert(key.clone(), Arc::new(Mutex::new(HistoryEntry::new(max_entries))));
        }
        debug!(%key, max_entries, "history tracking configured");
    }

    /// Stamps `response` and, for tracked keys, attaches the recorded
    /// history before recording the new value.
    ///
    /// Every response receives a timestamp. Only read, write and exec
    /// requests touch history: reads and execs record the response value,
    /// writes record the value being set.
    pub fn update_and_record(&self, request: &Request, response: &mut Response) {
        let timestamp = self.clock.utc().timestamp();
        response.set_timestamp(timestamp);

        if !request.kind().records_history() {
            return;
        }
        let Some(key) = HistoryKey::for_request(request) else {
            return;
        };
        let Some(entry) = self.entries.read().get(&key).cloned() else {
            return;
        };

        let mut entry = entry.lock();
        response.set_history(entry.samples());
        let value = match request.kind() {
            RequestKind::Write => request.value().cloned().unwrap_or_default(),
            _ => response.value().clone(),
        };
        entry.push(value, timestamp);
    }

    /// Discards every entry.
    ///
    /// Callers already holding an entry finish against it, but it is no
    /// longer reachable afterwards.
    pub fn reset(&self) {
        let previous = std::mem::take(&mut *self.entries.write());
        info!(keys = previous.len(), "history reset");
    }

    /// Returns the samples recorded for `key`, oldest first.
    #[must_use]
    pub fn samples(&self, key: &HistoryKey) -> Option<Vec<HistorySample>> {
        let entry = self.entries.read().get(key).cloned()?;
        let samples = entry.lock().samples();
        Some(samples)
    }

    /// Returns the effective cap for `key`, if tracked.
    #[must_use]
    pub fn max_entries(&self, key: &HistoryKey) -> Option<usize> {
        let entry = self.entries.read().get(key).cloned()?;
        let max_entries = entry.lock().max_entries();
        Some(max_entries)
    }

    /// Returns `true` when `key` is tracked.
    #[must_use]
    pub fn is_tracked(&self, key: &HistoryKey) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Returns the number of tracked keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` when no key is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
