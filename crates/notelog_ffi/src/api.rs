//! Boundary API implementing the nullable-bytes store contract.
//!
//! # Responsibility
//! - Expose `new`/`version` plus the five store operations to foreign callers.
//! - Hold opened stores in an opaque handle table; callers get a token, never
//!   a native pointer.
//! - Collapse typed core errors into error-snapshot payloads.
//!
//! # Invariants
//! - Exported functions must not panic across the boundary.
//! - `None` is reserved for unknown handles and encode failures; domain
//!   errors travel inside the payload as `code`/`message`.
//! - A single mutex serializes store access; callers are expected to invoke
//!   operations one at a time per store.

use log::error;
use notelog_core::snapshot;
use notelog_core::store::{EntryStore, StoreResult};
use notelog_core::Entry;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

static STORES: Lazy<Mutex<HashMap<u64, EntryStore>>> = Lazy::new(|| Mutex::new(HashMap::new()));
static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Minimal health-check API for smoke integration.
///
/// # Boundary contract
/// - Sync call, non-blocking, never panics.
pub fn ping() -> String {
    notelog_core::ping().to_owned()
}

/// Returns the library version.
///
/// # Boundary contract
/// - Always a non-empty string, stable for the process lifetime.
pub fn version() -> String {
    notelog_core::core_version().to_owned()
}

/// Initializes file logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # Boundary contract
/// - Safe to call repeatedly with the same config (idempotent).
/// - Never panics; returns empty string on success and error text on failure.
pub fn init_logging(level: String, log_dir: String) -> String {
    match notelog_core::init_logging(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Opens a store for `(kind, name)` and returns its handle.
///
/// `kind` selects the backing medium (`production` = file database at path
/// `name`, `memory` = process-lifetime store). Returns `None` when
/// construction fails; details are logged.
///
/// # Boundary contract
/// - Sync call, performs connection bootstrap and migrations.
/// - Never panics.
pub fn new(kind: String, name: String) -> Option<u64> {
    let store = match EntryStore::open(kind.as_str(), name.as_str()) {
        Ok(store) => store,
        Err(err) => {
            error!("event=boundary_new module=ffi status=error error_code={} error={err}", err.code());
            return None;
        }
    };

    let handle = NEXT_HANDLE.fetch_add(1, Ordering::Relaxed);
    match STORES.lock() {
        Ok(mut stores) => {
            stores.insert(handle, store);
            Some(handle)
        }
        Err(_) => {
            error!("event=boundary_new module=ffi status=error error_code=registry_poisoned");
            None
        }
    }
}

/// Releases the store behind `handle`.
///
/// Returns `true` when a store was registered under the handle.
///
/// # Boundary contract
/// - Idempotent: releasing an unknown handle returns `false`.
/// - Never panics.
pub fn close(handle: u64) -> bool {
    match STORES.lock() {
        Ok(mut stores) => stores.remove(&handle).is_some(),
        Err(_) => false,
    }
}

/// Returns the serialized snapshot of all entries.
///
/// # Boundary contract
/// - `None` only for unknown handles or encode failure; domain errors are
///   encoded into the payload.
pub fn current(handle: u64) -> Option<Vec<u8>> {
    with_store(handle, "current", |store| store.current())
}

/// Creates an entry and returns the serialized refreshed snapshot.
pub fn entry_create(handle: u64, text: String, color: i64) -> Option<Vec<u8>> {
    with_store(handle, "entry_create", |store| {
        store.entry_create(text.as_str(), color)
    })
}

/// Deletes an entry and returns the serialized refreshed snapshot.
///
/// A missing `id` yields a `NotFound` error payload.
pub fn entry_delete(handle: u64, id: i64) -> Option<Vec<u8>> {
    with_store(handle, "entry_delete", |store| store.entry_delete(id))
}

/// Searches entry text and returns the serialized matches.
///
/// A blank query answers with the full current snapshot.
pub fn entry_search(handle: u64, query: String) -> Option<Vec<u8>> {
    with_store(handle, "entry_search", |store| {
        store.entry_search(query.as_str())
    })
}

/// Replaces `text`/`color` on an entry and returns the serialized refreshed
/// snapshot.
///
/// A missing `id` yields a `NotFound` error payload.
pub fn entry_update(handle: u64, id: i64, text: String, color: i64) -> Option<Vec<u8>> {
    with_store(handle, "entry_update", |store| {
        store.entry_update(id, text.as_str(), color)
    })
}

fn with_store(
    handle: u64,
    op: &str,
    f: impl FnOnce(&EntryStore) -> StoreResult<Vec<Entry>>,
) -> Option<Vec<u8>> {
    let stores = match STORES.lock() {
        Ok(stores) => stores,
        Err(_) => {
            error!("event=boundary_call module=ffi status=error op={op} error_code=registry_poisoned");
            return None;
        }
    };

    let Some(store) = stores.get(&handle) else {
        error!("event=boundary_call module=ffi status=error op={op} error_code=unknown_handle handle={handle}");
        return None;
    };

    let payload = match f(store) {
        Ok(entries) => snapshot::encode_entries(&entries),
        Err(err) => {
            error!(
                "event=boundary_call module=ffi status=error op={op} error_code={} error={err}",
                err.code()
            );
            snapshot::encode_error(err.code(), &err.to_string())
        }
    };

    match payload {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            error!("event=boundary_call module=ffi status=error op={op} error_code=encode_failed error={err}");
            None
        }
    }
}
