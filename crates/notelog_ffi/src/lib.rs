//! Boundary adapter crate for foreign callers of the notelog entry store.
//!
//! The transport (binding generator, linkage) is owned elsewhere; this crate
//! only fixes the callable surface and the nullable-bytes contract.

pub mod api;

pub use api::{
    close, current, entry_create, entry_delete, entry_search, entry_update, init_logging, new,
    ping, version,
};
