//! Domain model for note entries.
//!
//! # Responsibility
//! - Define the canonical entry record used by core business logic.
//! - Own the hashtag grammar used to derive tags from entry text.
//!
//! # Invariants
//! - Every entry is identified by a store-assigned integer `EntryId`.
//! - Tags are derived from raw text at encode time, never stored.

pub mod entry;
pub mod tag;
