//! Entry domain model.
//!
//! # Responsibility
//! - Define the canonical note entry record.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused (SQLite AUTOINCREMENT).
//! - `created` is set once at insert time; `modified` tracks the last write.

/// Stable store-assigned identifier for an entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = i64;

/// Canonical note entry record.
///
/// `text` is the raw user input and may embed hashtags; tag extraction and
/// display-text cleanup happen in the snapshot layer, so the store always
/// keeps the original text intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Store-assigned unique id.
    pub id: EntryId,
    /// Raw entry text, hashtags included.
    pub text: String,
    /// Integer-coded color tag.
    pub color: i64,
    /// Creation time, unix epoch seconds.
    pub created: i64,
    /// Last modification time, unix epoch seconds.
    pub modified: i64,
}
