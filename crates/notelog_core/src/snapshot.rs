//! Versioned byte schema for store responses.
//!
//! # Responsibility
//! - Define the JSON payload exchanged across the serialization boundary.
//! - Derive tags and display text from raw entry text at encode time.
//!
//! # Invariants
//! - `entries` is always present, empty list when there is nothing to report.
//! - Exactly one of a populated `entries` list or a populated `error` carries
//!   meaning; error payloads always ship an empty `entries` list.
//! - `schema` identifies the payload layout and only changes with it.

use crate::model::entry::Entry;
use crate::model::tag::{parse_tags, strip_tags, Tag};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Current payload layout version.
pub const SCHEMA_VERSION: u32 = 1;

pub type EncodeResult<T> = Result<T, EncodeError>;

/// Serialization failure while producing or reading a snapshot payload.
#[derive(Debug)]
pub struct EncodeError(serde_json::Error);

impl Display for EncodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "snapshot encoding failed: {}", self.0)
    }
}

impl Error for EncodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl From<serde_json::Error> for EncodeError {
    fn from(value: serde_json::Error) -> Self {
        Self(value)
    }
}

/// Top-level payload shape for every store response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Payload layout version, see [`SCHEMA_VERSION`].
    pub schema: u32,
    /// Entries in newest-first order; empty on error payloads.
    pub entries: Vec<EntryView>,
    /// Failure details, `None` on success.
    pub error: Option<SnapshotError>,
}

/// Wire shape of one entry.
///
/// `text` is the cleaned display text; the embedded hashtags move into `tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryView {
    pub id: i64,
    pub text: String,
    pub color: i64,
    pub tags: Vec<Tag>,
    pub created: i64,
    pub modified: i64,
}

impl EntryView {
    /// Projects a stored entry into its wire shape.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            id: entry.id,
            text: strip_tags(&entry.text),
            color: entry.color,
            tags: parse_tags(&entry.text),
            created: entry.created,
            modified: entry.modified,
        }
    }
}

/// Failure details carried inside an error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotError {
    /// Stable taxonomy code, e.g. `NotFound`, `InvalidArgument`, `StorageFault`.
    pub code: String,
    /// Human-readable diagnostics, not meant for programmatic matching.
    pub message: String,
}

/// Encodes a successful snapshot of the given entries.
pub fn encode_entries(entries: &[Entry]) -> EncodeResult<Vec<u8>> {
    let snapshot = Snapshot {
        schema: SCHEMA_VERSION,
        entries: entries.iter().map(EntryView::from_entry).collect(),
        error: None,
    };
    encode(&snapshot)
}

/// Encodes a failure snapshot with an empty entries list.
pub fn encode_error(code: &str, message: &str) -> EncodeResult<Vec<u8>> {
    let snapshot = Snapshot {
        schema: SCHEMA_VERSION,
        entries: Vec::new(),
        error: Some(SnapshotError {
            code: code.to_string(),
            message: message.to_string(),
        }),
    };
    encode(&snapshot)
}

/// Decodes a snapshot payload produced by [`encode_entries`] or
/// [`encode_error`]. Intended for boundary counterparts and tests.
pub fn decode(bytes: &[u8]) -> EncodeResult<Snapshot> {
    Ok(serde_json::from_slice(bytes)?)
}

fn encode(snapshot: &Snapshot) -> EncodeResult<Vec<u8>> {
    Ok(serde_json::to_vec(snapshot)?)
}
