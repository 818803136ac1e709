//! Entry store orchestration.
//!
//! # Responsibility
//! - Own the SQLite connection selected by `(kind, name)`.
//! - Provide the five store operations with typed errors.
//!
//! # Invariants
//! - Every mutation answers with the refreshed full snapshot list.
//! - Mutations on a missing id fail with `NotFound`, never silently no-op.
//! - Store construction fails on unsupported kinds instead of guessing.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::model::entry::{Entry, EntryId};
use crate::repo::entry_repo::{EntryRepository, RepoError, SqliteEntryRepository};
use crate::search::fts::{search_entries, SearchError, SearchQuery};
use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error taxonomy.
///
/// `code()` provides the stable string used in error payloads at the
/// serialization boundary.
#[derive(Debug)]
pub enum StoreError {
    /// Unsupported kind, unusable name, or malformed caller input.
    InvalidArgument(String),
    Db(DbError),
    Repo(RepoError),
    Search(SearchError),
}

impl StoreError {
    /// Stable taxonomy code for boundary error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "InvalidArgument",
            Self::Repo(RepoError::NotFound(_)) => "NotFound",
            Self::Search(SearchError::InvalidQuery { .. }) => "InvalidArgument",
            Self::Db(_) | Self::Repo(_) | Self::Search(_) => "StorageFault",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "{message}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Search(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Search(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<SearchError> for StoreError {
    fn from(value: SearchError) -> Self {
        Self::Search(value)
    }
}

/// Backing medium selected by the `kind` argument of store construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// File-backed SQLite database; `name` is the database path.
    Production,
    /// In-memory database scoped to the store's lifetime.
    Memory,
}

impl StoreKind {
    /// Parses a caller-provided kind string, case-insensitively.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "production" => Some(Self::Production),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Memory => "memory",
        }
    }
}

/// The authoritative entry collection behind one SQLite connection.
#[derive(Debug)]
pub struct EntryStore {
    conn: Connection,
}

impl EntryStore {
    /// Opens a store for the given `(kind, name)` pair.
    ///
    /// # Errors
    /// - `InvalidArgument` when `kind` is unsupported or a production store
    ///   is requested with an empty `name`.
    /// - `Db` when connection bootstrap or migrations fail.
    pub fn open(kind: &str, name: &str) -> StoreResult<Self> {
        let Some(parsed) = StoreKind::parse(kind) else {
            error!("event=store_open module=store status=error error_code=unsupported_kind kind={kind}");
            return Err(StoreError::InvalidArgument(format!(
                "unsupported store kind `{kind}`; expected production|memory"
            )));
        };

        let conn = match parsed {
            StoreKind::Production => {
                let path = name.trim();
                if path.is_empty() {
                    error!("event=store_open module=store status=error error_code=empty_name kind=production");
                    return Err(StoreError::InvalidArgument(
                        "production store requires a non-empty database path".to_string(),
                    ));
                }
                open_db(path)?
            }
            StoreKind::Memory => open_db_in_memory()?,
        };

        info!(
            "event=store_open module=store status=ok kind={}",
            parsed.label()
        );
        Ok(Self { conn })
    }

    /// Returns all entries, newest-first.
    pub fn current(&self) -> StoreResult<Vec<Entry>> {
        let repo = SqliteEntryRepository::new(&self.conn);
        Ok(repo.list_entries()?)
    }

    /// Creates an entry and returns the refreshed snapshot list.
    pub fn entry_create(&self, text: &str, color: i64) -> StoreResult<Vec<Entry>> {
        let repo = SqliteEntryRepository::new(&self.conn);
        let created = repo.create_entry(text, color)?;
        info!(
            "event=entry_create module=store status=ok id={} color={color}",
            created.id
        );
        self.current()
    }

    /// Replaces `text`/`color` on an existing entry and returns the refreshed
    /// snapshot list.
    pub fn entry_update(&self, id: EntryId, text: &str, color: i64) -> StoreResult<Vec<Entry>> {
        let repo = SqliteEntryRepository::new(&self.conn);
        repo.update_entry(id, text, color)?;
        info!("event=entry_update module=store status=ok id={id} color={color}");
        self.current()
    }

    /// Deletes an entry and returns the refreshed snapshot list.
    pub fn entry_delete(&self, id: EntryId) -> StoreResult<Vec<Entry>> {
        let repo = SqliteEntryRepository::new(&self.conn);
        repo.delete_entry(id)?;
        info!("event=entry_delete module=store status=ok id={id}");
        self.current()
    }

    /// Searches entry text; a blank query answers with the full snapshot.
    pub fn entry_search(&self, query: &str) -> StoreResult<Vec<Entry>> {
        if query.trim().is_empty() {
            return self.current();
        }

        Ok(search_entries(&self.conn, &SearchQuery::new(query))?)
    }
}
