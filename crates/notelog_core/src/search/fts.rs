//! SQLite FTS5-based search over entry text.
//!
//! # Responsibility
//! - Provide keyword search with per-term prefix matching.
//! - Return full entry rows for matched ids.
//!
//! # Invariants
//! - Matching is porter-stemmed and case-insensitive.
//! - Result ordering is deterministic: `created` DESC, id DESC.

use crate::db::DbError;
use crate::model::entry::Entry;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for search APIs.
pub type SearchResult<T> = Result<T, SearchError>;

/// Search-layer error for query parsing, DB interaction and result decoding.
#[derive(Debug)]
pub enum SearchError {
    /// User-provided query cannot be parsed by FTS5 syntax.
    InvalidQuery { query: String, message: String },
    Db(DbError),
    InvalidData(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery { query, message } => {
                write!(f, "invalid full-text query `{query}`: {message}")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid search row: {message}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidQuery { .. } => None,
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for SearchError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SearchError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Search options for full-text query behavior.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// User query text.
    pub text: String,
    /// Optional cap on returned rows. `None` returns every match.
    pub limit: Option<u32>,
    /// Whether to pass text directly as raw FTS5 expression.
    ///
    /// Default is `false` so plain user input never trips FTS5 syntax errors.
    pub raw_fts_syntax: bool,
}

impl SearchQuery {
    /// Creates a query with no row cap and escaped user input.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: None,
            raw_fts_syntax: false,
        }
    }
}

/// Searches entries via FTS5 and returns matching rows newest-first.
///
/// Each whitespace-separated term must match with prefix semantics, so
/// partially typed words still hit. Returns an empty list for blank queries.
pub fn search_entries(conn: &Connection, query: &SearchQuery) -> SearchResult<Vec<Entry>> {
    let Some(match_expr) = build_match_expression(query) else {
        return Ok(Vec::new());
    };

    let mut sql = String::from(
        "SELECT
            entries.id AS id,
            entries.text AS text,
            entries.color AS color,
            entries.created AS created,
            entries.modified AS modified
         FROM entries_fts
         JOIN entries ON entries.id = entries_fts.rowid
         WHERE entries_fts MATCH ?
         ORDER BY entries.created DESC, entries.id DESC",
    );
    let mut bind_values: Vec<Value> = vec![Value::Text(match_expr.clone())];

    if let Some(limit) = query.limit {
        sql.push_str(" LIMIT ?");
        bind_values.push(Value::Integer(i64::from(limit)));
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt
        .query(params_from_iter(bind_values))
        .map_err(|err| map_query_error(err, &match_expr))?;
    let mut entries = Vec::new();

    while let Some(row) = rows
        .next()
        .map_err(|err| map_query_error(err, &match_expr))?
    {
        entries.push(parse_entry_row(row)?);
    }

    Ok(entries)
}

fn parse_entry_row(row: &Row<'_>) -> SearchResult<Entry> {
    let id: i64 = row.get("id")?;
    if id <= 0 {
        return Err(SearchError::InvalidData(format!("invalid id `{id}`")));
    }

    Ok(Entry {
        id,
        text: row.get("text")?,
        color: row.get("color")?,
        created: row.get("created")?,
        modified: row.get("modified")?,
    })
}

fn build_match_expression(query: &SearchQuery) -> Option<String> {
    let text = query.text.trim();
    if text.is_empty() {
        return None;
    }

    if query.raw_fts_syntax {
        return Some(text.to_string());
    }

    let terms = text
        .split_whitespace()
        .map(escape_fts_prefix_term)
        .collect::<Vec<_>>();

    if terms.is_empty() {
        return None;
    }

    Some(terms.join(" AND "))
}

fn escape_fts_prefix_term(raw: &str) -> String {
    let escaped = raw.replace('"', "\"\"");
    format!("\"{escaped}\"*")
}

fn map_query_error(err: rusqlite::Error, query: &str) -> SearchError {
    if is_match_syntax_error(&err) {
        return SearchError::InvalidQuery {
            query: query.to_string(),
            message: err.to_string(),
        };
    }

    SearchError::Db(DbError::Sqlite(err))
}

fn is_match_syntax_error(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(_, Some(message)) => {
            let msg = message.to_lowercase();
            (msg.contains("fts5") && msg.contains("syntax"))
                || msg.contains("malformed match expression")
                || msg.contains("unterminated")
        }
        _ => false,
    }
}
