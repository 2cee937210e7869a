//! Storage layer for Arc's visit history.
//!
//! Arc keeps a Chromium-format SQLite `History` file in its profile directory.
//! This module never touches that file beyond reading its bytes once:
//!
//! - [`Snapshot`] copies it to a private temporary file
//! - [`HistoryQuery`] compiles search filters into a parameterized statement
//! - [`HistoryStore`] runs the statement against the snapshot and scans rows
//!   into [`HistoryEntry`] values

pub mod query;
pub mod snapshot;

pub use query::{CompiledQuery, HistoryQuery};
pub use snapshot::Snapshot;

use crate::models::HistoryEntry;
use crate::{Error, Result};
use rusqlite::{Connection, OpenFlags, Row, params_from_iter};
use std::path::Path;
use tracing::debug;

/// Read-only view of a history snapshot.
pub struct HistoryStore {
    // Declared before the snapshot so the connection closes before the file is removed.
    conn: Connection,
    snapshot: Snapshot,
}

impl HistoryStore {
    /// Snapshot the live history file and open the copy.
    pub fn open(live: &Path) -> Result<Self> {
        Self::from_snapshot(Snapshot::capture(live)?)
    }

    /// Like [`HistoryStore::open`], placing the snapshot inside `dir`.
    pub fn open_with_snapshot_dir(live: &Path, dir: &Path) -> Result<Self> {
        Self::from_snapshot(Snapshot::capture_in(live, dir)?)
    }

    fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let conn = Connection::open_with_flags(snapshot.path(), OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(Self { conn, snapshot })
    }

    /// Path of the snapshot backing this store.
    pub fn snapshot_path(&self) -> &Path {
        self.snapshot.path()
    }

    /// Run a history search.
    ///
    /// The first row that does not have the expected shape aborts the search;
    /// no partial results are returned.
    pub fn search(&self, query: &HistoryQuery) -> Result<Vec<HistoryEntry>> {
        let compiled = query.compile();
        debug!(sql = %compiled.sql, params = compiled.params.len(), "querying history");

        let mut stmt = self.conn.prepare(&compiled.sql)?;
        let rows = stmt.query_map(params_from_iter(compiled.params.iter()), scan_entry)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row.map_err(row_error)?);
        }

        debug!(count = entries.len(), "scanned history rows");
        Ok(entries)
    }
}

/// Scan a row of `id, url, title, lastVisitedAt` positionally.
fn scan_entry(row: &Row<'_>) -> rusqlite::Result<HistoryEntry> {
    Ok(HistoryEntry {
        id: row.get(0)?,
        url: row.get(1)?,
        title: row.get(2)?,
        last_visited_at: row.get(3)?,
    })
}

fn row_error(err: rusqlite::Error) -> Error {
    match err {
        rusqlite::Error::InvalidColumnType(index, name, ty) => Error::Decode(format!(
            "history column {} ({}) has unexpected type {}",
            index, name, ty
        )),
        rusqlite::Error::FromSqlConversionFailure(index, ty, e) => Error::Decode(format!(
            "history column {} ({}) could not be converted: {}",
            index, ty, e
        )),
        rusqlite::Error::IntegralValueOutOfRange(index, value) => Error::Decode(format!(
            "history column {} is out of range: {}",
            index, value
        )),
        rusqlite::Error::Utf8Error(e) => {
            Error::Decode(format!("history row is not valid UTF-8: {}", e))
        }
        other => Error::Database(other),
    }
}
