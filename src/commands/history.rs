//! History search.

use crate::Result;
use crate::models::HistoryEntry;
use crate::storage::{HistoryQuery, HistoryStore};
use std::path::Path;

/// Search the history file at `live` through a private snapshot.
///
/// The snapshot is removed before this returns, whether the search succeeded
/// or not.
pub fn search_history(live: &Path, query: &HistoryQuery) -> Result<Vec<HistoryEntry>> {
    let store = HistoryStore::open(live)?;
    store.search(query)
}

/// Like [`search_history`], placing the snapshot inside `snapshot_dir`.
pub fn search_history_with_snapshot_dir(
    live: &Path,
    snapshot_dir: &Path,
    query: &HistoryQuery,
) -> Result<Vec<HistoryEntry>> {
    let store = HistoryStore::open_with_snapshot_dir(live, snapshot_dir)?;
    store.search(query)
}
