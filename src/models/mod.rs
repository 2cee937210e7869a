//! Data models for Arc entities.
//!
//! This module defines the core data structures:
//! - `Tab` - A browser tab with its raw location tag
//! - `TabState` - The classified state of a tab, derived from its location
//! - `Window` - A browser window
//! - `Space` - An Arc space in the front window
//! - `HistoryEntry` - A visited address from the history database
//!
//! Entities are produced fresh on every invocation and never persisted.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Common behavior of everything a listing command can present.
pub trait Entity: Serialize + DeserializeOwned {
    /// Human name of the entity kind, used in decode errors.
    const KIND: &'static str;

    /// Table cells for this entity, in display order.
    fn table_row(&self) -> Vec<String>;
}

/// Classified state of a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabState {
    Pinned,
    Unpinned,
    /// Arc calls these "top apps"; they live in the favorites bar.
    Favorite,
    Unknown,
}

impl TabState {
    /// Coarse ordering tier: favorites first, then pinned, then everything else.
    pub fn rank(self) -> u8 {
        match self {
            TabState::Favorite => 0,
            TabState::Pinned => 1,
            TabState::Unpinned | TabState::Unknown => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TabState::Pinned => "Pinned",
            TabState::Unpinned => "Unpinned",
            TabState::Favorite => "Favorite",
            TabState::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TabState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map a raw location tag reported by Arc to a tab state.
///
/// This is the only place tab semantics are encoded. Any tag outside the
/// known set, including the empty string, maps to [`TabState::Unknown`].
pub fn classify(location: &str) -> TabState {
    match location {
        "pinned" => TabState::Pinned,
        "unpinned" => TabState::Unpinned,
        "topApp" => TabState::Favorite,
        _ => TabState::Unknown,
    }
}

/// A tab in one of Arc's windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    /// Display title (may be empty)
    pub title: String,

    /// Address loaded in the tab
    pub url: String,

    /// Identifier of the owning window
    pub window_id: i64,

    /// Session-scoped identifier, not stable across restarts
    pub tab_id: i64,

    /// Raw location tag ("pinned", "unpinned", "topApp", ...)
    pub location: String,
}

impl Tab {
    /// Classified state, always recomputed from the raw location tag.
    pub fn state(&self) -> TabState {
        classify(&self.location)
    }
}

impl Entity for Tab {
    const KIND: &'static str = "tab";

    fn table_row(&self) -> Vec<String> {
        vec![
            self.tab_id.to_string(),
            self.state().to_string(),
            self.title.clone(),
            self.url.clone(),
        ]
    }
}

/// A browser window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub id: i64,
    pub title: String,
}

impl Entity for Window {
    const KIND: &'static str = "window";

    fn table_row(&self) -> Vec<String> {
        vec![self.id.to_string(), self.title.clone()]
    }
}

/// A space in the front window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub id: i64,
    pub title: String,
}

impl Entity for Space {
    const KIND: &'static str = "space";

    fn table_row(&self) -> Vec<String> {
        vec![self.id.to_string(), self.title.clone()]
    }
}

/// A visited address, collapsed to its most recent visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Row identifier, unique within one snapshot
    pub id: i64,
    pub url: String,
    pub title: String,
    /// Local time of the last visit, e.g. "2024-05-01 13:37:00"
    pub last_visited_at: String,
}

impl Entity for HistoryEntry {
    const KIND: &'static str = "history entry";

    fn table_row(&self) -> Vec<String> {
        vec![
            self.url.clone(),
            self.title.clone(),
            self.last_visited_at.clone(),
        ]
    }
}
