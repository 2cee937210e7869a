//! Command implementations for the Arc Companion CLI.
//!
//! This module contains the business logic for each CLI command, organized by
//! entity type:
//! - `tab` - Listing, filtering and ordering tabs; tab actions
//! - `window` - Listing, opening and closing windows
//! - `space` - Listing and focusing spaces
//! - `history` - Searching the visit history
//! - `app` - Application-level queries
//!
//! Commands take the [`ScriptExecutor`](crate::bridge::ScriptExecutor) as a
//! parameter, so everything here runs without a browser in tests.

pub mod app;
pub mod history;
pub mod space;
pub mod tab;
pub mod window;

pub use app::version;
pub use history::{search_history, search_history_with_snapshot_dir};
pub use space::{focus_space, list_spaces};
pub use tab::{
    TabFilter, active_tab_title, active_tab_url, close_tabs, create_tab, execute_javascript,
    filter_tabs, focus_tab, list_tabs, reload_tab, sort_tabs,
};
pub use window::{close_windows, create_window, list_windows};

/// Text printed by a script, as the bridge returned it.
fn script_text(raw: Vec<u8>) -> String {
    String::from_utf8_lossy(&raw).into_owned()
}
