//! Tab commands.

use super::script_text;
use crate::bridge::script::TabTarget;
use crate::bridge::{ArcScript, Script, ScriptExecutor, decode_list};
use crate::models::{Tab, TabState};
use crate::{Error, Result};
use tracing::debug;

/// Which tab states a listing should include.
///
/// An empty filter includes every tab. A non-empty filter includes a tab when
/// its state is any of the requested ones; `Unknown` tabs never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabFilter {
    states: Vec<TabState>,
}

impl TabFilter {
    /// A filter that lets every tab through.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build from the `--pinned`, `--unpinned` and `--favorite` flags.
    pub fn from_flags(pinned: bool, unpinned: bool, favorite: bool) -> Self {
        let mut states = Vec::new();
        if pinned {
            states.push(TabState::Pinned);
        }
        if unpinned {
            states.push(TabState::Unpinned);
        }
        if favorite {
            states.push(TabState::Favorite);
        }
        Self { states }
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn matches(&self, tab: &Tab) -> bool {
        if self.states.is_empty() {
            return true;
        }
        let state = tab.state();
        state != TabState::Unknown && self.states.contains(&state)
    }
}

/// Keep the tabs the filter lets through, in their original order.
pub fn filter_tabs(tabs: Vec<Tab>, filter: &TabFilter) -> Vec<Tab> {
    tabs.into_iter().filter(|tab| filter.matches(tab)).collect()
}

/// Order tabs for display: favorites, then pinned, then the rest, each group
/// by ascending id. Equal ids from different windows fall back to the window
/// id. The sort is stable.
pub fn sort_tabs(tabs: &mut [Tab]) {
    tabs.sort_by(|a, b| {
        a.state()
            .rank()
            .cmp(&b.state().rank())
            .then(a.tab_id.cmp(&b.tab_id))
            .then(a.window_id.cmp(&b.window_id))
    });
}

/// Fetch, classify, filter and order the tabs of the front window.
pub fn list_tabs(executor: &dyn ScriptExecutor, filter: &TabFilter) -> Result<Vec<Tab>> {
    let raw = executor.execute(&Script::list_tabs())?;
    let tabs: Vec<Tab> = decode_list(&raw)?;
    let total = tabs.len();

    let mut tabs = filter_tabs(tabs, filter);
    sort_tabs(&mut tabs);

    debug!(total, shown = tabs.len(), "listed tabs");
    Ok(tabs)
}

pub fn active_tab_url(executor: &dyn ScriptExecutor) -> Result<String> {
    executor
        .execute(&ArcScript::active_tab_url().into_script())
        .map(script_text)
}

pub fn active_tab_title(executor: &dyn ScriptExecutor) -> Result<String> {
    executor
        .execute(&ArcScript::active_tab_title().into_script())
        .map(script_text)
}

pub fn focus_tab(executor: &dyn ScriptExecutor, tab_id: i64) -> Result<()> {
    executor.execute(&ArcScript::focus_tab(tab_id).into_script())?;
    Ok(())
}

pub fn create_tab(executor: &dyn ScriptExecutor, url: &str, target: TabTarget) -> Result<()> {
    executor.execute(&ArcScript::create_tab(url, target).into_script())?;
    Ok(())
}

/// Close the given tabs in order, or the active tab when `tab_ids` is empty.
///
/// Stops at the first failure.
pub fn close_tabs(executor: &dyn ScriptExecutor, tab_ids: &[i64]) -> Result<()> {
    if tab_ids.is_empty() {
        executor.execute(&ArcScript::close_tab(None).into_script())?;
        return Ok(());
    }
    for &tab_id in tab_ids {
        executor.execute(&ArcScript::close_tab(Some(tab_id)).into_script())?;
    }
    Ok(())
}

pub fn reload_tab(executor: &dyn ScriptExecutor, tab_id: Option<i64>) -> Result<()> {
    executor.execute(&ArcScript::reload_tab(tab_id).into_script())?;
    Ok(())
}

/// Run JavaScript in a tab (or the active tab) and return what it printed.
pub fn execute_javascript(
    executor: &dyn ScriptExecutor,
    javascript: &str,
    tab_id: Option<i64>,
) -> Result<String> {
    if javascript.trim().is_empty() {
        return Err(Error::InvalidInput("no javascript provided".to_string()));
    }
    executor
        .execute(&ArcScript::execute_javascript(javascript, tab_id).into_script())
        .map(script_text)
}
