//! Window commands.

use crate::Result;
use crate::bridge::script::TabTarget;
use crate::bridge::{ArcScript, Script, ScriptExecutor, decode_list};
use crate::models::Window;

/// List windows in the order Arc reports them.
pub fn list_windows(executor: &dyn ScriptExecutor) -> Result<Vec<Window>> {
    let raw = executor.execute(&Script::list_windows())?;
    decode_list(&raw)
}

/// Open a new window, optionally loading `url` in it, and bring Arc forward.
pub fn create_window(
    executor: &dyn ScriptExecutor,
    incognito: bool,
    url: Option<&str>,
) -> Result<()> {
    executor.execute(&ArcScript::create_window(incognito).into_script())?;

    match url {
        // Opening the tab in the new front window also activates Arc.
        Some(url) => {
            executor.execute(&ArcScript::create_tab(url, TabTarget::FrontWindow).into_script())?
        }
        None => executor.execute(&ArcScript::activate().into_script())?,
    };
    Ok(())
}

/// Close the given windows in order, or the front window when `window_ids` is empty.
pub fn close_windows(executor: &dyn ScriptExecutor, window_ids: &[i64]) -> Result<()> {
    if window_ids.is_empty() {
        executor.execute(&ArcScript::close_window(None).into_script())?;
        return Ok(());
    }
    for &window_id in window_ids {
        executor.execute(&ArcScript::close_window(Some(window_id)).into_script())?;
    }
    Ok(())
}
