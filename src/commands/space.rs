//! Space commands.

use crate::Result;
use crate::bridge::{ArcScript, Script, ScriptExecutor, decode_list};
use crate::models::Space;

/// List the spaces of the front window in the order Arc reports them.
pub fn list_spaces(executor: &dyn ScriptExecutor) -> Result<Vec<Space>> {
    let raw = executor.execute(&Script::list_spaces())?;
    decode_list(&raw)
}

pub fn focus_space(executor: &dyn ScriptExecutor, space_id: i64) -> Result<()> {
    executor.execute(&ArcScript::focus_space(space_id).into_script())?;
    Ok(())
}
