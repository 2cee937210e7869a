//! Application-level commands.

use super::script_text;
use crate::Result;
use crate::bridge::{ArcScript, ScriptExecutor};

/// Arc's version, as printed by the bridge.
pub fn version(executor: &dyn ScriptExecutor) -> Result<String> {
    executor
        .execute(&ArcScript::version().into_script())
        .map(script_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::FakeExecutor;

    #[test]
    fn test_version() {
        let executor = FakeExecutor::new().respond("1.43.0\n");
        assert_eq!(version(&executor).unwrap(), "1.43.0\n");
        assert_eq!(executor.bodies(), vec![ArcScript::version().build()]);
    }

    #[test]
    fn test_version_when_not_running() {
        let executor = FakeExecutor::new().fail("Application isn’t running. (-600)");
        assert_eq!(
            version(&executor).unwrap_err().to_string(),
            "Application isn’t running. (-600)"
        );
    }
}
