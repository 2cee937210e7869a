//! Automation bridge to the running Arc application.
//!
//! Scripts are plain data: the listing scripts are bundled JavaScript for
//! Automation files, the action scripts are AppleScript bodies produced by
//! [`ArcScript`]. A [`ScriptExecutor`] runs a script out of process and hands
//! back the raw output bytes; decoding happens in [`decode_list`].

pub mod script;

pub use script::ArcScript;

use crate::models::Entity;
use crate::{Error, Result};
use std::borrow::Cow;
use std::process::Command;
use tracing::debug;

const LIST_TABS: &str = include_str!("scripts/list-tabs.js");
const LIST_WINDOWS: &str = include_str!("scripts/list-windows.js");
const LIST_SPACES: &str = include_str!("scripts/list-spaces.js");

/// Language understood by the automation bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptLanguage {
    AppleScript,
    JavaScript,
}

impl ScriptLanguage {
    /// Name accepted by `osascript -l`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptLanguage::AppleScript => "AppleScript",
            ScriptLanguage::JavaScript => "JavaScript",
        }
    }
}

/// A script body together with the language it is written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    language: ScriptLanguage,
    body: Cow<'static, str>,
}

impl Script {
    pub fn applescript(body: impl Into<Cow<'static, str>>) -> Self {
        Self {
            language: ScriptLanguage::AppleScript,
            body: body.into(),
        }
    }

    pub fn javascript(body: impl Into<Cow<'static, str>>) -> Self {
        Self {
            language: ScriptLanguage::JavaScript,
            body: body.into(),
        }
    }

    /// Lists every tab of every window as a JSON array.
    pub fn list_tabs() -> Self {
        Self::javascript(LIST_TABS)
    }

    /// Lists every window as a JSON array.
    pub fn list_windows() -> Self {
        Self::javascript(LIST_WINDOWS)
    }

    /// Lists the spaces of the front window as a JSON array.
    pub fn list_spaces() -> Self {
        Self::javascript(LIST_SPACES)
    }

    pub fn language(&self) -> ScriptLanguage {
        self.language
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Runs automation scripts against the target application.
///
/// Implementations block until the script finishes. A failed run must carry
/// the external tool's diagnostic text in [`Error::Script`].
pub trait ScriptExecutor {
    fn execute(&self, script: &Script) -> Result<Vec<u8>>;
}

/// Executor backed by the `osascript` binary.
#[derive(Debug, Clone)]
pub struct Osascript {
    program: String,
}

impl Osascript {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ScriptExecutor for Osascript {
    fn execute(&self, script: &Script) -> Result<Vec<u8>> {
        debug!(
            program = %self.program,
            language = script.language().as_str(),
            bytes = script.body().len(),
            "running automation script"
        );

        let output = Command::new(&self.program)
            .args(["-l", script.language().as_str(), "-e", script.body()])
            .output()
            .map_err(|e| Error::Script(format!("Failed to run '{}': {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(status = ?output.status, "automation script failed");
            return Err(Error::Script(stderr.trim_end().to_string()));
        }

        Ok(output.stdout)
    }
}

/// Decode the raw output of a listing script into entities.
///
/// The payload must be a JSON array whose elements all have the entity's
/// fields; anything else fails as a whole and yields no entities.
pub fn decode_list<T: Entity>(raw: &[u8]) -> Result<Vec<T>> {
    let items: Vec<T> = serde_json::from_slice(raw).map_err(|e| {
        Error::Decode(format!("expected a JSON array of {} objects: {}", T::KIND, e))
    })?;
    debug!(kind = T::KIND, count = items.len(), "decoded entities");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Space, Tab, Window};

    #[test]
    fn test_decode_tabs() {
        let raw = br#"[
            {"title": "Inbox", "url": "https://mail.example.com", "windowId": 1, "tabId": 2, "location": "topApp"},
            {"title": "", "url": "about:blank", "windowId": 1, "tabId": 3, "location": ""}
        ]"#;
        let tabs: Vec<Tab> = decode_list(raw).unwrap();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].tab_id, 2);
        assert_eq!(tabs[0].location, "topApp");
        assert_eq!(tabs[1].title, "");
    }

    #[test]
    fn test_decode_tolerates_trailing_newline() {
        let windows: Vec<Window> = decode_list(b"[{\"id\": 1, \"title\": \"Main\"}]\n").unwrap();
        assert_eq!(
            windows,
            vec![Window {
                id: 1,
                title: "Main".to_string()
            }]
        );
    }

    #[test]
    fn test_decode_empty_array() {
        let spaces: Vec<Space> = decode_list(b"[]").unwrap();
        assert!(spaces.is_empty());
    }

    #[test]
    fn test_decode_object_instead_of_array_fails() {
        let raw = br#"{"title": "x", "url": "y", "windowId": 1, "tabId": 1, "location": "pinned"}"#;
        let err = decode_list::<Tab>(raw).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.to_string().contains("tab"));
    }

    #[test]
    fn test_decode_missing_field_fails_whole_payload() {
        let raw = br#"[
            {"title": "ok", "url": "https://a", "windowId": 1, "tabId": 1, "location": "pinned"},
            {"title": "broken", "url": "https://b", "windowId": 1, "location": "pinned"}
        ]"#;
        assert!(matches!(decode_list::<Tab>(raw), Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_wrong_field_type_fails() {
        let raw = br#"[{"id": "one", "title": "Main"}]"#;
        assert!(matches!(decode_list::<Window>(raw), Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            decode_list::<Space>(b"execution error: Arc got an error"),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn test_listing_scripts_are_javascript() {
        for script in [Script::list_tabs(), Script::list_windows(), Script::list_spaces()] {
            assert_eq!(script.language(), ScriptLanguage::JavaScript);
            assert!(script.body().contains("Application(\"Arc\")"));
            assert!(script.body().contains("JSON.stringify"));
        }
    }

    #[test]
    fn test_tab_and_space_listings_read_only_the_front_window() {
        // Actions address tabs and spaces through `front window`, so listed
        // ids must come from the same window.
        for script in [Script::list_tabs(), Script::list_spaces()] {
            assert!(script.body().contains("arc.windows[0]"));
            assert!(!script.body().contains("arc.windows()"));
        }
    }

    #[test]
    fn test_missing_program_is_script_error() {
        let executor = Osascript::new("/nonexistent/osascript-for-tests");
        let err = executor
            .execute(&Script::applescript("return 1"))
            .unwrap_err();
        assert!(matches!(err, Error::Script(_)));
        assert!(err.to_string().contains("/nonexistent/osascript-for-tests"));
    }

    #[cfg(unix)]
    mod process {
        use super::super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        fn fake_program(dir: &TempDir, body: &str) -> String {
            let path = dir.path().join("osascript");
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path.to_string_lossy().to_string()
        }

        #[test]
        fn test_passes_language_and_body() {
            let dir = TempDir::new().unwrap();
            let program = fake_program(&dir, r#"printf '%s|%s|%s|%s' "$1" "$2" "$3" "$4""#);
            let output = Osascript::new(program)
                .execute(&Script::javascript("JSON.stringify([])"))
                .unwrap();
            assert_eq!(
                String::from_utf8(output).unwrap(),
                "-l|JavaScript|-e|JSON.stringify([])"
            );
        }

        #[test]
        fn test_failure_carries_stderr_verbatim() {
            let dir = TempDir::new().unwrap();
            let program = fake_program(
                &dir,
                "echo 'execution error: Application isn’t running. (-600)' >&2\nexit 1",
            );
            let err = Osascript::new(program)
                .execute(&Script::applescript("return version"))
                .unwrap_err();
            assert_eq!(
                err.to_string(),
                "execution error: Application isn’t running. (-600)"
            );
        }
    }
}
