//! AppleScript generation for Arc actions.
//!
//! This module provides a builder for the AppleScript bodies behind the
//! action commands. It does not execute anything, it only produces the text
//! handed to a [`ScriptExecutor`](super::ScriptExecutor).

use super::Script;

/// Where a new tab should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabTarget {
    /// The front window (default)
    FrontWindow,
    /// A space of the front window, by the index `arc space list` reports
    Space(i64),
    /// A Little Arc window
    Little,
}

/// Builder for AppleScript bodies addressed to Arc.
///
/// Every script is wrapped in `tell application "Arc"`; nested `tell` blocks
/// are closed automatically by [`ArcScript::build`].
#[derive(Debug, Clone)]
pub struct ArcScript {
    lines: Vec<String>,
    depth: usize,
}

impl ArcScript {
    fn new() -> Self {
        Self {
            lines: vec![r#"tell application "Arc""#.to_string()],
            depth: 1,
        }
    }

    /// Add a statement at the current nesting level.
    fn line(mut self, statement: &str) -> Self {
        self.lines
            .push(format!("{}{}", "  ".repeat(self.depth), statement));
        self
    }

    /// Open a nested `tell` block.
    fn tell(self, target: &str) -> Self {
        let mut script = self.line(&format!("tell {}", target));
        script.depth += 1;
        script
    }

    /// Close the innermost `tell` block.
    fn end(mut self) -> Self {
        self.depth -= 1;
        self.line("end tell")
    }

    /// Build the final script text.
    pub fn build(mut self) -> String {
        while self.depth > 0 {
            self = self.end();
        }
        self.lines.join("\n")
    }

    /// Build the final script, ready for an executor.
    pub fn into_script(self) -> Script {
        Script::applescript(self.build())
    }

    /// Report Arc's version.
    ///
    /// # Example
    /// ```
    /// use arc_companion::bridge::ArcScript;
    /// let script = ArcScript::version();
    /// assert_eq!(script.build(), "tell application \"Arc\"\n  return version\nend tell");
    /// ```
    pub fn version() -> Self {
        Self::new().line("return version")
    }

    /// Bring Arc to the foreground.
    pub fn activate() -> Self {
        Self::new().line("activate")
    }

    /// Report the URL of the active tab of the front window.
    pub fn active_tab_url() -> Self {
        Self::new().line("return URL of active tab of front window")
    }

    /// Report the title of the active tab of the front window.
    pub fn active_tab_title() -> Self {
        Self::new().line("return title of active tab of front window")
    }

    /// Select a tab of the front window and bring Arc forward.
    pub fn focus_tab(tab_id: i64) -> Self {
        Self::new()
            .tell("front window")
            .line(&format!("tell tab {} to select", tab_id))
            .end()
            .line("activate")
    }

    /// Open `url` in a new tab.
    ///
    /// # Example
    /// ```
    /// use arc_companion::bridge::ArcScript;
    /// use arc_companion::bridge::script::TabTarget;
    /// let script = ArcScript::create_tab("https://example.com", TabTarget::Little);
    /// assert_eq!(
    ///     script.build(),
    ///     "tell application \"Arc\"\n  make new tab with properties {URL:\"https://example.com\"}\nend tell"
    /// );
    /// ```
    pub fn create_tab(url: &str, target: TabTarget) -> Self {
        let make = format!("make new tab with properties {{URL:{}}}", quote(url));
        match target {
            TabTarget::Little => Self::new().line(&make),
            TabTarget::Space(space_id) => Self::new()
                .tell("front window")
                .tell(&format!("space {}", space_id))
                .line(&make)
                .end()
                .end()
                .line("activate"),
            TabTarget::FrontWindow => Self::new()
                .tell("front window")
                .line(&make)
                .end()
                .line("activate"),
        }
    }

    /// Close a tab of the front window, or its active tab.
    pub fn close_tab(tab_id: Option<i64>) -> Self {
        Self::new()
            .tell("front window")
            .line(&format!("tell {} to close", tab_ref(tab_id)))
    }

    /// Reload a tab of the front window, or its active tab.
    pub fn reload_tab(tab_id: Option<i64>) -> Self {
        Self::new()
            .tell("front window")
            .line(&format!("tell {} to reload", tab_ref(tab_id)))
    }

    /// Run JavaScript in a tab of the front window, or in its active tab.
    pub fn execute_javascript(javascript: &str, tab_id: Option<i64>) -> Self {
        Self::new()
            .tell("front window")
            .tell(&tab_ref(tab_id))
            .line(&format!("execute javascript {}", quote(javascript)))
    }

    /// Open a new window.
    pub fn create_window(incognito: bool) -> Self {
        if incognito {
            Self::new()
                .line("make new window with properties {incognito:true}")
                .line("activate")
        } else {
            Self::new().line("make new window")
        }
    }

    /// Close a window, or the front window.
    pub fn close_window(window_id: Option<i64>) -> Self {
        let target = match window_id {
            Some(id) => format!("window {}", id),
            None => "front window".to_string(),
        };
        Self::new().line(&format!("tell {} to close", target))
    }

    /// Switch the front window to a space.
    pub fn focus_space(space_id: i64) -> Self {
        Self::new()
            .tell("front window")
            .line(&format!("tell space {} to focus", space_id))
    }
}

fn tab_ref(tab_id: Option<i64>) -> String {
    match tab_id {
        Some(id) => format!("tab {}", id),
        None => "active tab".to_string(),
    }
}

/// Render `value` as an AppleScript string literal.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
