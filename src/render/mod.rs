//! Presentation of entity lists.
//!
//! The output mode is decided once per invocation by [`OutputMode::detect`];
//! [`render_list`] then writes the entities in the order it was given them.
//! Both modes carry the same entities: the JSON document holds every field of
//! an entity, the table the display-relevant subset.

pub mod table;

pub use table::TablePrinter;

use crate::models::Entity;
use crate::{Error, Result};
use std::io::{self, IsTerminal, Write};

/// How a listing is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// A JSON array, two-space indented
    Json,
    /// An aligned table; `width` is `None` when output is not a terminal
    Table { width: Option<usize> },
}

impl OutputMode {
    /// Pick the mode for stdout.
    pub fn for_stdout(json: bool) -> Result<Self> {
        Self::detect(json, io::stdout().is_terminal(), || {
            crossterm::terminal::size().map(|(columns, _)| usize::from(columns))
        })
    }

    /// Pick the mode from an explicit terminal probe.
    ///
    /// `terminal_width` is only consulted for interactive table output; if it
    /// fails there is no fallback.
    pub fn detect<F>(json: bool, is_terminal: bool, terminal_width: F) -> Result<Self>
    where
        F: FnOnce() -> io::Result<usize>,
    {
        if json {
            return Ok(OutputMode::Json);
        }
        if !is_terminal {
            return Ok(OutputMode::Table { width: None });
        }
        let width = terminal_width()
            .map_err(|e| Error::Terminal(format!("could not determine terminal width: {}", e)))?;
        Ok(OutputMode::Table { width: Some(width) })
    }
}

/// Write `items` in the given mode.
pub fn render_list<T: Entity>(items: &[T], mode: OutputMode, out: &mut dyn Write) -> Result<()> {
    match mode {
        OutputMode::Json => {
            // serde_json never HTML-escapes, so `&`, `<` and `>` stay as-is.
            serde_json::to_writer_pretty(&mut *out, items)?;
            writeln!(out)?;
        }
        OutputMode::Table { width } => {
            let mut printer = TablePrinter::new(width);
            for item in items {
                printer.add_row(item.table_row());
            }
            printer.render(out)?;
        }
    }
    Ok(())
}
