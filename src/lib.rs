//! Arc Companion - a command-line companion for the Arc browser.
//!
//! This library provides the core functionality for the `arc` CLI tool:
//! acquiring tabs, windows and spaces from the running browser through the
//! automation bridge, searching the on-disk visit history through a private
//! snapshot, and rendering the results as tables or JSON.

pub mod bridge;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod models;
pub mod render;
pub mod storage;

/// Library-level error type for Arc Companion operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The automation bridge failed; the message is its diagnostic, verbatim.
    #[error("{0}")]
    Script(String),

    #[error("{context}: {source}")]
    Snapshot {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Arc Companion operations.
pub type Result<T> = std::result::Result<T, Error>;
