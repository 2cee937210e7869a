//! Configuration for Arc Companion.
//!
//! ## config.kdl - User preferences
//!
//! Located at `$ARC_CONFIG`, or `~/.config/arc-companion/config.kdl`
//! (platform config directory). The file is optional.
//!
//! Contains:
//! - `history-path` - Arc's History database, for non-default profiles
//! - `osascript` - Program used to run automation scripts
//! - `output-format` - "table" or "json"
//!
//! ## Precedence
//!
//! CLI flag > environment variable > config.kdl > defaults
//!
//! Use the [`resolver`] module for precedence resolution.

pub mod resolver;
pub mod schema;

pub use resolver::{
    ConfigOverrides, ConfigResolver, ProcessConfig, Resolved, ValueSource, resolve_config,
};
pub use schema::{CompanionConfig, OutputFormat};
