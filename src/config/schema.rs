//! KDL schema for config.kdl.
//!
//! This module provides:
//! - Rust structs representing the KDL schema
//! - Parsing from KDL documents and files
//! - Validation functions

use crate::{Error, Result};
use kdl::KdlDocument;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Output format preference for listing commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned table on a terminal, tab-separated otherwise (default)
    #[default]
    Table,
    /// JSON document
    Json,
}

impl OutputFormat {
    /// Parse from string, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User preferences stored in config.kdl.
///
/// # KDL Schema
///
/// ```kdl
/// history-path "/Users/me/Library/Application Support/Arc/User Data/Profile 1/History"
/// osascript "/usr/bin/osascript"
/// output-format "json"  // or "table"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanionConfig {
    /// Location of Arc's History database
    pub history_path: Option<PathBuf>,

    /// Program used to run automation scripts
    pub osascript: Option<String>,

    /// Default output format for listing commands
    pub output_format: Option<OutputFormat>,
}

impl CompanionConfig {
    /// Create an empty config with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse config from a KDL document.
    ///
    /// Unknown nodes are ignored; known nodes with an unusable value are errors.
    pub fn from_kdl(doc: &KdlDocument) -> Result<Self> {
        let mut config = Self::new();

        if let Some(path) = string_value(doc, "history-path")? {
            config.history_path = Some(PathBuf::from(path));
        }

        if let Some(program) = string_value(doc, "osascript")? {
            config.osascript = Some(program);
        }

        if let Some(format) = string_value(doc, "output-format")? {
            config.output_format = Some(OutputFormat::parse(&format).ok_or_else(|| {
                Error::Config(format!(
                    "output-format must be \"table\" or \"json\", got {:?}",
                    format
                ))
            })?);
        }

        Ok(config)
    }

    /// Parse config from KDL text.
    pub fn parse(content: &str) -> Result<Self> {
        let doc: KdlDocument = content
            .parse()
            .map_err(|e| Error::Config(format!("invalid config.kdl: {}", e)))?;
        Self::from_kdl(&doc)
    }

    /// Load config from `path`. A missing file is an empty config.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(Error::Config(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// First argument of node `name`, which must be a non-empty string if present.
fn string_value(doc: &KdlDocument, name: &str) -> Result<Option<String>> {
    let Some(node) = doc.get(name) else {
        return Ok(None);
    };
    match node.entries().first().and_then(|entry| entry.value().as_string()) {
        Some(s) if !s.is_empty() => Ok(Some(s.to_string())),
        _ => Err(Error::Config(format!("{} expects a non-empty string", name))),
    }
}
