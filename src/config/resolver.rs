//! Precedence resolution for configuration.
//!
//! ## Precedence (highest to lowest)
//!
//! 1. CLI flags (passed at runtime)
//! 2. Environment variables (`ARC_HISTORY_PATH`, `ARC_OSASCRIPT`, `ARC_OUTPUT_FORMAT`)
//! 3. config.kdl (`$ARC_CONFIG`, else `<config dir>/arc-companion/config.kdl`)
//! 4. Built-in defaults
//!
//! Each setting is resolved on demand by [`ConfigResolver`], so a command
//! never fails on a setting it does not use.

use crate::config::{CompanionConfig, OutputFormat};
use crate::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "ARC_CONFIG";
/// Environment variable overriding the History database location.
pub const HISTORY_PATH_ENV: &str = "ARC_HISTORY_PATH";
/// Environment variable overriding the automation program.
pub const OSASCRIPT_ENV: &str = "ARC_OSASCRIPT";
/// Environment variable overriding the output format.
pub const OUTPUT_FORMAT_ENV: &str = "ARC_OUTPUT_FORMAT";

const DEFAULT_OSASCRIPT: &str = "osascript";

/// Tracks where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Value from CLI flag
    CliFlag,
    /// Value from environment variable
    EnvVar(String),
    /// Value from config.kdl
    ConfigFile,
    /// Built-in default value
    Default,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::CliFlag => write!(f, "cli"),
            ValueSource::EnvVar(name) => write!(f, "env:{}", name),
            ValueSource::ConfigFile => write!(f, "config"),
            ValueSource::Default => write!(f, "default"),
        }
    }
}

/// A resolved value with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: ValueSource,
}

impl<T> Resolved<T> {
    pub fn new(value: T, source: ValueSource) -> Self {
        Self { value, source }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub history_path: Option<PathBuf>,
    /// `--json` only ever forces JSON; its absence defers to lower layers.
    pub json: bool,
}

/// Default location of Arc's History database.
pub fn default_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;
    Ok(home
        .join("Library")
        .join("Application Support")
        .join("Arc")
        .join("User Data")
        .join("Default")
        .join("History"))
}

/// Location of config.kdl, honoring `ARC_CONFIG`.
pub fn config_file_path<F>(env: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = env(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("arc-companion").join("config.kdl"))
}

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Resolver over the process environment and the config.kdl it points to.
pub type ProcessConfig = ConfigResolver<fn(&str) -> Option<String>>;

/// Load config.kdl and prepare resolution against the process environment.
pub fn resolve_config(overrides: ConfigOverrides) -> Result<ProcessConfig> {
    let env: fn(&str) -> Option<String> = process_env;
    let file = match config_file_path(&env) {
        Some(path) => CompanionConfig::load(&path)?,
        None => CompanionConfig::new(),
    };
    Ok(ConfigResolver::new(overrides, env, file))
}

/// Layered configuration; every accessor applies the precedence rules.
#[derive(Debug, Clone)]
pub struct ConfigResolver<F> {
    overrides: ConfigOverrides,
    env: F,
    file: CompanionConfig,
}

impl<F> ConfigResolver<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn new(overrides: ConfigOverrides, env: F, file: CompanionConfig) -> Self {
        Self {
            overrides,
            env,
            file,
        }
    }

    /// Environment value, with empty strings treated as unset.
    fn env_value(&self, name: &str) -> Option<String> {
        (self.env)(name).filter(|v| !v.is_empty())
    }

    /// The History database to search.
    pub fn history_path(&self) -> Result<Resolved<PathBuf>> {
        let resolved = if let Some(ref path) = self.overrides.history_path {
            Resolved::new(path.clone(), ValueSource::CliFlag)
        } else if let Some(path) = self.env_value(HISTORY_PATH_ENV) {
            Resolved::new(
                PathBuf::from(path),
                ValueSource::EnvVar(HISTORY_PATH_ENV.to_string()),
            )
        } else if let Some(ref path) = self.file.history_path {
            Resolved::new(path.clone(), ValueSource::ConfigFile)
        } else {
            Resolved::new(default_history_path()?, ValueSource::Default)
        };
        debug!(
            history_path = %resolved.value.display(),
            source = %resolved.source,
            "resolved history path"
        );
        Ok(resolved)
    }

    /// The program that runs automation scripts.
    pub fn osascript(&self) -> Resolved<String> {
        let resolved = if let Some(program) = self.env_value(OSASCRIPT_ENV) {
            Resolved::new(program, ValueSource::EnvVar(OSASCRIPT_ENV.to_string()))
        } else if let Some(ref program) = self.file.osascript {
            Resolved::new(program.clone(), ValueSource::ConfigFile)
        } else {
            Resolved::new(DEFAULT_OSASCRIPT.to_string(), ValueSource::Default)
        };
        debug!(osascript = %resolved.value, source = %resolved.source, "resolved osascript");
        resolved
    }

    /// The output format for listing commands.
    pub fn output_format(&self) -> Result<Resolved<OutputFormat>> {
        let resolved = if self.overrides.json {
            Resolved::new(OutputFormat::Json, ValueSource::CliFlag)
        } else if let Some(value) = self.env_value(OUTPUT_FORMAT_ENV) {
            let format = OutputFormat::parse(&value).ok_or_else(|| {
                Error::Config(format!(
                    "{} must be \"table\" or \"json\", got {:?}",
                    OUTPUT_FORMAT_ENV, value
                ))
            })?;
            Resolved::new(format, ValueSource::EnvVar(OUTPUT_FORMAT_ENV.to_string()))
        } else if let Some(format) = self.file.output_format {
            Resolved::new(format, ValueSource::ConfigFile)
        } else {
            Resolved::new(OutputFormat::default(), ValueSource::Default)
        };
        debug!(
            output_format = %resolved.value,
            source = %resolved.source,
            "resolved output format"
        );
        Ok(resolved)
    }
}
