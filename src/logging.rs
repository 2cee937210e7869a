//! Diagnostic logging on stderr.
//!
//! stdout is reserved for command payloads (tables, JSON, script output);
//! every log line goes to stderr. The filter comes from `ARC_LOG`, then
//! `RUST_LOG`, then the `-v` count.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding a log filter directive.
pub const LOG_ENV: &str = "ARC_LOG";

/// Default level for a given number of `-v` flags.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            let level = level_for_verbosity(verbose);
            // The binary crate is `arc`, the library `arc_companion`.
            EnvFilter::new(format!("arc={level},arc_companion={level}"))
        })
}

/// Initialize the logging subsystem.
///
/// Must be called once at startup, before any logging occurs.
pub fn init_logging(verbose: u8) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time();

    // A subscriber may already be set when embedded; logging is best effort.
    let _ = tracing_subscriber::registry()
        .with(filter(verbose))
        .with(fmt_layer)
        .try_init();
}
