//! CLI argument definitions for Arc Companion.

pub mod docs;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("ARC_GIT_COMMIT"),
    ", built ",
    env!("ARC_BUILD_TIMESTAMP"),
    ")"
);

/// Arc Companion - query and control the Arc browser from the terminal.
#[derive(Parser, Debug)]
#[command(name = "arc")]
#[command(author, version, long_version = LONG_VERSION)]
#[command(about = "Arc Companion CLI", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage tabs
    Tab {
        #[command(subcommand)]
        command: TabCommands,
    },

    /// Manage windows
    Window {
        #[command(subcommand)]
        command: WindowCommands,
    },

    /// Manage spaces
    Space {
        #[command(subcommand)]
        command: SpaceCommands,
    },

    /// Search history
    History {
        /// Only show entries whose URL or title contains this text
        #[arg(short, long)]
        query: Option<String>,

        /// Maximum number of entries (0 or less for no limit)
        #[arg(short, long, default_value_t = 100, allow_negative_numbers = true)]
        limit: i64,

        /// History database to search (defaults to Arc's default profile)
        #[arg(long)]
        history_path: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the version of Arc
    Version,

    /// Generate a Markdown command reference
    #[command(hide = true)]
    Docs,
}

/// Shared output flags for listing commands.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Tab subcommands
#[derive(Subcommand, Debug)]
pub enum TabCommands {
    /// List tabs
    #[command(visible_alias = "ls")]
    List {
        /// Only show pinned tabs
        #[arg(long)]
        pinned: bool,

        /// Only show unpinned tabs
        #[arg(long)]
        unpinned: bool,

        /// Only show favorite tabs
        #[arg(long)]
        favorite: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Get information about the active tab
    Get {
        #[command(subcommand)]
        command: TabGetCommands,
    },

    /// Select a tab by id
    Focus {
        /// Tab id, as shown by `arc tab list`
        tab_id: i64,
    },

    /// Create a new tab
    #[command(visible_aliases = ["open", "new"])]
    Create {
        /// URL to open
        url: String,

        /// Open in Little Arc
        #[arg(long, conflicts_with = "space")]
        little: bool,

        /// Space to create the tab in
        #[arg(long)]
        space: Option<i64>,
    },

    /// Close tabs (the active tab when no id is given)
    #[command(visible_aliases = ["remove", "rm"])]
    Close {
        /// Tab ids to close
        tab_ids: Vec<i64>,
    },

    /// Reload a tab (the active tab when no id is given)
    Reload {
        /// Tab id to reload
        tab_id: Option<i64>,
    },

    /// Execute JavaScript in a tab (the active tab when no id is given)
    ///
    /// The code is taken from --eval, or read from stdin when it is piped.
    Exec {
        /// Tab id to run the code in
        tab_id: Option<i64>,

        /// JavaScript to evaluate
        #[arg(short, long)]
        eval: Option<String>,
    },
}

/// `tab get` subcommands
#[derive(Subcommand, Debug)]
pub enum TabGetCommands {
    /// Get the URL of the active tab
    Url,

    /// Get the title of the active tab
    Title,
}

/// Window subcommands
#[derive(Subcommand, Debug)]
pub enum WindowCommands {
    /// List windows
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Create a new window
    Create {
        /// URL to open in the new window
        url: Option<String>,

        /// Open in incognito mode
        #[arg(long)]
        incognito: bool,
    },

    /// Close windows (the front window when no id is given)
    Close {
        /// Window ids to close
        window_ids: Vec<i64>,
    },
}

/// Space subcommands
#[derive(Subcommand, Debug)]
pub enum SpaceCommands {
    /// List spaces
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Focus a space
    Focus {
        /// Space id, as shown by `arc space list`
        space_id: i64,
    },
}
