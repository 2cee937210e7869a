//! Arc Companion CLI - query and control the Arc browser from the terminal.

use arc_companion::bridge::Osascript;
use arc_companion::bridge::script::TabTarget;
use arc_companion::cli::{
    Cli, Commands, OutputArgs, SpaceCommands, TabCommands, TabGetCommands, WindowCommands,
};
use arc_companion::commands::{self, TabFilter};
use arc_companion::config::{ConfigOverrides, OutputFormat, ProcessConfig, resolve_config};
use arc_companion::models::Entity;
use arc_companion::render::{OutputMode, render_list};
use arc_companion::storage::HistoryQuery;
use arc_companion::{Error, Result, logging};
use clap::{CommandFactory, Parser};
use std::io::{self, IsTerminal, Read, Write};
use std::process;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    let config = resolve_config(overrides_for(&command))?;
    debug!(command = command_name(&command), "dispatching");
    let executor = Osascript::new(config.osascript().value);

    match command {
        Commands::Tab { command } => match command {
            TabCommands::List {
                pinned,
                unpinned,
                favorite,
                output: _,
            } => {
                let json = wants_json(&config)?;
                let filter = TabFilter::from_flags(pinned, unpinned, favorite);
                let tabs = commands::list_tabs(&executor, &filter)?;
                print_list(&tabs, json)?;
            }
            TabCommands::Get { command } => {
                let text = match command {
                    TabGetCommands::Url => commands::active_tab_url(&executor)?,
                    TabGetCommands::Title => commands::active_tab_title(&executor)?,
                };
                print_raw(&text)?;
            }
            TabCommands::Focus { tab_id } => commands::focus_tab(&executor, tab_id)?,
            TabCommands::Create { url, little, space } => {
                let target = match (little, space) {
                    (true, _) => TabTarget::Little,
                    (false, Some(space_id)) => TabTarget::Space(space_id),
                    (false, None) => TabTarget::FrontWindow,
                };
                commands::create_tab(&executor, &url, target)?;
            }
            TabCommands::Close { tab_ids } => commands::close_tabs(&executor, &tab_ids)?,
            TabCommands::Reload { tab_id } => commands::reload_tab(&executor, tab_id)?,
            TabCommands::Exec { tab_id, eval } => {
                let javascript = read_javascript(eval)?;
                let output = commands::execute_javascript(&executor, &javascript, tab_id)?;
                if !output.is_empty() {
                    print_raw(&output)?;
                }
            }
        },

        Commands::Window { command } => match command {
            WindowCommands::List { output: _ } => {
                let json = wants_json(&config)?;
                let windows = commands::list_windows(&executor)?;
                print_list(&windows, json)?;
            }
            WindowCommands::Create { url, incognito } => {
                commands::create_window(&executor, incognito, url.as_deref())?;
            }
            WindowCommands::Close { window_ids } => {
                commands::close_windows(&executor, &window_ids)?;
            }
        },

        Commands::Space { command } => match command {
            SpaceCommands::List { output: _ } => {
                let json = wants_json(&config)?;
                let spaces = commands::list_spaces(&executor)?;
                print_list(&spaces, json)?;
            }
            SpaceCommands::Focus { space_id } => commands::focus_space(&executor, space_id)?,
        },

        Commands::History { query, limit, .. } => {
            let json = wants_json(&config)?;
            let history_path = config.history_path()?;
            let query = HistoryQuery::new(query, limit);
            let entries = commands::search_history(&history_path.value, &query)?;
            print_list(&entries, json)?;
        }

        Commands::Version => {
            let version = commands::version(&executor)?;
            print_raw(&version)?;
        }

        Commands::Docs => {
            let doc = arc_companion::cli::docs::reference(&Cli::command());
            print_raw(&doc)?;
        }
    }

    Ok(())
}

/// Collect the CLI-level configuration overrides carried by `command`.
fn overrides_for(command: &Commands) -> ConfigOverrides {
    let output = match command {
        Commands::Tab {
            command: TabCommands::List { output, .. },
        }
        | Commands::Window {
            command: WindowCommands::List { output },
        }
        | Commands::Space {
            command: SpaceCommands::List { output },
        }
        | Commands::History { output, .. } => *output,
        _ => OutputArgs::default(),
    };
    let history_path = match command {
        Commands::History { history_path, .. } => history_path.clone(),
        _ => None,
    };
    ConfigOverrides {
        history_path,
        json: output.json,
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Tab { .. } => "tab",
        Commands::Window { .. } => "window",
        Commands::Space { .. } => "space",
        Commands::History { .. } => "history",
        Commands::Version => "version",
        Commands::Docs => "docs",
    }
}

/// Whether listings are written as JSON. Only listing commands ask.
fn wants_json(config: &ProcessConfig) -> Result<bool> {
    Ok(config.output_format()?.value == OutputFormat::Json)
}

fn print_list<T: Entity>(items: &[T], json: bool) -> Result<()> {
    let mode = OutputMode::for_stdout(json)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_list(items, mode, &mut out)?;
    out.flush()?;
    Ok(())
}

fn print_raw(text: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// JavaScript from `--eval`, otherwise from piped stdin.
fn read_javascript(eval: Option<String>) -> Result<String> {
    if let Some(code) = eval {
        return Ok(code);
    }
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(Error::InvalidInput("no javascript provided".to_string()));
    }
    let mut code = String::new();
    stdin.read_to_string(&mut code)?;
    Ok(code)
}
