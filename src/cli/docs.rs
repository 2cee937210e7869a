//! Markdown command reference generated from the CLI definition.

use clap::{Arg, Command};
use std::fmt::Write;

/// Render the reference for `root` and all of its visible subcommands.
pub fn reference(root: &Command) -> String {
    let mut root = root.clone();
    // Building fills in the full bin name ("arc tab list") of every subcommand.
    root.build();

    let mut out = String::from("# Reference\n\n");
    write_command(&mut out, &root);
    out
}

fn write_command(out: &mut String, cmd: &Command) {
    let name = cmd.get_bin_name().unwrap_or_else(|| cmd.get_name());
    let _ = writeln!(out, "## {}\n", name);

    if let Some(about) = cmd.get_about() {
        let _ = writeln!(out, "{}\n", about);
    }

    let usage = cmd.clone().render_usage();
    let _ = writeln!(out, "```\n{}\n```\n", usage);

    let args: Vec<&Arg> = cmd
        .get_arguments()
        .filter(|arg| !arg.is_hide_set())
        .filter(|arg| !matches!(arg.get_id().as_str(), "help" | "version"))
        .collect();
    if !args.is_empty() {
        out.push_str("### Options\n\n");
        for arg in args {
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            let _ = writeln!(out, "- `{}` {}", arg_label(arg), help);
        }
        out.push('\n');
    }

    for sub in cmd.get_subcommands().filter(|sub| !sub.is_hide_set()) {
        write_command(out, sub);
    }
}

fn arg_label(arg: &Arg) -> String {
    if arg.is_positional() {
        return format!("<{}>", arg.get_id().as_str().to_uppercase());
    }
    match (arg.get_short(), arg.get_long()) {
        (Some(short), Some(long)) => format!("-{}, --{}", short, long),
        (None, Some(long)) => format!("--{}", long),
        (Some(short), None) => format!("-{}", short),
        (None, None) => arg.get_id().to_string(),
    }
}
