//! Graphwalk - classical graph algorithms on bundled example graphs
//!
//! Runs BFS, DFS, Dijkstra, Bellman-Ford, Kruskal and Prim against small
//! labelled datasets and prints the results for people or for scripts.

mod cli;
mod commands;
mod datasets;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use graphwalk_core::error::{ExitCode as GraphExitCode, GraphError};
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();
    let wants_json = requests_json(env::args().skip(1));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Clap fails before `Cli.format` exists, so JSON is decided from raw argv
        Err(err) if wants_json => match parse_failure(&err) {
            Some(error) => return report(&error, OutputFormat::Json, false),
            None => err.exit(),
        },
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(error) => report(&error, cli.format, cli.quiet),
    }
}

/// Print `error` on stderr in the requested format and pick the exit code
fn report(error: &GraphError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
    ExitCode::from(error.exit_code() as u8)
}

/// Map a clap failure onto `GraphError`; `None` for help and version output
fn parse_failure(err: &clap::Error) -> Option<GraphError> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => Some(GraphError::UsageError(err.to_string())),
        _ => Some(GraphError::Other(err.to_string())),
    }
}

fn requests_json(mut args: impl Iterator<Item = String>) -> bool {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" if args.next().is_some_and(|v| v.eq_ignore_ascii_case("json")) => {
                return true
            }
            "--format=json" | "--format=JSON" => return true,
            _ => {}
        }
    }
    false
}
