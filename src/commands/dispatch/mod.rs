//! Command dispatch logic for graphwalk

use std::time::Instant;

use crate::cli::Cli;
use graphwalk_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    if cli.verbose {
        debug!(elapsed = ?start.elapsed(), "execute_command");
    }
    result
}
