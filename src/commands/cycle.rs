//! cycle command

use crate::cli::args::DatasetArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::render::{human, json};
use graphwalk_core::error::Result;
use graphwalk_core::graph::find_cycle;

pub fn execute(ctx: &CommandContext, args: &DatasetArgs) -> Result<()> {
    let dataset = ctx.load_dataset(&args.dataset)?;
    let cycle = find_cycle(&dataset.graph)?;

    match ctx.cli.format {
        OutputFormat::Json => json::print(&json::cycle(&dataset, cycle.as_deref())),
        OutputFormat::Human => {
            human::cycle(&dataset, cycle.as_deref());
            Ok(())
        }
    }
}
