//! datasets and show commands

use serde_json::Value;

use crate::cli::args::DatasetArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::render::{human, json};
use crate::datasets;
use graphwalk_core::error::Result;

pub fn execute_list(ctx: &CommandContext) -> Result<()> {
    let all = datasets::all()?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let entries: Vec<Value> = all.iter().map(json::dataset_summary).collect();
            json::print(&Value::Array(entries))
        }
        OutputFormat::Human => {
            for dataset in &all {
                human::dataset_summary(dataset);
            }
            Ok(())
        }
    }
}

pub fn execute_show(ctx: &CommandContext, args: &DatasetArgs) -> Result<()> {
    let dataset = ctx.load_dataset(&args.dataset)?;

    match ctx.cli.format {
        OutputFormat::Json => json::print(&json::dataset_detail(&dataset)),
        OutputFormat::Human => {
            human::dataset_detail(ctx.cli, &dataset);
            Ok(())
        }
    }
}
