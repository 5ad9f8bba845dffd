//! mst command

use crate::cli::args::{MstAlgorithm, MstArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::render::{self, human};
use graphwalk_core::error::Result;
use graphwalk_core::graph::{kruskal, prim};

pub fn execute(ctx: &CommandContext, args: &MstArgs) -> Result<()> {
    let dataset = ctx.load_dataset(&args.dataset)?;
    ctx.require_vertices(&dataset, [args.start])?;

    if args.start.is_some() && args.algorithm == MstAlgorithm::Kruskal {
        tracing::warn!("--start only applies to prim, ignoring it for kruskal");
    }

    let mut observer = ctx.observer();
    let result = match args.algorithm {
        MstAlgorithm::Kruskal => kruskal(&dataset.graph, &ctx.config, &mut observer)?,
        MstAlgorithm::Prim => prim(&dataset.graph, args.start, &ctx.config, &mut observer)?,
    };
    let events = observer.into_events();

    render::emit(ctx.cli, &dataset, &result, events.as_deref(), || {
        human::spanning_tree(ctx.cli, &dataset, &result)
    })
}
