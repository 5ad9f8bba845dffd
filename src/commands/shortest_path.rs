//! dijkstra and bellman-ford commands

use crate::cli::args::RouteArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::render::{self, human};
use graphwalk_core::error::Result;
use graphwalk_core::graph::{bellman_ford, dijkstra};

pub fn execute_dijkstra(ctx: &CommandContext, args: &RouteArgs) -> Result<()> {
    let dataset = ctx.load_dataset(&args.dataset)?;
    ctx.require_vertices(&dataset, [Some(args.from), args.to])?;

    let mut observer = ctx.observer();
    let result = dijkstra(&dataset.graph, args.from, args.to, &ctx.config, &mut observer)?;
    let events = observer.into_events();

    render::emit(ctx.cli, &dataset, &result, events.as_deref(), || {
        human::shortest_path(ctx.cli, &dataset, &result)
    })
}

pub fn execute_bellman_ford(ctx: &CommandContext, args: &RouteArgs) -> Result<()> {
    let dataset = ctx.load_dataset(&args.dataset)?;
    ctx.require_vertices(&dataset, [Some(args.from), args.to])?;

    let mut observer = ctx.observer();
    let result = bellman_ford(&dataset.graph, args.from, args.to, &mut observer);
    let events = observer.into_events();

    if result.negative_cycle {
        tracing::warn!(dataset = dataset.name, source = args.from, "negative_cycle");
    }

    render::emit(ctx.cli, &dataset, &result, events.as_deref(), || {
        human::shortest_path(ctx.cli, &dataset, &result)
    })
}
