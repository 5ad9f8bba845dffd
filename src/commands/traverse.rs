//! bfs and dfs commands

use crate::cli::args::{DfsArgs, RouteArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::render::{self, human};
use graphwalk_core::error::Result;
use graphwalk_core::graph::{bfs, dfs};

pub fn execute_bfs(ctx: &CommandContext, args: &RouteArgs) -> Result<()> {
    let dataset = ctx.load_dataset(&args.dataset)?;
    ctx.require_vertices(&dataset, [Some(args.from), args.to])?;

    let mut observer = ctx.observer();
    let result = bfs(&dataset.graph, args.from, args.to, &mut observer);
    let events = observer.into_events();

    render::emit(ctx.cli, &dataset, &result, events.as_deref(), || {
        human::traversal(ctx.cli, &dataset, &result)
    })
}

pub fn execute_dfs(ctx: &CommandContext, args: &DfsArgs) -> Result<()> {
    let route = &args.route;
    let dataset = ctx.load_dataset(&route.dataset)?;
    ctx.require_vertices(&dataset, [Some(route.from), route.to])?;

    let strategy = args.strategy().unwrap_or(ctx.config.dfs_strategy);

    let mut observer = ctx.observer();
    let result = dfs(&dataset.graph, route.from, route.to, strategy, &mut observer);
    let events = observer.into_events();

    render::emit(ctx.cli, &dataset, &result, events.as_deref(), || {
        human::traversal(ctx.cli, &dataset, &result)
    })
}
