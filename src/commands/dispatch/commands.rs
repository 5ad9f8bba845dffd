//! Command implementations for all graphwalk commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{compare, cycle, datasets, shortest_path, spanning_tree, traverse};
use graphwalk_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Datasets => datasets::execute_list(ctx),
            Commands::Show(args) => datasets::execute_show(ctx, args),
            Commands::Bfs(args) => traverse::execute_bfs(ctx, args),
            Commands::Dfs(args) => traverse::execute_dfs(ctx, args),
            Commands::Dijkstra(args) => shortest_path::execute_dijkstra(ctx, args),
            Commands::BellmanFord(args) => shortest_path::execute_bellman_ford(ctx, args),
            Commands::Mst(args) => spanning_tree::execute(ctx, args),
            Commands::Cycle(args) => cycle::execute(ctx, args),
            Commands::Compare(args) => compare::execute(ctx, args),
        }
    }
}
