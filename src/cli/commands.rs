//! Top-level graphwalk commands

use clap::Subcommand;

use crate::cli::args::{CompareArgs, DatasetArgs, DfsArgs, MstArgs, RouteArgs};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the bundled example datasets
    Datasets,

    /// Show the vertices and edges of a dataset
    Show(DatasetArgs),

    /// Breadth-first search (fewest edges)
    Bfs(RouteArgs),

    /// Depth-first search
    Dfs(DfsArgs),

    /// Dijkstra shortest path (non-negative weights)
    Dijkstra(RouteArgs),

    /// Bellman-Ford shortest path with negative-cycle detection
    BellmanFord(RouteArgs),

    /// Minimum spanning tree (undirected datasets)
    Mst(MstArgs),

    /// Find a cycle in a directed dataset
    Cycle(DatasetArgs),

    /// Run two algorithms of the same family and compare their results
    Compare(CompareArgs),
}
