//! Command argument structures

use clap::{Args, ValueEnum};

use graphwalk_core::graph::{DfsStrategy, VertexId};

/// Arguments for commands that only need a dataset.
#[derive(Args, Debug)]
pub struct DatasetArgs {
    /// Dataset name (see `graphwalk datasets`)
    pub dataset: String,
}

/// Arguments for traversal and shortest-path commands.
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Dataset name (see `graphwalk datasets`)
    pub dataset: String,

    /// Source vertex
    #[arg(long, allow_negative_numbers = true)]
    pub from: VertexId,

    /// Target vertex (omit to explore everything reachable)
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<VertexId>,
}

/// Arguments for the dfs command.
#[derive(Args, Debug)]
pub struct DfsArgs {
    #[command(flatten)]
    pub route: RouteArgs,

    /// Use the explicit-stack variant (the default unless configured otherwise)
    #[arg(long, conflicts_with = "recursive")]
    pub iterative: bool,

    /// Recurse on the call stack; overflows on very deep graphs
    #[arg(long)]
    pub recursive: bool,
}

impl DfsArgs {
    /// Strategy picked on the command line, if any
    pub fn strategy(&self) -> Option<DfsStrategy> {
        match (self.iterative, self.recursive) {
            (true, _) => Some(DfsStrategy::Iterative),
            (_, true) => Some(DfsStrategy::Recursive),
            _ => None,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MstAlgorithm {
    #[default]
    Kruskal,
    Prim,
}

/// Arguments for the mst command.
#[derive(Args, Debug)]
pub struct MstArgs {
    /// Dataset name (see `graphwalk datasets`)
    pub dataset: String,

    /// Spanning tree algorithm
    #[arg(long, value_enum, default_value = "kruskal")]
    pub algorithm: MstAlgorithm,

    /// Start vertex for Prim (defaults to the smallest vertex)
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<VertexId>,
}

/// Algorithm pairs that can be run side by side
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareFamily {
    /// BFS versus DFS
    Search,
    /// Dijkstra versus Bellman-Ford
    ShortestPath,
    /// Kruskal versus Prim
    SpanningTree,
}

impl CompareFamily {
    pub fn name(&self) -> &'static str {
        match self {
            CompareFamily::Search => "search",
            CompareFamily::ShortestPath => "shortest-path",
            CompareFamily::SpanningTree => "spanning-tree",
        }
    }
}

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Which pair of algorithms to compare
    #[arg(value_enum)]
    pub family: CompareFamily,

    /// Dataset name (see `graphwalk datasets`)
    pub dataset: String,

    /// Source vertex (start vertex for Prim)
    #[arg(long, allow_negative_numbers = true)]
    pub from: Option<VertexId>,

    /// Target vertex
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<VertexId>,
}
