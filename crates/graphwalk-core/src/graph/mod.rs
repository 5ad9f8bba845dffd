//! Weighted graphs and the algorithms that run over them
//!
//! - [`Graph`]: adjacency-list graph with an explicit vertex set
//! - [`DisjointSet`]: union-find used by Kruskal
//! - [`algos`]: traversal, shortest paths, spanning trees, cycle detection
//! - [`Observer`]: step hooks for tracing or recording algorithm progress

pub mod algos;
pub mod disjoint_set;
pub mod model;
pub mod observer;
pub mod path;
pub mod types;

pub use algos::{bellman_ford, bfs, dfs, dijkstra, find_cycle, kruskal, prim};
pub use disjoint_set::DisjointSet;
pub use model::{Edge, Graph, VertexId};
pub use observer::{AlgorithmEvent, EventLog, NoopObserver, Observer, TracingObserver};
pub use path::{path_cost, path_edges, reconstruct_path};
pub use types::{
    Algorithm, DfsStrategy, PredecessorMap, ShortestPathResult, SpanningTreeResult,
    TraversalResult,
};
