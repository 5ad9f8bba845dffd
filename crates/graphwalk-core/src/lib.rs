//! Graphwalk Core Library
//!
//! Classical graph algorithms over a weighted, optionally directed graph:
//! BFS/DFS traversal, Dijkstra and Bellman-Ford shortest paths, Kruskal and
//! Prim spanning trees, and directed cycle detection.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
