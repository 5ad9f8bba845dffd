//! Graph algorithm implementations
//!
//! - `bfs` / `dfs`: traversal with predecessor trees
//! - `dijkstra` / `bellman_ford`: single-source shortest paths
//! - `kruskal` / `prim`: minimum spanning trees and forests
//! - `cycle`: directed cycle detection
//! - `shared`: preconditions and result assembly used by several algorithms

pub mod bellman_ford;
pub mod bfs;
pub mod cycle;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod shared;

pub use bellman_ford::bellman_ford;
pub use bfs::bfs;
pub use cycle::find_cycle;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use kruskal::kruskal;
pub use prim::prim;
