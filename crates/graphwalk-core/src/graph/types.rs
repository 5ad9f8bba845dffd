use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::model::{Edge, VertexId};

/// Predecessor tree: every discovered vertex maps to the vertex it was
/// reached from, the source maps to `None`
pub type PredecessorMap = BTreeMap<VertexId, Option<VertexId>>;

/// Algorithm tag carried by results and observer events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    BellmanFord,
    Kruskal,
    Prim,
    Cycle,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::Kruskal => "kruskal",
            Algorithm::Prim => "prim",
            Algorithm::Cycle => "cycle",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How DFS keeps its frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DfsStrategy {
    /// Call-stack recursion, one frame per tree edge. Chains deeper than a
    /// few tens of thousands of vertices overflow the default thread stack.
    Recursive,
    /// Explicit stack on the heap, bounded only by memory
    #[default]
    Iterative,
}

impl FromStr for DfsStrategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recursive" => Ok(DfsStrategy::Recursive),
            "iterative" => Ok(DfsStrategy::Iterative),
            other => Err(GraphError::invalid_value("dfs strategy", other)),
        }
    }
}

impl fmt::Display for DfsStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DfsStrategy::Recursive => write!(f, "recursive"),
            DfsStrategy::Iterative => write!(f, "iterative"),
        }
    }
}

/// Outcome of a BFS or DFS run
#[derive(Debug, Clone, Serialize)]
pub struct TraversalResult {
    pub algorithm: Algorithm,
    pub source: VertexId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<VertexId>,
    /// Vertices in the order they were visited
    pub order: Vec<VertexId>,
    pub predecessors: PredecessorMap,
    /// BFS: fewest edges from the source. DFS: depth in the DFS tree.
    pub depths: BTreeMap<VertexId, usize>,
    pub path: Option<Vec<VertexId>>,
    pub found: bool,
}

impl TraversalResult {
    /// Whether the traversal reached `vertex` before stopping
    pub fn discovered(&self, vertex: VertexId) -> bool {
        self.predecessors.contains_key(&vertex)
    }

    /// Number of edges on the reconstructed path
    pub fn path_edges(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(1))
    }
}

/// Outcome of a Dijkstra or Bellman-Ford run
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResult {
    pub algorithm: Algorithm,
    pub source: VertexId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<VertexId>,
    /// `+∞` (JSON `null`) for unreachable vertices
    pub distances: BTreeMap<VertexId, f64>,
    pub predecessors: PredecessorMap,
    pub path: Option<Vec<VertexId>>,
    pub cost: Option<f64>,
    /// Distances are unreliable when set
    pub negative_cycle: bool,
}

impl ShortestPathResult {
    /// Finite distance to `vertex`, `None` when unreachable or unknown
    pub fn distance(&self, vertex: VertexId) -> Option<f64> {
        self.distances
            .get(&vertex)
            .copied()
            .filter(|distance| distance.is_finite())
    }

    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Vertices with a finite distance, ascending
    pub fn reachable(&self) -> Vec<VertexId> {
        self.distances
            .iter()
            .filter(|(_, distance)| distance.is_finite())
            .map(|(&vertex, _)| vertex)
            .collect()
    }
}

/// Outcome of Kruskal or Prim
#[derive(Debug, Clone, Serialize)]
pub struct SpanningTreeResult {
    pub algorithm: Algorithm,
    /// Accepted edges in acceptance order
    pub edges: Vec<Edge>,
    pub total_weight: f64,
    pub vertex_count: usize,
    /// Connected components covered by the forest
    pub components: usize,
    /// Prim only: vertices in the order they joined the tree
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusion_order: Option<Vec<VertexId>>,
}

impl SpanningTreeResult {
    pub fn new(
        algorithm: Algorithm,
        edges: Vec<Edge>,
        vertex_count: usize,
        inclusion_order: Option<Vec<VertexId>>,
    ) -> Self {
        let total_weight = edges.iter().map(|edge| edge.weight).sum();
        let components = vertex_count.saturating_sub(edges.len());
        Self {
            algorithm,
            edges,
            total_weight,
            vertex_count,
            components,
            inclusion_order,
        }
    }

    /// True when the accepted edges connect every vertex
    pub fn is_spanning_tree(&self) -> bool {
        self.components <= 1
    }
}
