use std::collections::BTreeMap;
use std::ops::ControlFlow;
use std::time::Instant;

use crate::graph::model::{Graph, VertexId};
use crate::graph::observer::Observer;
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Algorithm, DfsStrategy, PredecessorMap, TraversalResult};
use crate::trace_time;

/// Depth-first traversal from `source`.
///
/// Both strategies stop as soon as `target` is visited. They agree on which
/// vertices are reachable but may visit them in a different order, so the
/// returned path is some path, not necessarily the shortest.
///
/// [`DfsStrategy::Recursive`] uses one call frame per tree edge; prefer the
/// default iterative strategy for graphs with long chains.
#[tracing::instrument(skip(graph, observer), fields(source = %source, target = ?target, strategy = %strategy, vertices = graph.vertex_count()))]
pub fn dfs(
    graph: &Graph,
    source: VertexId,
    target: Option<VertexId>,
    strategy: DfsStrategy,
    observer: &mut dyn Observer,
) -> TraversalResult {
    let start = Instant::now();

    let mut walk = Walk {
        graph,
        target,
        order: Vec::new(),
        predecessors: PredecessorMap::new(),
        depths: BTreeMap::new(),
        observer,
    };

    let found = match strategy {
        DfsStrategy::Recursive => {
            walk.predecessors.insert(source, None);
            walk.depths.insert(source, 0);
            walk.visit(source, 0).is_break()
        }
        DfsStrategy::Iterative => walk.run_iterative(source),
    };

    let Walk {
        order,
        predecessors,
        depths,
        ..
    } = walk;

    let path = match target {
        Some(target) if found => reconstruct_path(&predecessors, source, target),
        _ => None,
    };

    tracing::debug!(visited = order.len(), found, "dfs_complete");
    trace_time!(start, "dfs", visited = order.len());

    TraversalResult {
        algorithm: Algorithm::Dfs,
        source,
        target,
        order,
        predecessors,
        depths,
        path,
        found,
    }
}

/// State shared by both DFS strategies
struct Walk<'a> {
    graph: &'a Graph,
    target: Option<VertexId>,
    order: Vec<VertexId>,
    predecessors: PredecessorMap,
    depths: BTreeMap<VertexId, usize>,
    observer: &'a mut dyn Observer,
}

impl Walk<'_> {
    /// Visit `vertex` and recurse into undiscovered neighbors.
    /// Breaks out of every frame once the target is visited.
    fn visit(&mut self, vertex: VertexId, depth: usize) -> ControlFlow<()> {
        self.order.push(vertex);
        self.observer.vertex_visited(Algorithm::Dfs, vertex);

        if self.target == Some(vertex) {
            return ControlFlow::Break(());
        }

        let graph = self.graph;
        for &(neighbor, _) in graph.neighbors(vertex) {
            if self.predecessors.contains_key(&neighbor) {
                continue;
            }
            self.predecessors.insert(neighbor, Some(vertex));
            self.depths.insert(neighbor, depth + 1);

            if self.visit(neighbor, depth + 1).is_break() {
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }

    /// Explicit-stack variant. Neighbors are pushed in reverse so they pop
    /// in adjacency order; predecessor and depth are fixed when a vertex is
    /// popped for the first time.
    fn run_iterative(&mut self, source: VertexId) -> bool {
        let graph = self.graph;
        let mut stack: Vec<(VertexId, Option<VertexId>, usize)> = vec![(source, None, 0)];

        while let Some((vertex, predecessor, depth)) = stack.pop() {
            if self.predecessors.contains_key(&vertex) {
                continue;
            }
            self.predecessors.insert(vertex, predecessor);
            self.depths.insert(vertex, depth);
            self.order.push(vertex);
            self.observer.vertex_visited(Algorithm::Dfs, vertex);

            if self.target == Some(vertex) {
                return true;
            }

            for &(neighbor, _) in graph.neighbors(vertex).iter().rev() {
                if !self.predecessors.contains_key(&neighbor) {
                    stack.push((neighbor, Some(vertex), depth + 1));
                }
            }
        }

        false
    }
}
