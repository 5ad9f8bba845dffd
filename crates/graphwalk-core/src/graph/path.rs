//! Path reconstruction from predecessor trees

use std::collections::HashSet;

use crate::graph::model::{Edge, Graph, VertexId};
use crate::graph::types::PredecessorMap;

/// Walk predecessors back from `target` to `source` and return the path in
/// forward order.
///
/// Returns `None` when the chain breaks before reaching `source` or loops
/// back on itself (a negative cycle can leave such a chain behind).
pub fn reconstruct_path(
    predecessors: &PredecessorMap,
    source: VertexId,
    target: VertexId,
) -> Option<Vec<VertexId>> {
    let mut path = vec![target];
    let mut seen = HashSet::from([target]);
    let mut current = target;

    while current != source {
        let previous = predecessors.get(&current).copied().flatten()?;
        if !seen.insert(previous) {
            return None;
        }
        path.push(previous);
        current = previous;
    }

    path.reverse();
    Some(path)
}

/// Edges traversed by `path`, using the cheapest parallel entry per step.
///
/// `None` if some consecutive pair is not adjacent in `graph`.
pub fn path_edges(graph: &Graph, path: &[VertexId]) -> Option<Vec<Edge>> {
    path.windows(2)
        .map(|step| {
            let (from, to) = (step[0], step[1]);
            graph
                .neighbors(from)
                .iter()
                .filter(|&&(neighbor, _)| neighbor == to)
                .map(|&(_, weight)| weight)
                .min_by(|a, b| a.total_cmp(b))
                .map(|weight| Edge::new(from, to, weight))
        })
        .collect()
}

/// Total weight of `path` in `graph`
pub fn path_cost(graph: &Graph, path: &[VertexId]) -> Option<f64> {
    path_edges(graph, path).map(|edges| edges.iter().map(|edge| edge.weight).sum())
}
