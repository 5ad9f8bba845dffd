use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::time::Instant;

use crate::graph::model::{Graph, VertexId};
use crate::graph::observer::Observer;
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Algorithm, PredecessorMap, TraversalResult};
use crate::trace_time;

/// Breadth-first traversal from `source`.
///
/// Each vertex gets its predecessor and edge count on first discovery, so a
/// reachable `target` is reached along a fewest-edges path. Stops once the
/// target is dequeued.
#[tracing::instrument(skip(graph, observer), fields(source = %source, target = ?target, vertices = graph.vertex_count()))]
pub fn bfs(
    graph: &Graph,
    source: VertexId,
    target: Option<VertexId>,
    observer: &mut dyn Observer,
) -> TraversalResult {
    let start = Instant::now();

    let mut discovered: HashMap<VertexId, (Option<VertexId>, usize)> = HashMap::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::new();
    let mut found = false;

    discovered.insert(source, (None, 0));
    queue.push_back((source, 0usize));

    while let Some((current, depth)) = queue.pop_front() {
        order.push(current);
        observer.vertex_visited(Algorithm::Bfs, current);

        if target == Some(current) {
            found = true;
            break;
        }

        for &(neighbor, _) in graph.neighbors(current) {
            if let Entry::Vacant(slot) = discovered.entry(neighbor) {
                slot.insert((Some(current), depth + 1));
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    let predecessors: PredecessorMap = discovered
        .iter()
        .map(|(&vertex, &(predecessor, _))| (vertex, predecessor))
        .collect();
    let depths: BTreeMap<VertexId, usize> = discovered
        .iter()
        .map(|(&vertex, &(_, depth))| (vertex, depth))
        .collect();

    let path = match target {
        Some(target) if found => reconstruct_path(&predecessors, source, target),
        _ => None,
    };

    tracing::debug!(visited = order.len(), found, "bfs_complete");
    trace_time!(start, "bfs", visited = order.len());

    TraversalResult {
        algorithm: Algorithm::Bfs,
        source,
        target,
        order,
        predecessors,
        depths,
        path,
        found,
    }
}
