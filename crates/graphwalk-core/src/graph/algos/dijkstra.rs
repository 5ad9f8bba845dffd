use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

use crate::config::AlgorithmConfig;
use crate::error::Result;
use crate::graph::algos::shared::{build_shortest_path_result, init_distances, require_non_negative};
use crate::graph::model::{Edge, Graph, VertexId};
use crate::graph::observer::Observer;
use crate::graph::types::{Algorithm, ShortestPathResult};
use crate::trace_time;

/// Frontier entry for the min-heap (wrapped in `Reverse`), ordered by
/// tentative distance then vertex id
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub vertex: VertexId,
    pub distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Single-source shortest paths for non-negative weights.
///
/// The frontier tolerates duplicate entries; a vertex is finalized the first
/// time it is popped and later entries for it are skipped. Returns early
/// once `target` is finalized.
///
/// With `validate_weights` on, a negative edge is a configuration error.
/// With it off, negative edges are relaxed as usual and the result may be
/// wrong.
#[tracing::instrument(skip(graph, config, observer), fields(source = %source, target = ?target, vertices = graph.vertex_count(), validate_weights = config.validate_weights))]
pub fn dijkstra(
    graph: &Graph,
    source: VertexId,
    target: Option<VertexId>,
    config: &AlgorithmConfig,
    observer: &mut dyn Observer,
) -> Result<ShortestPathResult> {
    let start = Instant::now();
    require_non_negative(graph, Algorithm::Dijkstra, config)?;

    let (mut distances, mut predecessors) = init_distances(graph, source);
    let mut finalized: HashSet<VertexId> = HashSet::new();
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        vertex: source,
        distance: 0.0,
    }));

    while let Some(Reverse(HeapEntry { vertex, distance })) = heap.pop() {
        if !finalized.insert(vertex) {
            continue;
        }
        observer.vertex_visited(Algorithm::Dijkstra, vertex);

        if target == Some(vertex) {
            break;
        }

        for &(neighbor, weight) in graph.neighbors(vertex) {
            if finalized.contains(&neighbor) {
                continue;
            }

            let candidate = distance + weight;
            let current = distances.get(&neighbor).copied().unwrap_or(f64::INFINITY);
            if candidate < current {
                distances.insert(neighbor, candidate);
                predecessors.insert(neighbor, Some(vertex));
                observer.edge_relaxed(
                    Algorithm::Dijkstra,
                    &Edge::new(vertex, neighbor, weight),
                    candidate,
                );
                heap.push(Reverse(HeapEntry {
                    vertex: neighbor,
                    distance: candidate,
                }));
            }
        }
    }

    tracing::debug!(finalized = finalized.len(), "dijkstra_complete");
    trace_time!(start, "dijkstra", finalized = finalized.len());

    Ok(build_shortest_path_result(
        Algorithm::Dijkstra,
        source,
        target,
        distances,
        predecessors,
        false,
    ))
}
