use std::collections::BTreeMap;
use std::time::Instant;

use crate::graph::algos::shared::{build_shortest_path_result, init_distances};
use crate::graph::model::{Edge, Graph, VertexId};
use crate::graph::observer::Observer;
use crate::graph::types::{Algorithm, PredecessorMap, ShortestPathResult};
use crate::trace_time;

/// Tentative distance improvement through `edge`, if any
fn improvement(distances: &BTreeMap<VertexId, f64>, edge: &Edge) -> Option<f64> {
    let from = distances.get(&edge.source).copied()?;
    if !from.is_finite() {
        return None;
    }
    let candidate = from + edge.weight;
    let current = distances
        .get(&edge.target)
        .copied()
        .unwrap_or(f64::INFINITY);
    (candidate < current).then_some(candidate)
}

/// Single-source shortest paths allowing negative weights.
///
/// Relaxes every stored arc (both directions of an undirected edge) for up
/// to V-1 passes, stopping after a pass without updates. A further pass
/// that can still improve a reachable vertex sets `negative_cycle`, in
/// which case distances are unreliable.
#[tracing::instrument(skip(graph, observer), fields(source = %source, target = ?target, vertices = graph.vertex_count()))]
pub fn bellman_ford(
    graph: &Graph,
    source: VertexId,
    target: Option<VertexId>,
    observer: &mut dyn Observer,
) -> ShortestPathResult {
    let start = Instant::now();

    let (mut distances, mut predecessors): (BTreeMap<VertexId, f64>, PredecessorMap) =
        init_distances(graph, source);
    let arcs: Vec<Edge> = graph.arcs().collect();
    let max_passes = distances.len().saturating_sub(1);

    let mut passes = 0;
    for pass in 1..=max_passes {
        let mut updates = 0;
        for edge in &arcs {
            if let Some(candidate) = improvement(&distances, edge) {
                distances.insert(edge.target, candidate);
                predecessors.insert(edge.target, Some(edge.source));
                observer.edge_relaxed(Algorithm::BellmanFord, edge, candidate);
                updates += 1;
            }
        }

        passes = pass;
        observer.pass_completed(Algorithm::BellmanFord, pass, updates);
        if updates == 0 {
            break;
        }
    }

    let negative_cycle = arcs
        .iter()
        .any(|edge| improvement(&distances, edge).is_some());
    if negative_cycle {
        tracing::debug!(source, "negative_cycle_detected");
    }

    tracing::debug!(passes, negative_cycle, "bellman_ford_complete");
    trace_time!(start, "bellman_ford", passes = passes);

    build_shortest_path_result(
        Algorithm::BellmanFord,
        source,
        target,
        distances,
        predecessors,
        negative_cycle,
    )
}
