use std::collections::BTreeMap;

use crate::config::AlgorithmConfig;
use crate::error::{GraphError, Result};
use crate::graph::model::{Graph, VertexId};
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Algorithm, PredecessorMap, ShortestPathResult};

/// Reject directed graphs for algorithms defined on undirected ones
pub fn require_undirected(graph: &Graph, algorithm: Algorithm) -> Result<()> {
    if graph.is_directed() {
        crate::bail_config!(algorithm.name(), "requires an undirected graph");
    }
    Ok(())
}

/// Reject negative weights when the config asks for validation
pub fn require_non_negative(
    graph: &Graph,
    algorithm: Algorithm,
    config: &AlgorithmConfig,
) -> Result<()> {
    if !config.validate_weights {
        return Ok(());
    }

    match graph.find_negative_edge() {
        Some(edge) => Err(GraphError::NegativeWeight {
            algorithm: algorithm.name().to_string(),
            from: edge.source,
            to: edge.target,
            weight: edge.weight,
        }),
        None => Ok(()),
    }
}

/// Distances at `+∞` (source at 0) and no predecessors.
///
/// The source is included even when the graph does not know it.
pub fn init_distances(
    graph: &Graph,
    source: VertexId,
) -> (BTreeMap<VertexId, f64>, PredecessorMap) {
    let mut distances: BTreeMap<VertexId, f64> = graph
        .vertices()
        .into_iter()
        .map(|vertex| (vertex, f64::INFINITY))
        .collect();
    let mut predecessors: PredecessorMap =
        distances.keys().map(|&vertex| (vertex, None)).collect();

    distances.insert(source, 0.0);
    predecessors.insert(source, None);
    (distances, predecessors)
}

/// Assemble a shortest-path result, reconstructing the path to `target`
/// when its distance is finite
pub fn build_shortest_path_result(
    algorithm: Algorithm,
    source: VertexId,
    target: Option<VertexId>,
    distances: BTreeMap<VertexId, f64>,
    predecessors: PredecessorMap,
    negative_cycle: bool,
) -> ShortestPathResult {
    let reached = target.and_then(|target| {
        let distance = distances.get(&target).copied()?;
        if !distance.is_finite() {
            return None;
        }
        reconstruct_path(&predecessors, source, target).map(|path| (path, distance))
    });
    let (path, cost) = match reached {
        Some((path, cost)) => (Some(path), Some(cost)),
        None => (None, None),
    };

    ShortestPathResult {
        algorithm,
        source,
        target,
        distances,
        predecessors,
        path,
        cost,
        negative_cycle,
    }
}
