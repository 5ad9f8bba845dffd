use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

use crate::config::AlgorithmConfig;
use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{require_non_negative, require_undirected};
use crate::graph::model::{Edge, Graph, VertexId};
use crate::graph::observer::Observer;
use crate::graph::types::{Algorithm, SpanningTreeResult};
use crate::trace_time;

/// Frontier candidate ordered by weight, then endpoints
#[derive(Debug, Clone, Copy)]
struct Candidate {
    weight: f64,
    from: VertexId,
    to: VertexId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

struct PrimState {
    included: HashSet<VertexId>,
    order: Vec<VertexId>,
    frontier: BinaryHeap<Reverse<Candidate>>,
}

impl PrimState {
    fn include(&mut self, graph: &Graph, vertex: VertexId, observer: &mut dyn Observer) {
        self.included.insert(vertex);
        self.order.push(vertex);
        observer.vertex_visited(Algorithm::Prim, vertex);

        for &(neighbor, weight) in graph.neighbors(vertex) {
            if !self.included.contains(&neighbor) {
                self.frontier.push(Reverse(Candidate {
                    weight,
                    from: vertex,
                    to: neighbor,
                }));
            }
        }
    }
}

/// Minimum spanning tree grown from `start` (or the smallest vertex).
///
/// Candidates whose far end is already in the tree are discarded when
/// popped. If the frontier runs dry before every vertex is included, growth
/// restarts from the smallest vertex not yet in the tree, yielding a
/// minimum spanning forest.
#[tracing::instrument(skip(graph, config, observer), fields(start = ?start, vertices = graph.vertex_count(), validate_weights = config.validate_weights))]
pub fn prim(
    graph: &Graph,
    start: Option<VertexId>,
    config: &AlgorithmConfig,
    observer: &mut dyn Observer,
) -> Result<SpanningTreeResult> {
    let started = Instant::now();
    require_undirected(graph, Algorithm::Prim)?;
    require_non_negative(graph, Algorithm::Prim, config)?;

    if let Some(vertex) = start {
        if !graph.contains(vertex) {
            return Err(GraphError::VertexNotFound { vertex });
        }
    }

    let vertices = graph.vertices();
    let Some(first) = start.or_else(|| vertices.first().copied()) else {
        return Ok(SpanningTreeResult::new(Algorithm::Prim, Vec::new(), 0, Some(Vec::new())));
    };
    let wanted = vertices.len().saturating_sub(1);

    let mut state = PrimState {
        included: HashSet::new(),
        order: Vec::with_capacity(vertices.len()),
        frontier: BinaryHeap::new(),
    };
    let mut accepted: Vec<Edge> = Vec::with_capacity(wanted);
    let mut restarts = vertices.iter().copied();
    let mut root = Some(first);

    while let Some(current_root) = root.take() {
        state.include(graph, current_root, observer);

        while accepted.len() < wanted {
            let Some(Reverse(candidate)) = state.frontier.pop() else {
                break;
            };
            let edge = Edge::new(candidate.from, candidate.to, candidate.weight);
            if state.included.contains(&candidate.to) {
                observer.edge_rejected(Algorithm::Prim, &edge);
                continue;
            }

            observer.edge_accepted(Algorithm::Prim, &edge);
            accepted.push(edge);
            state.include(graph, candidate.to, observer);
        }

        if accepted.len() < wanted {
            root = restarts.find(|vertex| !state.included.contains(vertex));
            if let Some(vertex) = root {
                tracing::debug!(vertex, "prim_restart");
            }
        }
    }

    let result = SpanningTreeResult::new(
        Algorithm::Prim,
        accepted,
        vertices.len(),
        Some(state.order),
    );
    tracing::debug!(
        edges = result.edges.len(),
        components = result.components,
        total_weight = result.total_weight,
        "prim_complete"
    );
    trace_time!(started, "prim", edges = result.edges.len());

    Ok(result)
}
