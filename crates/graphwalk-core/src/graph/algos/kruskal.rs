use std::time::Instant;

use crate::config::AlgorithmConfig;
use crate::error::Result;
use crate::graph::algos::shared::{require_non_negative, require_undirected};
use crate::graph::disjoint_set::DisjointSet;
use crate::graph::model::Graph;
use crate::graph::observer::Observer;
use crate::graph::types::{Algorithm, SpanningTreeResult};
use crate::trace_time;

/// Minimum spanning tree by ascending edge weight.
///
/// Edges are stably sorted, so equal weights keep the order of
/// [`Graph::edges`]. On a disconnected graph the result is a minimum
/// spanning forest with `components > 1`.
#[tracing::instrument(skip(graph, config, observer), fields(vertices = graph.vertex_count(), validate_weights = config.validate_weights))]
pub fn kruskal(
    graph: &Graph,
    config: &AlgorithmConfig,
    observer: &mut dyn Observer,
) -> Result<SpanningTreeResult> {
    let start = Instant::now();
    require_undirected(graph, Algorithm::Kruskal)?;
    require_non_negative(graph, Algorithm::Kruskal, config)?;

    let vertices = graph.vertices();
    let wanted = vertices.len().saturating_sub(1);

    let mut candidates = graph.edges();
    candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut sets = DisjointSet::new(vertices.iter().copied());
    let mut accepted = Vec::with_capacity(wanted);

    for edge in candidates {
        if accepted.len() == wanted {
            break;
        }
        if sets.union(edge.source, edge.target) {
            observer.edge_accepted(Algorithm::Kruskal, &edge);
            accepted.push(edge);
        } else {
            observer.edge_rejected(Algorithm::Kruskal, &edge);
        }
    }

    let result = SpanningTreeResult::new(Algorithm::Kruskal, accepted, vertices.len(), None);
    tracing::debug!(
        edges = result.edges.len(),
        components = result.components,
        total_weight = result.total_weight,
        "kruskal_complete"
    );
    trace_time!(start, "kruskal", edges = result.edges.len());

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::model::Edge;
    use crate::graph::observer::{AlgorithmEvent, EventLog, NoopObserver};

    fn square_with_diagonal() -> Graph {
        Graph::from_edges(false, [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (0, 3, 10.0)])
    }

    #[test]
    fn test_kruskal_picks_cheapest_edges() {
        let result = kruskal(
            &square_with_diagonal(),
            &AlgorithmConfig::default(),
            &mut NoopObserver,
        )
        .unwrap();

        assert_eq!(result.total_weight, 6.0);
        assert_eq!(
            result.edges,
            vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.0), Edge::new(2, 3, 3.0)]
        );
        assert!(result.is_spanning_tree());
        assert_eq!(result.inclusion_order, None);
    }

    #[test]
    fn test_kruskal_rejects_cycle_edges() {
        let graph = Graph::from_edges(false, [(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0), (2, 3, 5.0)]);
        let mut log = EventLog::new();
        let result = kruskal(&graph, &AlgorithmConfig::default(), &mut log).unwrap();

        assert_eq!(result.edges.len(), 3);
        assert!(log
            .events()
            .iter()
            .any(|event| matches!(event, AlgorithmEvent::EdgeRejected { from: 1, to: 2, .. })));
    }

    #[test]
    fn test_kruskal_forest_on_disconnected_graph() {
        let mut graph = Graph::from_edges(false, [(0, 1, 1.0), (2, 3, 2.0)]);
        graph.add_vertex(9);
        let result = kruskal(&graph, &AlgorithmConfig::default(), &mut NoopObserver).unwrap();

        assert_eq!(result.edges.len(), 2);
        assert_eq!(result.components, 3);
        assert!(!result.is_spanning_tree());
    }

    #[test]
    fn test_kruskal_rejects_directed_graph() {
        let graph = Graph::from_edges(true, [(0, 1, 1.0)]);
        let err = kruskal(&graph, &AlgorithmConfig::default(), &mut NoopObserver).unwrap_err();
        assert!(matches!(err, GraphError::Configuration { .. }));
    }

    #[test]
    fn test_kruskal_negative_weight_validation() {
        let graph = Graph::from_edges(false, [(0, 1, -1.0), (1, 2, 2.0)]);
        assert!(kruskal(&graph, &AlgorithmConfig::default(), &mut NoopObserver).is_err());

        let result = kruskal(&graph, &AlgorithmConfig::unchecked(), &mut NoopObserver).unwrap();
        assert_eq!(result.total_weight, 1.0);
    }

    #[test]
    fn test_kruskal_empty_and_single_vertex() {
        let empty = kruskal(&Graph::undirected(), &AlgorithmConfig::default(), &mut NoopObserver)
            .unwrap();
        assert!(empty.edges.is_empty());
        assert_eq!(empty.components, 0);

        let mut single = Graph::undirected();
        single.add_vertex(1);
        let result = kruskal(&single, &AlgorithmConfig::default(), &mut NoopObserver).unwrap();
        assert!(result.edges.is_empty());
        assert!(result.is_spanning_tree());
    }
}
