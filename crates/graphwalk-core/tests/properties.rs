use std::collections::HashSet;

use graphwalk_core::config::AlgorithmConfig;
use graphwalk_core::graph::{
    bellman_ford, bfs, dfs, dijkstra, kruskal, path_cost, prim, DfsStrategy, Graph, NoopObserver,
    VertexId,
};
use proptest::prelude::*;

const VERTICES: i64 = 12;

/// Build a graph over `0..vertex_count` from raw triples, skipping
/// self-loops and repeated endpoint pairs
fn build(directed: bool, vertex_count: i64, raw: &[(i64, i64, u8)]) -> Graph {
    let mut graph = Graph::new(directed);
    for v in 0..vertex_count {
        graph.add_vertex(v);
    }

    let mut seen = HashSet::new();
    for &(a, b, weight) in raw {
        let (a, b) = (a % vertex_count, b % vertex_count);
        let key = if directed { (a, b) } else { (a.min(b), a.max(b)) };
        if a != b && seen.insert(key) {
            graph.add_edge(a, b, f64::from(weight));
        }
    }
    graph
}

/// Number of connected components of an undirected graph
fn component_count(graph: &Graph) -> usize {
    let mut seen: HashSet<VertexId> = HashSet::new();
    let mut components = 0;
    for vertex in graph.vertices() {
        if seen.contains(&vertex) {
            continue;
        }
        components += 1;
        seen.extend(bfs(graph, vertex, None, &mut NoopObserver).order);
    }
    components
}

prop_compose! {
    fn raw_edges()
        (edges in prop::collection::vec((0i64..VERTICES, 0i64..VERTICES, 0u8..=20), 0..=40))
        -> Vec<(i64, i64, u8)>
    {
        edges
    }
}

prop_compose! {
    /// Undirected graph kept connected by a chain through every vertex
    fn connected_undirected()
        (chain in prop::collection::vec(0u8..=20, (VERTICES - 1) as usize), extra in raw_edges())
        -> Graph
    {
        let mut raw: Vec<(i64, i64, u8)> = chain
            .into_iter()
            .enumerate()
            .map(|(i, w)| (i as i64, i as i64 + 1, w))
            .collect();
        raw.extend(extra);
        build(false, VERTICES, &raw)
    }
}

proptest! {
    #[test]
    fn prop_kruskal_and_prim_agree_on_connected_graphs(
        graph in connected_undirected(),
        start in 0i64..VERTICES,
    ) {
        let config = AlgorithmConfig::default();
        let k = kruskal(&graph, &config, &mut NoopObserver).unwrap();
        let p = prim(&graph, Some(start), &config, &mut NoopObserver).unwrap();

        prop_assert!(k.is_spanning_tree());
        prop_assert!(p.is_spanning_tree());
        prop_assert_eq!(k.edges.len(), (VERTICES - 1) as usize);
        prop_assert!((k.total_weight - p.total_weight).abs() < 1e-9);
    }

    #[test]
    fn prop_spanning_forest_size(raw in raw_edges()) {
        let graph = build(false, VERTICES, &raw);
        let components = component_count(&graph);
        let expected = VERTICES as usize - components;
        let config = AlgorithmConfig::default();

        let k = kruskal(&graph, &config, &mut NoopObserver).unwrap();
        let p = prim(&graph, None, &config, &mut NoopObserver).unwrap();
        prop_assert_eq!(k.edges.len(), expected);
        prop_assert_eq!(p.edges.len(), expected);
        prop_assert_eq!(k.components, components);
        prop_assert!((k.total_weight - p.total_weight).abs() < 1e-9);
    }

    #[test]
    fn prop_bfs_path_never_longer_than_dfs(
        raw in raw_edges(),
        directed in any::<bool>(),
        source in 0i64..VERTICES,
        target in 0i64..VERTICES,
    ) {
        let graph = build(directed, VERTICES, &raw);
        let breadth = bfs(&graph, source, Some(target), &mut NoopObserver);

        for strategy in [DfsStrategy::Recursive, DfsStrategy::Iterative] {
            let depth = dfs(&graph, source, Some(target), strategy, &mut NoopObserver);
            prop_assert_eq!(breadth.found, depth.found);
            if let (Some(b), Some(d)) = (breadth.path_edges(), depth.path_edges()) {
                prop_assert!(b <= d);
            }
        }
    }

    #[test]
    fn prop_dijkstra_matches_bellman_ford(
        raw in raw_edges(),
        directed in any::<bool>(),
        source in 0i64..VERTICES,
        target in 0i64..VERTICES,
    ) {
        let graph = build(directed, VERTICES, &raw);
        let fast = dijkstra(&graph, source, Some(target), &AlgorithmConfig::default(), &mut NoopObserver)
            .unwrap();
        let slow = bellman_ford(&graph, source, Some(target), &mut NoopObserver);

        prop_assert!(!slow.negative_cycle);
        prop_assert_eq!(fast.found(), slow.found());
        if let (Some(a), Some(b)) = (fast.cost, slow.cost) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_reported_paths_match_cost(
        raw in raw_edges(),
        source in 0i64..VERTICES,
        target in 0i64..VERTICES,
    ) {
        let graph = build(true, VERTICES, &raw);
        let results = [
            dijkstra(&graph, source, Some(target), &AlgorithmConfig::default(), &mut NoopObserver)
                .unwrap(),
            bellman_ford(&graph, source, Some(target), &mut NoopObserver),
        ];

        for result in results {
            if let (Some(path), Some(cost)) = (&result.path, result.cost) {
                prop_assert_eq!(path.first(), Some(&source));
                prop_assert_eq!(path.last(), Some(&target));
                let walked = path_cost(&graph, path);
                prop_assert!(walked.is_some());
                prop_assert!((walked.unwrap_or(f64::NAN) - cost).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn prop_bellman_ford_no_false_cycle_on_dag(
        raw in prop::collection::vec((0i64..VERTICES, 0i64..VERTICES, -20i8..=20), 0..=40),
        source in 0i64..VERTICES,
    ) {
        // edges only run from lower to higher ids, so no cycle exists
        let mut graph = Graph::directed();
        for (a, b, weight) in raw {
            if a < b {
                graph.add_edge(a, b, f64::from(weight));
            }
        }
        let result = bellman_ford(&graph, source, None, &mut NoopObserver);
        prop_assert!(!result.negative_cycle);
    }

    #[test]
    fn prop_bellman_ford_flags_reachable_negative_cycle(
        ring in prop::collection::vec(0u8..=20, 1..6),
        extra in raw_edges(),
        lead_in in 0u8..=20,
    ) {
        // lead-in edge 100 -> 0, then a ring 0 -> 1 -> ... -> k -> 0 whose
        // closing edge makes the total negative
        let mut graph = build(true, VERTICES, &extra);
        graph.add_edge(100, 0, f64::from(lead_in));

        let k = ring.len() as i64;
        let mut total = 0.0;
        for (i, weight) in ring.iter().enumerate() {
            let from = i as i64;
            graph.add_edge(from, from + 1, f64::from(*weight));
            total += f64::from(*weight);
        }
        graph.add_edge(k, 0, -(total + 1.0));

        let result = bellman_ford(&graph, 100, None, &mut NoopObserver);
        prop_assert!(result.negative_cycle);
    }
}
