use super::{format_path, join_ids};
use crate::cli::Cli;
use crate::datasets::Dataset;
use graphwalk_core::format::{format_distance, format_weight};
use graphwalk_core::graph::{
    path_edges, Algorithm, AlgorithmEvent, ShortestPathResult, SpanningTreeResult,
    TraversalResult, VertexId,
};

fn title(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Bfs => "BFS",
        Algorithm::Dfs => "DFS",
        Algorithm::Dijkstra => "Dijkstra",
        Algorithm::BellmanFord => "Bellman-Ford",
        Algorithm::Kruskal => "Kruskal",
        Algorithm::Prim => "Prim",
        Algorithm::Cycle => "Cycle detection",
    }
}

fn print_header(dataset: &Dataset, algorithm: Algorithm, source: VertexId, target: Option<VertexId>) {
    match target {
        Some(target) => println!(
            "{} from {} to {}",
            title(algorithm),
            dataset.describe(source),
            dataset.describe(target)
        ),
        None => println!("{} from {}", title(algorithm), dataset.describe(source)),
    }
}

pub fn traversal(cli: &Cli, dataset: &Dataset, result: &TraversalResult) {
    if !cli.quiet {
        print_header(dataset, result.algorithm, result.source, result.target);
        println!("Visit order: {}", join_ids(&result.order));
    }

    match (result.target, &result.path) {
        (Some(_), Some(path)) => println!(
            "Path ({} edge(s)): {}",
            path.len().saturating_sub(1),
            format_path(dataset, path)
        ),
        (Some(target), None) => println!(
            "No path from {} to {}",
            dataset.describe(result.source),
            dataset.describe(target)
        ),
        (None, _) => {
            println!(
                "Reached {} of {} vertices",
                result.order.len(),
                dataset.graph.vertex_count()
            );
            if !cli.quiet {
                for (&vertex, depth) in &result.depths {
                    println!("  {}: depth {}", dataset.describe(vertex), depth);
                }
            }
        }
    }
}

pub fn shortest_path(cli: &Cli, dataset: &Dataset, result: &ShortestPathResult) {
    if !cli.quiet {
        print_header(dataset, result.algorithm, result.source, result.target);
    }
    if result.negative_cycle {
        println!(
            "warning: negative cycle reachable from {}; distances are unreliable",
            dataset.describe(result.source)
        );
    }

    match (result.target, &result.path, result.cost) {
        (Some(_), Some(path), Some(cost)) => {
            println!("Cost: {} {}", format_weight(cost), dataset.unit);
            println!("Path: {}", format_path(dataset, path));
            if !cli.quiet {
                for edge in path_edges(&dataset.graph, path).unwrap_or_default() {
                    println!(
                        "  {} -> {}: {}",
                        dataset.describe(edge.source),
                        dataset.describe(edge.target),
                        format_weight(edge.weight)
                    );
                }
            }
        }
        (Some(target), _, _) => println!(
            "No path from {} to {}",
            dataset.describe(result.source),
            dataset.describe(target)
        ),
        (None, _, _) => {
            println!("Distances:");
            for (&vertex, &distance) in &result.distances {
                println!("  {}: {}", dataset.describe(vertex), format_distance(distance));
            }
        }
    }
}

pub fn spanning_tree(cli: &Cli, dataset: &Dataset, result: &SpanningTreeResult) {
    let kind = if result.is_spanning_tree() {
        "minimum spanning tree".to_string()
    } else {
        format!("minimum spanning forest, {} components", result.components)
    };
    println!(
        "{} {} ({} vertices, {} edges)",
        title(result.algorithm),
        kind,
        result.vertex_count,
        result.edges.len()
    );

    if !cli.quiet {
        for edge in &result.edges {
            println!(
                "  {} - {}: {}",
                dataset.describe(edge.source),
                dataset.describe(edge.target),
                format_weight(edge.weight)
            );
        }
        if let Some(order) = &result.inclusion_order {
            println!("Inclusion order: {}", join_ids(order));
        }
    }

    println!("Total weight: {} {}", format_weight(result.total_weight), dataset.unit);

    if !cli.quiet {
        let all = dataset.graph.total_weight();
        println!(
            "All connections: {} {} (tree saves {})",
            format_weight(all),
            dataset.unit,
            format_weight(all - result.total_weight)
        );
    }
}

pub fn cycle(dataset: &Dataset, cycle: Option<&[VertexId]>) {
    match cycle {
        Some(vertices) => println!("Cycle: {}", format_path(dataset, vertices)),
        None => println!("No cycle found in {}", dataset.name),
    }
}

pub fn steps(events: &[AlgorithmEvent]) {
    println!("Steps:");
    for event in events {
        println!("  {}", event);
    }
}

pub fn dataset_summary(dataset: &Dataset) {
    let kind = if dataset.graph.is_directed() {
        "directed"
    } else {
        "undirected"
    };
    println!(
        "{:<18} {:<10} {:>3} vertices {:>3} edges  {}",
        dataset.name,
        kind,
        dataset.graph.vertex_count(),
        dataset.graph.edge_count(),
        dataset.description
    );
}

pub fn dataset_detail(cli: &Cli, dataset: &Dataset) {
    println!("{} ({})", dataset.title, dataset.name);
    if !cli.quiet {
        println!("{}", dataset.description);
        println!("Weights: {}", dataset.unit);
        println!();
        println!("Labels:");
        for vertex in dataset.graph.vertices() {
            println!("  {}", dataset.describe(vertex));
        }
        println!();
    }
    print!("{}", dataset.graph);
}
