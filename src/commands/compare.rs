//! compare command: run both members of an algorithm family side by side

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::cli::args::{CompareArgs, CompareFamily};
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::render::{human, json};
use crate::datasets::Dataset;
use graphwalk_core::bail_usage;
use graphwalk_core::error::Result;
use graphwalk_core::format::format_weight;
use graphwalk_core::graph::{
    bellman_ford, bfs, dfs, dijkstra, kruskal, prim, AlgorithmEvent, VertexId,
};

/// One algorithm run with its recorded steps
struct Run<T> {
    result: T,
    events: Option<Vec<AlgorithmEvent>>,
}

type Summary = Vec<(&'static str, Value)>;

pub fn execute(ctx: &CommandContext, args: &CompareArgs) -> Result<()> {
    let dataset = ctx.load_dataset(&args.dataset)?;
    ctx.require_vertices(&dataset, [args.from, args.to])?;

    match args.family {
        CompareFamily::Search => compare_search(ctx, &dataset, args),
        CompareFamily::ShortestPath => compare_shortest_path(ctx, &dataset, args),
        CompareFamily::SpanningTree => compare_spanning_tree(ctx, &dataset, args),
    }
}

fn require_from(args: &CompareArgs) -> Result<VertexId> {
    match args.from {
        Some(from) => Ok(from),
        None => bail_usage!(format!("compare {} requires --from", args.family.name())),
    }
}

fn compare_search(ctx: &CommandContext, dataset: &Dataset, args: &CompareArgs) -> Result<()> {
    let from = require_from(args)?;
    let graph = &dataset.graph;

    let mut observer = ctx.observer();
    let result = bfs(graph, from, args.to, &mut observer);
    let breadth = Run { result, events: observer.into_events() };

    let mut observer = ctx.observer();
    let result = dfs(graph, from, args.to, ctx.config.dfs_strategy, &mut observer);
    let depth = Run { result, events: observer.into_events() };

    let hops = |path: &Option<Vec<VertexId>>| match path {
        Some(path) => json!(path.len().saturating_sub(1)),
        None => Value::Null,
    };
    let summary: Summary = vec![
        ("bfs_visited", json!(breadth.result.order.len())),
        ("dfs_visited", json!(depth.result.order.len())),
        ("bfs_path_edges", hops(&breadth.result.path)),
        ("dfs_path_edges", hops(&depth.result.path)),
    ];

    report(ctx, dataset, args.family, [breadth, depth], summary, |result| {
        human::traversal(ctx.cli, dataset, result)
    })
}

fn compare_shortest_path(ctx: &CommandContext, dataset: &Dataset, args: &CompareArgs) -> Result<()> {
    let from = require_from(args)?;
    let graph = &dataset.graph;

    let mut observer = ctx.observer();
    let result = dijkstra(graph, from, args.to, &ctx.config, &mut observer)?;
    let greedy = Run { result, events: observer.into_events() };

    let mut observer = ctx.observer();
    let result = bellman_ford(graph, from, args.to, &mut observer);
    let relaxing = Run { result, events: observer.into_events() };

    // Dijkstra stops early once the target is settled, so only the cost is comparable then
    let agree = !relaxing.result.negative_cycle
        && match args.to {
            Some(_) => match (greedy.result.cost, relaxing.result.cost) {
                (Some(a), Some(b)) => same_weight(a, b),
                (a, b) => a.is_none() && b.is_none(),
            },
            None => greedy.result.distances.iter().all(|(vertex, &distance)| {
                relaxing
                    .result
                    .distances
                    .get(vertex)
                    .is_some_and(|&other| same_weight(distance, other))
            }),
        };
    let summary: Summary = vec![
        ("dijkstra_cost", json!(greedy.result.cost)),
        ("bellman_ford_cost", json!(relaxing.result.cost)),
        ("negative_cycle", json!(relaxing.result.negative_cycle)),
        ("distances_agree", json!(agree)),
    ];

    report(ctx, dataset, args.family, [greedy, relaxing], summary, |result| {
        human::shortest_path(ctx.cli, dataset, result)
    })
}

fn compare_spanning_tree(ctx: &CommandContext, dataset: &Dataset, args: &CompareArgs) -> Result<()> {
    let graph = &dataset.graph;

    let mut observer = ctx.observer();
    let result = kruskal(graph, &ctx.config, &mut observer)?;
    let by_edges = Run { result, events: observer.into_events() };

    let mut observer = ctx.observer();
    let result = prim(graph, args.from, &ctx.config, &mut observer)?;
    let by_vertices = Run { result, events: observer.into_events() };

    let summary: Summary = vec![
        ("kruskal_total", json!(by_edges.result.total_weight)),
        ("prim_total", json!(by_vertices.result.total_weight)),
        (
            "totals_agree",
            json!(same_weight(
                by_edges.result.total_weight,
                by_vertices.result.total_weight
            )),
        ),
    ];

    report(ctx, dataset, args.family, [by_edges, by_vertices], summary, |result| {
        human::spanning_tree(ctx.cli, dataset, result)
    })
}

fn same_weight(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn summary_text(value: &Value) -> String {
    match value {
        Value::Number(number) if !(number.is_i64() || number.is_u64()) => {
            number.as_f64().map_or_else(|| number.to_string(), format_weight)
        }
        Value::Null => "none".to_string(),
        other => other.to_string(),
    }
}

fn report<T: Serialize>(
    ctx: &CommandContext,
    dataset: &Dataset,
    family: CompareFamily,
    runs: [Run<T>; 2],
    summary: Summary,
    render: impl Fn(&T),
) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            let results = runs
                .iter()
                .map(|run| json::with_context(dataset, &run.result, run.events.as_deref()))
                .collect::<Result<Vec<_>>>()?;
            let summary: Map<String, Value> = summary
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect();

            json::print(&json!({
                "dataset": dataset.name,
                "family": family.name(),
                "results": results,
                "summary": summary,
            }))
        }
        OutputFormat::Human => {
            for run in &runs {
                render(&run.result);
                if let Some(events) = &run.events {
                    human::steps(events);
                }
                println!();
            }

            println!("Summary:");
            for (key, value) in summary {
                println!("  {}: {}", key.replace('_', " "), summary_text(&value));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_weight_tolerates_float_noise() {
        assert!(same_weight(0.1 + 0.2, 0.3));
        assert!(same_weight(f64::INFINITY, f64::INFINITY));
        assert!(!same_weight(1.0, 1.001));
    }

    #[test]
    fn test_summary_text() {
        assert_eq!(summary_text(&json!(17.299999999999997)), "17.3");
        assert_eq!(summary_text(&json!(4)), "4");
        assert_eq!(summary_text(&Value::Null), "none");
        assert_eq!(summary_text(&json!(true)), "true");
    }
}
