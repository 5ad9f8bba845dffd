//! Integration tests for the graphwalk CLI
//!
//! These tests run the graphwalk binary against the bundled datasets.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

/// Get a Command for graphwalk
fn graphwalk() -> Command {
    let mut cmd = cargo_bin_cmd!("graphwalk");
    cmd.env_remove("GRAPHWALK_CONFIG");
    cmd
}

/// Run with `--format json` and parse stdout
fn json_output(args: &[&str]) -> Value {
    let output = graphwalk()
        .args(["--format", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn path_len(value: &Value) -> usize {
    value["path"].as_array().unwrap().len()
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    graphwalk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphwalk"))
        .stdout(predicate::str::contains("dijkstra"))
        .stdout(predicate::str::contains("bellman-ford"))
        .stdout(predicate::str::contains("mst"));
}

#[test]
fn test_version_flag() {
    graphwalk()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphwalk"));
}

#[test]
fn test_no_subcommand_prints_hint() {
    graphwalk()
        .assert()
        .success()
        .stdout(predicate::str::contains("graphwalk --help"));
}

// ============================================================================
// Datasets
// ============================================================================

#[test]
fn test_datasets_lists_every_dataset() {
    graphwalk()
        .arg("datasets")
        .assert()
        .success()
        .stdout(predicate::str::contains("city-map"))
        .stdout(predicate::str::contains("currency"))
        .stdout(predicate::str::contains("power-grid"));

    let list = json_output(&["datasets"]);
    assert_eq!(list.as_array().unwrap().len(), 7);
    assert_eq!(list[0]["name"], "city-map");
}

#[test]
fn test_show_dataset() {
    graphwalk()
        .args(["show", "city-map"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Downtown"))
        .stdout(predicate::str::contains("Undirected graph"));

    let detail = json_output(&["show", "city-map"]);
    assert_eq!(detail["directed"], false);
    assert_eq!(detail["vertices"].as_array().unwrap().len(), 20);
    assert_eq!(detail["vertices"][3]["label"], "Hospital");
}

#[test]
fn test_unknown_dataset_exits_3() {
    graphwalk()
        .args(["show", "atlantis"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error:"));
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn test_bfs_finds_path() {
    graphwalk()
        .args(["bfs", "city-map", "--from", "0", "--to", "19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS from 0 (Downtown)"))
        .stdout(predicate::str::contains("Path ("));

    let result = json_output(&["bfs", "city-map", "--from", "0", "--to", "19"]);
    assert_eq!(result["algorithm"], "bfs");
    assert_eq!(result["found"], true);
    assert_eq!(result["path"][0], 0);
    assert_eq!(result["path_labels"][0], "Downtown");
    assert_eq!(result["path"].as_array().unwrap().last().unwrap(), 19);
}

#[test]
fn test_bfs_path_never_longer_than_dfs() {
    let args = ["social-network", "--from", "0", "--to", "19"];
    let breadth = json_output(&[&["bfs"][..], &args[..]].concat());
    let depth = json_output(&[&["dfs"][..], &args[..]].concat());
    let iterative = json_output(&[&["dfs", "--iterative"][..], &args[..]].concat());
    let recursive = json_output(&[&["dfs", "--recursive"][..], &args[..]].concat());

    assert!(path_len(&breadth) <= path_len(&depth));
    assert!(path_len(&breadth) <= path_len(&iterative));
    assert!(path_len(&breadth) <= path_len(&recursive));
    assert_eq!(depth["path"], iterative["path"]);
}

#[test]
fn test_bfs_without_target_reports_reach() {
    graphwalk()
        .args(["bfs", "computer-network", "--from", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reached"));
}

#[test]
fn test_quiet_hides_visit_order() {
    graphwalk()
        .args(["--quiet", "bfs", "city-map", "--from", "0", "--to", "19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Visit order").not())
        .stdout(predicate::str::contains("Path ("));
}

#[test]
fn test_unknown_vertex_exits_3() {
    graphwalk()
        .args(["bfs", "city-map", "--from", "99"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error:"));

    let output = graphwalk()
        .args(["--format", "json", "dijkstra", "city-map", "--from", "0", "--to", "-1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let error: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["type"], "vertex_not_found");
}

// ============================================================================
// Shortest paths
// ============================================================================

#[test]
fn test_dijkstra_reports_cost() {
    graphwalk()
        .args(["dijkstra", "city-map", "--from", "0", "--to", "19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost:"));
}

#[test]
fn test_unit_weights_make_dijkstra_cost_match_bfs_hops() {
    let hops = json_output(&["bfs", "social-network", "--from", "0", "--to", "19"]);
    let cheapest = json_output(&["dijkstra", "social-network", "--from", "0", "--to", "19"]);

    let edges = path_len(&hops) - 1;
    assert_eq!(cheapest["cost"].as_f64().unwrap(), edges as f64);
}

#[test]
fn test_dijkstra_and_bellman_ford_agree() {
    let greedy = json_output(&["dijkstra", "game-map", "--from", "0"]);
    let relaxing = json_output(&["bellman-ford", "game-map", "--from", "0"]);

    assert_eq!(relaxing["negative_cycle"], false);
    let expected = greedy["distances"].as_object().unwrap();
    for (vertex, distance) in relaxing["distances"].as_object().unwrap() {
        let (a, b) = (distance.as_f64(), expected[vertex].as_f64());
        match (a, b) {
            (Some(a), Some(b)) => assert!((a - b).abs() < 1e-9, "vertex {}", vertex),
            (a, b) => assert_eq!(a, b, "vertex {}", vertex),
        }
    }
}

#[test]
fn test_bellman_ford_detects_arbitrage() {
    graphwalk()
        .args(["bellman-ford", "currency", "--from", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("negative cycle"));

    let result = json_output(&["bellman-ford", "currency", "--from", "0"]);
    assert_eq!(result["negative_cycle"], true);
}

#[test]
fn test_dijkstra_rejects_negative_weights() {
    graphwalk()
        .args(["dijkstra", "currency", "--from", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("negative"));

    graphwalk()
        .args(["--unchecked", "dijkstra", "currency", "--from", "0", "--to", "1"])
        .assert()
        .success();
}

// ============================================================================
// Spanning trees and cycles
// ============================================================================

#[test]
fn test_mst_power_grid() {
    graphwalk()
        .args(["mst", "power-grid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total weight:"))
        .stdout(predicate::str::contains("All connections:"));

    let tree = json_output(&["mst", "power-grid", "--algorithm", "prim", "--start", "4"]);
    assert_eq!(tree["algorithm"], "prim");
    assert_eq!(tree["edges"].as_array().unwrap().len(), 17);
    assert_eq!(tree["components"], 1);
    assert_eq!(tree["inclusion_order"][0], 4);
}

#[test]
fn test_mst_on_directed_dataset_exits_2() {
    graphwalk()
        .args(["mst", "computer-network"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_cycle_in_dependencies() {
    graphwalk()
        .args(["cycle", "dependencies"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cycle: 9"));

    let result = json_output(&["cycle", "dependencies"]);
    assert_eq!(result["found"], true);
    let cycle = result["cycle"].as_array().unwrap();
    assert_eq!(cycle.first(), cycle.last());
}

#[test]
fn test_cycle_on_undirected_dataset_exits_2() {
    graphwalk().args(["cycle", "city-map"]).assert().code(2);
}

// ============================================================================
// Steps and comparison
// ============================================================================

#[test]
fn test_steps_are_recorded() {
    graphwalk()
        .args(["--steps", "dijkstra", "city-map", "--from", "0", "--to", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Steps:"))
        .stdout(predicate::str::contains("[dijkstra] relax"));

    let result = json_output(&["--steps", "bfs", "city-map", "--from", "0", "--to", "19"]);
    let steps = result["steps"].as_array().unwrap();
    assert_eq!(steps[0]["event"], "vertex_visited");
    assert_eq!(steps[0]["vertex"], 0);

    let quiet = json_output(&["bfs", "city-map", "--from", "0", "--to", "19"]);
    assert!(quiet.get("steps").is_none());
}

#[test]
fn test_compare_shortest_path() {
    let report = json_output(&[
        "compare",
        "shortest-path",
        "social-network",
        "--from",
        "0",
        "--to",
        "19",
    ]);
    assert_eq!(report["family"], "shortest-path");
    assert_eq!(report["results"].as_array().unwrap().len(), 2);
    assert_eq!(report["results"][0]["algorithm"], "dijkstra");
    assert_eq!(report["results"][1]["algorithm"], "bellman-ford");
    assert_eq!(report["summary"]["distances_agree"], true);
}

#[test]
fn test_compare_spanning_tree_totals_agree() {
    graphwalk()
        .args(["compare", "spanning-tree", "power-grid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary:"))
        .stdout(predicate::str::contains("totals agree: true"));
}

#[test]
fn test_compare_search_requires_from() {
    graphwalk()
        .args(["compare", "search", "city-map"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--from"));
}

// ============================================================================
// Argument errors and configuration
// ============================================================================

#[test]
fn test_missing_argument_json_envelope() {
    let output = graphwalk()
        .args(["--format", "json", "bfs", "city-map"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let error: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["type"], "usage_error");
}

#[test]
fn test_config_file_disables_weight_check() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("graphwalk.toml");
    std::fs::write(&config, "validate_weights = false\n").unwrap();

    graphwalk()
        .arg("--config")
        .arg(&config)
        .args(["dijkstra", "currency", "--from", "0", "--to", "1"])
        .assert()
        .success();

    graphwalk()
        .env("GRAPHWALK_CONFIG", &config)
        .args(["mst", "currency"])
        .assert()
        .code(2);
}

#[test]
fn test_invalid_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("graphwalk.toml");
    std::fs::write(&config, "colour = \"blue\"\n").unwrap();

    let output = graphwalk()
        .args(["--format", "json", "--config"])
        .arg(&config)
        .args(["datasets"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let error: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["type"], "toml_error");

    graphwalk()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .arg("datasets")
        .assert()
        .code(1);
}

#[test]
fn test_format_flag_values() {
    graphwalk()
        .args(["--format", "yaml", "datasets"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format: yaml"));

    graphwalk()
        .args(["--format=json", "datasets"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}
