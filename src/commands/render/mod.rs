//! Result rendering shared by all commands

pub mod human;
pub mod json;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::datasets::Dataset;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{AlgorithmEvent, VertexId};

/// Print `result` as JSON (with dataset and steps attached) or via the
/// given human renderer followed by the recorded steps
pub fn emit<T: Serialize>(
    cli: &Cli,
    dataset: &Dataset,
    result: &T,
    events: Option<&[AlgorithmEvent]>,
    render_human: impl FnOnce(),
) -> Result<()> {
    match cli.format {
        OutputFormat::Json => json::print(&json::with_context(dataset, result, events)?),
        OutputFormat::Human => {
            render_human();
            if let Some(events) = events {
                human::steps(events);
            }
            Ok(())
        }
    }
}

/// `0 (Downtown) -> 18 (Bank) -> 19 (Post Office)`
pub fn format_path(dataset: &Dataset, path: &[VertexId]) -> String {
    path.iter()
        .map(|&vertex| dataset.describe(vertex))
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn join_ids(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(|vertex| vertex.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
