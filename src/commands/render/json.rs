use serde::Serialize;
use serde_json::{json, Value};

use crate::datasets::Dataset;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{AlgorithmEvent, VertexId};

/// Serialize `result` and attach the dataset name, path labels and the
/// recorded steps
pub fn with_context<T: Serialize>(
    dataset: &Dataset,
    result: &T,
    events: Option<&[AlgorithmEvent]>,
) -> Result<Value> {
    let mut value = serde_json::to_value(result)?;

    if let Some(object) = value.as_object_mut() {
        object.insert("dataset".to_string(), json!(dataset.name));

        let labels: Option<Vec<Value>> = object
            .get("path")
            .and_then(Value::as_array)
            .map(|path| {
                path.iter()
                    .filter_map(Value::as_i64)
                    .map(|vertex| json!(dataset.label(vertex)))
                    .collect()
            });
        if let Some(labels) = labels {
            object.insert("path_labels".to_string(), Value::Array(labels));
        }

        if let Some(events) = events {
            object.insert("steps".to_string(), serde_json::to_value(events)?);
        }
    }

    Ok(value)
}

pub fn dataset_summary(dataset: &Dataset) -> Value {
    json!({
        "name": dataset.name,
        "title": dataset.title,
        "description": dataset.description,
        "directed": dataset.graph.is_directed(),
        "vertices": dataset.graph.vertex_count(),
        "edges": dataset.graph.edge_count(),
        "unit": dataset.unit,
    })
}

pub fn dataset_detail(dataset: &Dataset) -> Value {
    let vertices: Vec<Value> = dataset
        .graph
        .vertices()
        .into_iter()
        .map(|vertex| json!({ "id": vertex, "label": dataset.label(vertex) }))
        .collect();

    json!({
        "name": dataset.name,
        "title": dataset.title,
        "description": dataset.description,
        "directed": dataset.graph.is_directed(),
        "unit": dataset.unit,
        "vertices": vertices,
        "edges": dataset.graph.edges(),
        "total_weight": dataset.graph.total_weight(),
    })
}

pub fn cycle(dataset: &Dataset, cycle: Option<&[VertexId]>) -> Value {
    json!({
        "dataset": dataset.name,
        "found": cycle.is_some(),
        "cycle": cycle,
        "labels": cycle.map(|vertices| {
            vertices.iter().map(|&vertex| dataset.label(vertex)).collect::<Vec<_>>()
        }),
    })
}

pub fn print(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
