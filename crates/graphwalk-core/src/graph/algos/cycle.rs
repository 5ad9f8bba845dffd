use std::collections::HashMap;

use crate::error::Result;
use crate::graph::model::{Graph, VertexId};
use crate::graph::types::Algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    OnStack,
    Done,
}

/// Find a directed cycle, searching from every vertex in ascending order.
///
/// The cycle is returned closed (`[a, b, ..., a]`). A self-loop is the cycle
/// `[v, v]`. Undirected graphs are a configuration error since every edge
/// would count as a two-vertex cycle.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn find_cycle(graph: &Graph) -> Result<Option<Vec<VertexId>>> {
    if !graph.is_directed() {
        crate::bail_config!(Algorithm::Cycle.name(), "requires a directed graph");
    }

    let mut marks: HashMap<VertexId, Mark> = HashMap::new();

    for root in graph.vertices() {
        if marks.contains_key(&root) {
            continue;
        }

        // (vertex, index of the next neighbor to explore)
        let mut stack: Vec<(VertexId, usize)> = vec![(root, 0)];
        marks.insert(root, Mark::OnStack);

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.0;
            let neighbors = graph.neighbors(vertex);

            let Some(&(next, _)) = neighbors.get(frame.1) else {
                marks.insert(vertex, Mark::Done);
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match marks.get(&next) {
                Some(Mark::OnStack) => {
                    let mut cycle: Vec<VertexId> = stack
                        .iter()
                        .map(|&(v, _)| v)
                        .skip_while(|&v| v != next)
                        .collect();
                    cycle.push(next);
                    tracing::debug!(length = cycle.len() - 1, "cycle_found");
                    return Ok(Some(cycle));
                }
                Some(Mark::Done) => {}
                None => {
                    marks.insert(next, Mark::OnStack);
                    stack.push((next, 0));
                }
            }
        }
    }

    Ok(None)
}
