//! Weighted adjacency-list graph
//!
//! Vertices are tracked in an explicit sorted set so that isolated vertices
//! stay visible to enumeration. Undirected edges are stored as two mirrored
//! adjacency entries and reported once by [`Graph::edges`].

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::format::format_weight;

/// Vertex identifier. Identifiers need not be contiguous or zero-based.
pub type VertexId = i64;

/// A weighted edge `source -> target`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: f64,
}

impl Edge {
    pub fn new(source: VertexId, target: VertexId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Endpoints as an unordered pair (smaller id first)
    pub fn unordered(&self) -> (VertexId, VertexId) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

/// Weighted graph, directed or undirected, fixed at construction
#[derive(Debug, Clone, Default)]
pub struct Graph {
    directed: bool,
    vertices: BTreeSet<VertexId>,
    adjacency: HashMap<VertexId, Vec<(VertexId, f64)>>,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            vertices: BTreeSet::new(),
            adjacency: HashMap::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Build a graph from `(source, target, weight)` triples
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId, f64)>,
    {
        let mut graph = Self::new(directed);
        for (source, target, weight) in edges {
            graph.add_edge(source, target, weight);
        }
        graph
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Register a vertex without any incident edge. Idempotent.
    pub fn add_vertex(&mut self, vertex: VertexId) {
        self.vertices.insert(vertex);
    }

    /// Insert an edge. Undirected graphs also store the mirrored entry.
    ///
    /// Duplicates and self-loops are accepted and produce parallel entries.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: f64) {
        self.vertices.insert(source);
        self.vertices.insert(target);
        self.adjacency
            .entry(source)
            .or_default()
            .push((target, weight));

        if !self.directed {
            self.adjacency
                .entry(target)
                .or_default()
                .push((source, weight));
        }
    }

    /// All vertex identifiers in ascending order
    pub fn vertices(&self) -> Vec<VertexId> {
        self.vertices.iter().copied().collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Outgoing `(neighbor, weight)` pairs in insertion order.
    /// Unknown vertices have no neighbors.
    pub fn neighbors(&self, vertex: VertexId) -> &[(VertexId, f64)] {
        self.adjacency
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every stored adjacency entry as a directed edge, sources ascending.
    ///
    /// For undirected graphs each logical edge appears once per direction.
    pub fn arcs(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices.iter().flat_map(move |&source| {
            self.neighbors(source)
                .iter()
                .map(move |&(target, weight)| Edge::new(source, target, weight))
        })
    }

    /// Each logical edge exactly once.
    ///
    /// Undirected edges are deduplicated by unordered endpoint pair and keep
    /// the first-encountered weight; parallel undirected edges collapse.
    pub fn edges(&self) -> Vec<Edge> {
        if self.directed {
            return self.arcs().collect();
        }

        let mut seen: HashSet<(VertexId, VertexId)> = HashSet::new();
        self.arcs()
            .filter(|edge| seen.insert(edge.unordered()))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Sum of the weights of all logical edges
    pub fn total_weight(&self) -> f64 {
        self.edges().iter().map(|edge| edge.weight).sum()
    }

    /// First stored edge whose weight is negative or NaN
    pub fn find_negative_edge(&self) -> Option<Edge> {
        self.arcs().find(|edge| edge.weight.is_nan() || edge.weight < 0.0)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, arrow) = if self.directed {
            ("Directed", "->")
        } else {
            ("Undirected", "--")
        };
        writeln!(f, "{} graph", kind)?;
        writeln!(f, "Vertices: {}", self.vertex_count())?;
        writeln!(f, "Edges:")?;
        for edge in self.edges() {
            writeln!(
                f,
                "  {} {} {} (weight: {})",
                edge.source,
                arrow,
                edge.target,
                format_weight(edge.weight)
            )?;
        }
        Ok(())
    }
}
