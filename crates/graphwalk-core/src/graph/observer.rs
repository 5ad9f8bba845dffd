//! Step hooks for algorithm runs
//!
//! Algorithms report progress through an [`Observer`] instead of printing.
//! [`NoopObserver`] discards everything, [`TracingObserver`] forwards steps
//! as `tracing` events, and [`EventLog`] keeps them for later rendering.

use std::fmt;

use serde::Serialize;

use crate::format::{format_distance, format_weight};
use crate::graph::model::{Edge, VertexId};
use crate::graph::types::Algorithm;

/// Receives algorithm steps. Every hook defaults to doing nothing.
pub trait Observer {
    /// A vertex was visited (traversals) or finalized (Dijkstra, Prim)
    fn vertex_visited(&mut self, _algorithm: Algorithm, _vertex: VertexId) {}

    /// A tentative distance improved through `edge`
    fn edge_relaxed(&mut self, _algorithm: Algorithm, _edge: &Edge, _distance: f64) {}

    /// A spanning tree accepted `edge`
    fn edge_accepted(&mut self, _algorithm: Algorithm, _edge: &Edge) {}

    /// A spanning tree skipped `edge` because it would close a cycle
    fn edge_rejected(&mut self, _algorithm: Algorithm, _edge: &Edge) {}

    /// A Bellman-Ford relaxation pass finished
    fn pass_completed(&mut self, _algorithm: Algorithm, _pass: usize, _updates: usize) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Forwards every step to `tracing` at trace level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn vertex_visited(&mut self, algorithm: Algorithm, vertex: VertexId) {
        tracing::trace!(algorithm = %algorithm, vertex, "vertex_visited");
    }

    fn edge_relaxed(&mut self, algorithm: Algorithm, edge: &Edge, distance: f64) {
        tracing::trace!(
            algorithm = %algorithm,
            from = edge.source,
            to = edge.target,
            weight = edge.weight,
            distance,
            "edge_relaxed"
        );
    }

    fn edge_accepted(&mut self, algorithm: Algorithm, edge: &Edge) {
        tracing::trace!(
            algorithm = %algorithm,
            from = edge.source,
            to = edge.target,
            weight = edge.weight,
            "edge_accepted"
        );
    }

    fn edge_rejected(&mut self, algorithm: Algorithm, edge: &Edge) {
        tracing::trace!(
            algorithm = %algorithm,
            from = edge.source,
            to = edge.target,
            weight = edge.weight,
            "edge_rejected"
        );
    }

    fn pass_completed(&mut self, algorithm: Algorithm, pass: usize, updates: usize) {
        tracing::trace!(algorithm = %algorithm, pass, updates, "pass_completed");
    }
}

/// A recorded algorithm step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AlgorithmEvent {
    VertexVisited {
        algorithm: Algorithm,
        vertex: VertexId,
    },
    EdgeRelaxed {
        algorithm: Algorithm,
        from: VertexId,
        to: VertexId,
        weight: f64,
        distance: f64,
    },
    EdgeAccepted {
        algorithm: Algorithm,
        from: VertexId,
        to: VertexId,
        weight: f64,
    },
    EdgeRejected {
        algorithm: Algorithm,
        from: VertexId,
        to: VertexId,
        weight: f64,
    },
    PassCompleted {
        algorithm: Algorithm,
        pass: usize,
        updates: usize,
    },
}

impl fmt::Display for AlgorithmEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmEvent::VertexVisited { algorithm, vertex } => {
                write!(f, "[{}] visit {}", algorithm, vertex)
            }
            AlgorithmEvent::EdgeRelaxed {
                algorithm,
                from,
                to,
                weight,
                distance,
            } => write!(
                f,
                "[{}] relax {} -> {} (weight {}), distance now {}",
                algorithm,
                from,
                to,
                format_weight(*weight),
                format_distance(*distance)
            ),
            AlgorithmEvent::EdgeAccepted {
                algorithm,
                from,
                to,
                weight,
            } => write!(
                f,
                "[{}] accept {} - {} (weight {})",
                algorithm,
                from,
                to,
                format_weight(*weight)
            ),
            AlgorithmEvent::EdgeRejected {
                algorithm,
                from,
                to,
                weight,
            } => write!(
                f,
                "[{}] reject {} - {} (weight {})",
                algorithm,
                from,
                to,
                format_weight(*weight)
            ),
            AlgorithmEvent::PassCompleted {
                algorithm,
                pass,
                updates,
            } => write!(
                f,
                "[{}] pass {} done, {} update(s)",
                algorithm, pass, updates
            ),
        }
    }
}

/// Records every step in order
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<AlgorithmEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[AlgorithmEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<AlgorithmEvent> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Observer for EventLog {
    fn vertex_visited(&mut self, algorithm: Algorithm, vertex: VertexId) {
        self.events
            .push(AlgorithmEvent::VertexVisited { algorithm, vertex });
    }

    fn edge_relaxed(&mut self, algorithm: Algorithm, edge: &Edge, distance: f64) {
        self.events.push(AlgorithmEvent::EdgeRelaxed {
            algorithm,
            from: edge.source,
            to: edge.target,
            weight: edge.weight,
            distance,
        });
    }

    fn edge_accepted(&mut self, algorithm: Algorithm, edge: &Edge) {
        self.events.push(AlgorithmEvent::EdgeAccepted {
            algorithm,
            from: edge.source,
            to: edge.target,
            weight: edge.weight,
        });
    }

    fn edge_rejected(&mut self, algorithm: Algorithm, edge: &Edge) {
        self.events.push(AlgorithmEvent::EdgeRejected {
            algorithm,
            from: edge.source,
            to: edge.target,
            weight: edge.weight,
        });
    }

    fn pass_completed(&mut self, algorithm: Algorithm, pass: usize, updates: usize) {
        self.events.push(AlgorithmEvent::PassCompleted {
            algorithm,
            pass,
            updates,
        });
    }
}
