//! Observer used by every command: forwards steps to `tracing` and, with
//! `--steps`, keeps them for output

use graphwalk_core::graph::{
    Algorithm, AlgorithmEvent, Edge, EventLog, Observer, TracingObserver, VertexId,
};

pub struct StepObserver {
    tracing: TracingObserver,
    log: Option<EventLog>,
}

impl StepObserver {
    pub fn new(record: bool) -> Self {
        Self {
            tracing: TracingObserver,
            log: record.then(EventLog::new),
        }
    }

    /// Recorded steps, `None` unless recording was requested
    pub fn into_events(self) -> Option<Vec<AlgorithmEvent>> {
        self.log.map(EventLog::into_events)
    }
}

impl Observer for StepObserver {
    fn vertex_visited(&mut self, algorithm: Algorithm, vertex: VertexId) {
        self.tracing.vertex_visited(algorithm, vertex);
        if let Some(log) = &mut self.log {
            log.vertex_visited(algorithm, vertex);
        }
    }

    fn edge_relaxed(&mut self, algorithm: Algorithm, edge: &Edge, distance: f64) {
        self.tracing.edge_relaxed(algorithm, edge, distance);
        if let Some(log) = &mut self.log {
            log.edge_relaxed(algorithm, edge, distance);
        }
    }

    fn edge_accepted(&mut self, algorithm: Algorithm, edge: &Edge) {
        self.tracing.edge_accepted(algorithm, edge);
        if let Some(log) = &mut self.log {
            log.edge_accepted(algorithm, edge);
        }
    }

    fn edge_rejected(&mut self, algorithm: Algorithm, edge: &Edge) {
        self.tracing.edge_rejected(algorithm, edge);
        if let Some(log) = &mut self.log {
            log.edge_rejected(algorithm, edge);
        }
    }

    fn pass_completed(&mut self, algorithm: Algorithm, pass: usize, updates: usize) {
        self.tracing.pass_completed(algorithm, pass, updates);
        if let Some(log) = &mut self.log {
            log.pass_completed(algorithm, pass, updates);
        }
    }
}
