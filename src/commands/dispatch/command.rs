//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use crate::commands::steps::StepObserver;
use crate::datasets::{self, Dataset};
use graphwalk_core::config::AlgorithmConfig;
use graphwalk_core::error::Result;
use graphwalk_core::graph::VertexId;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: AlgorithmConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// Resolve the algorithm configuration: file (if any), then flag overrides
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => AlgorithmConfig::load(path)?,
            None => AlgorithmConfig::default(),
        };
        if cli.unchecked {
            config.validate_weights = false;
        }

        Ok(Self { cli, config, start })
    }

    pub fn load_dataset(&self, name: &str) -> Result<Dataset> {
        let dataset = datasets::load(name)?;
        if self.cli.verbose {
            tracing::debug!(elapsed = ?self.start.elapsed(), "load_dataset");
        }
        Ok(dataset)
    }

    /// Check that every given vertex exists in `dataset`
    pub fn require_vertices(
        &self,
        dataset: &Dataset,
        vertices: impl IntoIterator<Item = Option<VertexId>>,
    ) -> Result<()> {
        vertices
            .into_iter()
            .flatten()
            .try_for_each(|vertex| dataset.require_vertex(vertex))
    }

    pub fn observer(&self) -> StepObserver {
        StepObserver::new(self.cli.steps)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphwalk {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Classical graph algorithms on bundled example graphs.");
        println!();
        println!("Run `graphwalk --help` for usage information.");
        Ok(())
    }
}
