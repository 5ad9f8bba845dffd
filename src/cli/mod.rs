//! CLI argument parsing for graphwalk
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --unchecked, --steps

pub mod args;
pub mod commands;

use std::path::PathBuf;

use clap::Parser;

pub use commands::Commands;
pub use graphwalk_core::format::OutputFormat;

/// Graphwalk - classical graph algorithms on bundled example graphs
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json
    #[arg(long, global = true, value_name = "FORMAT", default_value = "human")]
    pub format: OutputFormat,

    /// Only print the essential result lines
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging and phase timings on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, either a level (`trace`) or a full directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Algorithm configuration file (TOML)
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip the non-negative weight check for Dijkstra, Kruskal and Prim
    #[arg(long, global = true)]
    pub unchecked: bool,

    /// Record and print every algorithm step
    #[arg(long, global = true)]
    pub steps: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use graphwalk_core::graph::DfsStrategy;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_vertex() {
        let cli = Cli::try_parse_from([
            "graphwalk",
            "bfs",
            "city-map",
            "--from",
            "-3",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Some(Commands::Bfs(args)) => assert_eq!(args.from, -3),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_format_parses_through_core_type() {
        let cli = Cli::try_parse_from(["graphwalk", "--format", "JSON", "datasets"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);

        let cli = Cli::try_parse_from(["graphwalk", "datasets"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Human);

        let err = Cli::try_parse_from(["graphwalk", "--format", "yaml", "datasets"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("unknown format: yaml"));
    }

    #[test]
    fn test_dfs_strategy_flags() {
        let strategy = |extra: &[&str]| {
            let mut argv = vec!["graphwalk", "dfs", "city-map", "--from", "0"];
            argv.extend_from_slice(extra);
            match Cli::try_parse_from(argv).map(|cli| cli.command) {
                Ok(Some(Commands::Dfs(args))) => Ok(args.strategy()),
                Ok(other) => panic!("unexpected command: {:?}", other),
                Err(err) => Err(err.kind()),
            }
        };

        assert_eq!(strategy(&[]), Ok(None));
        assert_eq!(strategy(&["--recursive"]), Ok(Some(DfsStrategy::Recursive)));
        assert_eq!(strategy(&["--iterative"]), Ok(Some(DfsStrategy::Iterative)));
        assert_eq!(
            strategy(&["--iterative", "--recursive"]),
            Err(clap::error::ErrorKind::ArgumentConflict)
        );
    }
}
