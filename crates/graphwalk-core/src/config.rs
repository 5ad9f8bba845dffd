//! Algorithm configuration for graphwalk
//!
//! Configuration is optional and read from a TOML file, for example:
//!
//! ```toml
//! validate_weights = true
//! dfs_strategy = "recursive"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::DfsStrategy;

/// Settings shared by every algorithm invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlgorithmConfig {
    /// Reject negative weights in Dijkstra, Kruskal and Prim instead of
    /// silently returning wrong answers
    #[serde(default = "default_validate_weights")]
    pub validate_weights: bool,

    /// DFS flavour used when the caller does not pick one explicitly
    #[serde(default)]
    pub dfs_strategy: DfsStrategy,
}

fn default_validate_weights() -> bool {
    true
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            validate_weights: default_validate_weights(),
            dfs_strategy: DfsStrategy::default(),
        }
    }
}

impl AlgorithmConfig {
    /// Config that skips the non-negative weight precondition check
    pub fn unchecked() -> Self {
        Self {
            validate_weights: false,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GraphError::Other(format!("failed to read config {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AlgorithmConfig = toml::from_str(content)?;
        tracing::debug!(
            validate_weights = config.validate_weights,
            dfs_strategy = ?config.dfs_strategy,
            "config_loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_validates_weights() {
        let config = AlgorithmConfig::default();
        assert!(config.validate_weights);
        assert_eq!(config.dfs_strategy, DfsStrategy::Iterative);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AlgorithmConfig::from_toml("").unwrap();
        assert_eq!(config, AlgorithmConfig::default());
    }

    #[test]
    fn test_from_toml_overrides() {
        let config =
            AlgorithmConfig::from_toml("validate_weights = false\ndfs_strategy = \"recursive\"\n")
                .unwrap();
        assert!(!config.validate_weights);
        assert_eq!(config.dfs_strategy, DfsStrategy::Recursive);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = AlgorithmConfig::from_toml("max_hops = 3\n").unwrap_err();
        assert!(matches!(err, GraphError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "validate_weights = false").unwrap();

        let config = AlgorithmConfig::load(file.path()).unwrap();
        assert!(!config.validate_weights);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AlgorithmConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
