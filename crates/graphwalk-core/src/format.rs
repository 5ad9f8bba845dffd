//! Output format handling for graphwalk
//!
//! Supports two output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Output format for graphwalk commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(GraphError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a distance for human output (`∞` for unreachable)
pub fn format_distance(distance: f64) -> String {
    if distance.is_infinite() && distance > 0.0 {
        "∞".to_string()
    } else {
        format_weight(distance)
    }
}

/// Render a weight for humans: integral values without `.0`, others with
/// at most six decimals and no trailing zeros
pub fn format_weight(weight: f64) -> String {
    if !weight.is_finite() {
        return format!("{}", weight);
    }
    if weight.fract() == 0.0 && weight.abs() < 1e15 {
        return format!("{}", weight as i64);
    }

    let fixed = format!("{:.6}", weight);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
