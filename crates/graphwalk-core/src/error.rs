//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage or configuration error (bad flags, algorithm/graph mismatch)
//! - 3: Data error (unknown vertex, unknown dataset)
//!
//! An unreachable target and a negative cycle are *results*, not errors; they
//! are reported through the algorithm result records.

mod macros;

use thiserror::Error;

use crate::graph::VertexId;

/// Exit codes for the graphwalk CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage or configuration error (2)
    Usage = 2,
    /// Data error - unknown vertex or dataset (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphwalk operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage / configuration errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("{algorithm}: {reason}")]
    Configuration { algorithm: String, reason: String },

    #[error("{algorithm} requires non-negative weights, found edge {from} -> {to} with weight {weight}")]
    NegativeWeight {
        algorithm: String,
        from: VertexId,
        to: VertexId,
        weight: f64,
    },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: VertexId },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create a configuration error for an algorithm/graph mismatch
    pub fn configuration(algorithm: &str, reason: impl std::fmt::Display) -> Self {
        GraphError::Configuration {
            algorithm: algorithm.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::Configuration { .. }
            | GraphError::NegativeWeight { .. }
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::VertexNotFound { .. } | GraphError::NotFound { .. } => ExitCode::Data,

            GraphError::Io(_) | GraphError::Json(_) | GraphError::Toml(_) | GraphError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Configuration { .. } => "configuration",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::NotFound { .. } => "not_found",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Whether this error is a contract violation between the caller and an
    /// algorithm (as opposed to bad input data or an I/O failure)
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GraphError::Configuration { .. } | GraphError::NegativeWeight { .. }
        )
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;
