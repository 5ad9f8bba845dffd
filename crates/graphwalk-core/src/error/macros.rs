//! Error macros for graphwalk

/// Macro for returning a configuration error from an algorithm entry point
#[macro_export]
macro_rules! bail_config {
    ($algorithm:expr, $reason:expr) => {
        return Err($crate::error::GraphError::configuration($algorithm, $reason))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}
