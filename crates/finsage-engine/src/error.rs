//! Error types for the response engine

use thiserror::Error;

/// Response engine specific errors
///
/// The engine is designed so that almost nothing fails: lookups fall back,
/// enum branches are total, and the provider contract is infallible. What
/// remains is boundary validation and lock health.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Caller-supplied input violated the boundary contract
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Conversation history became inaccessible
    #[error("History error: {0}")]
    HistoryError(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidInput("input exceeds 16384 bytes".to_string());
        assert_eq!(err.to_string(), "Invalid input: input exceeds 16384 bytes");

        let err = EngineError::ConfigError("latency_min exceeds latency_max".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: latency_min exceeds latency_max"
        );
    }
}
