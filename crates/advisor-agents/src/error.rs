//! Error types for agent orchestration

use thiserror::Error;

/// Orchestration specific errors
#[derive(Debug, Error)]
pub enum AgentError {
    /// Instruction template failed to parse or render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Model invocation failed
    #[error("Model error: {0}")]
    Model(String),

    /// A required state key was never written
    #[error("Missing state key: {0}")]
    MissingState(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for orchestration operations
pub type Result<T> = std::result::Result<T, AgentError>;

impl From<advisor_market::MarketError> for AgentError {
    fn from(err: advisor_market::MarketError) -> Self {
        AgentError::Model(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AgentError::MissingState("executive_summary_output".to_string());
        assert_eq!(
            err.to_string(),
            "Missing state key: executive_summary_output"
        );
    }
}
