//! Error types for market data operations

use thiserror::Error;

/// Market data specific errors
#[derive(Debug, Error)]
pub enum MarketError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Tool connection was constructed as a placeholder (no API key)
    #[error("Alpha Vantage MCP connection is not configured; set ALPHA_VANTAGE_API_KEY")]
    NotConnected,

    /// MCP server returned an error payload
    #[error("MCP error: {0}")]
    McpError(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for market operations
pub type Result<T> = std::result::Result<T, MarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MarketError::McpError("bad request".to_string());
        assert_eq!(err.to_string(), "MCP error: bad request");

        let err = MarketError::NotConnected;
        assert!(err.to_string().contains("ALPHA_VANTAGE_API_KEY"));
    }
}
