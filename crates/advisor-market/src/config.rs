//! Configuration for market data access

use crate::error::{MarketError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Default Alpha Vantage MCP endpoint
pub const DEFAULT_MCP_URL: &str = "https://mcp.alphavantage.co/mcp";

/// Configuration for market data operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Serve canned demo data instead of calling remote tools
    pub demo_mode: bool,

    /// Alpha Vantage API key (optional; tools fail when invoked without it)
    pub alpha_vantage_api_key: Option<String>,

    /// Alpha Vantage MCP server endpoint
    pub mcp_url: String,

    /// Request timeout duration
    pub request_timeout: Duration,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            demo_mode: false,
            alpha_vantage_api_key: None,
            mcp_url: DEFAULT_MCP_URL.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl MarketConfig {
    /// Load configuration from the environment
    ///
    /// Reads `ALPHA_VANTAGE_API_KEY` and `DEMO_MODE`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("ALPHA_VANTAGE_API_KEY") {
            if !key.is_empty() {
                config.alpha_vantage_api_key = Some(key);
            }
        }
        if let Ok(demo) = std::env::var("DEMO_MODE") {
            config.demo_mode = matches!(demo.as_str(), "true" | "1");
        }
        config
    }

    /// Set the API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.alpha_vantage_api_key = Some(key.into());
        self
    }

    /// Enable or disable demo mode
    pub fn with_demo_mode(mut self, demo_mode: bool) -> Self {
        self.demo_mode = demo_mode;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.mcp_url).map_err(|e| {
            MarketError::ConfigError(format!("invalid MCP URL '{}': {}", self.mcp_url, e))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MarketConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.demo_mode);
        assert!(config.alpha_vantage_api_key.is_none());
    }

    #[test]
    fn test_invalid_mcp_url() {
        let config = MarketConfig {
            mcp_url: "not a url".to_string(),
            ..MarketConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_methods() {
        let config = MarketConfig::default()
            .with_api_key("test-key")
            .with_demo_mode(true);
        assert_eq!(config.alpha_vantage_api_key.as_deref(), Some("test-key"));
        assert!(config.demo_mode);
    }
}
