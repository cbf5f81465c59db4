//! Alpha Vantage MCP connection
//!
//! The connection is constructed explicitly at process start and handed to
//! whichever component needs it; there is no hidden global. When no API key
//! is configured, construction still succeeds with a placeholder so startup
//! does not abort, and tool invocations fail only when attempted.
//!
//! Speaks JSON-RPC 2.0 over HTTP POST; only `tools/list` and `tools/call`
//! are used. Failures are first-attempt-terminal: no retry logic.

use crate::config::MarketConfig;
use crate::error::{MarketError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

/// MCP tool definition (from tools/list)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpToolDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// MCP tool call result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpToolResult {
    pub content: Vec<McpContent>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "isError")]
    pub is_error: Option<bool>,
}

/// MCP content block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum McpContent {
    Text {
        text: String,
    },
    Resource {
        uri: String,
        #[serde(skip_serializing_if = "Option::is_none", rename = "mimeType")]
        mime_type: Option<String>,
    },
}

impl McpToolResult {
    /// Concatenated text content of the result
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|c| match c {
                McpContent::Text { text } => Some(text.as_str()),
                McpContent::Resource { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone)]
enum ConnectionState {
    Connected {
        client: reqwest::Client,
        url: String,
        request_id: Arc<AtomicU64>,
    },
    /// Stand-in used when no API key is configured
    Placeholder,
}

/// Handle to the Alpha Vantage MCP server
#[derive(Debug, Clone)]
pub struct AlphaVantageMcp {
    state: ConnectionState,
}

impl AlphaVantageMcp {
    /// Build a connection from configuration, requiring an API key
    pub fn connect(config: &MarketConfig) -> Result<Self> {
        config.validate()?;
        let api_key = config.alpha_vantage_api_key.as_deref().ok_or_else(|| {
            MarketError::ConfigError("ALPHA_VANTAGE_API_KEY is required".to_string())
        })?;
        Ok(Self::with_endpoint(
            &config.mcp_url,
            api_key,
            config.request_timeout,
        ))
    }

    /// Build a connection from configuration, substituting a placeholder
    /// when the API key is missing instead of failing startup
    pub fn from_config(config: &MarketConfig) -> Self {
        match Self::connect(config) {
            Ok(connection) => connection,
            Err(e) => {
                warn!(
                    "Alpha Vantage MCP unavailable ({e}); tool calls will fail when attempted"
                );
                Self {
                    state: ConnectionState::Placeholder,
                }
            }
        }
    }

    fn with_endpoint(mcp_url: &str, api_key: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            state: ConnectionState::Connected {
                client,
                url: format!("{mcp_url}?apikey={api_key}"),
                request_id: Arc::new(AtomicU64::new(0)),
            },
        }
    }

    /// Whether a real endpoint is configured
    pub fn is_connected(&self) -> bool {
        matches!(self.state, ConnectionState::Connected { .. })
    }

    /// List the tools the server exposes
    pub async fn list_tools(&self) -> Result<Vec<McpToolDefinition>> {
        let result = self.send_request("tools/list", Value::Null).await?;
        let tools = result.get("tools").cloned().unwrap_or(Value::Null);
        Ok(serde_json::from_value(tools)?)
    }

    /// Invoke a named tool with JSON arguments
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<McpToolResult> {
        let params = serde_json::json!({
            "name": name,
            "arguments": arguments,
        });
        let result = self.send_request("tools/call", params).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Send a JSON-RPC request over HTTP
    async fn send_request(&self, method: &str, params: Value) -> Result<Value> {
        let ConnectionState::Connected {
            client,
            url,
            request_id,
        } = &self.state
        else {
            return Err(MarketError::NotConnected);
        };

        let id = request_id.fetch_add(1, Ordering::Relaxed) + 1;
        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        debug!("Sending MCP request: {method}");

        let response = client.post(url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(MarketError::McpError(format!(
                "HTTP {} for {}",
                response.status(),
                method
            )));
        }

        let body: Value = response.json().await?;
        if let Some(error) = body.get("error") {
            return Err(MarketError::McpError(error.to_string()));
        }

        Ok(body.get("result").cloned().unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_yields_placeholder() {
        let config = MarketConfig::default();
        let connection = AlphaVantageMcp::from_config(&config);
        assert!(!connection.is_connected());
    }

    #[test]
    fn test_connect_requires_key() {
        let config = MarketConfig::default();
        assert!(AlphaVantageMcp::connect(&config).is_err());

        let config = config.with_api_key("demo-key");
        let connection = AlphaVantageMcp::connect(&config).expect("connects");
        assert!(connection.is_connected());
    }

    #[tokio::test]
    async fn test_placeholder_fails_only_when_invoked() {
        let connection = AlphaVantageMcp::from_config(&MarketConfig::default());
        let err = connection
            .call_tool("GLOBAL_QUOTE", serde_json::json!({"symbol": "AAPL"}))
            .await
            .expect_err("placeholder must fail on use");
        assert!(matches!(err, MarketError::NotConnected));
    }

    #[test]
    fn test_tool_result_text_concatenation() {
        let result = McpToolResult {
            content: vec![
                McpContent::Text {
                    text: "line one".to_string(),
                },
                McpContent::Resource {
                    uri: "resource://x".to_string(),
                    mime_type: None,
                },
                McpContent::Text {
                    text: "line two".to_string(),
                },
            ],
            is_error: None,
        };
        assert_eq!(result.text(), "line one\nline two");
    }
}
