//! Model client seam
//!
//! The LLM runtime is an external collaborator; this trait is the only
//! surface the pipeline needs from it. `DemoModelClient` produces
//! deterministic output from canned market data so the pipeline runs
//! end-to-end without any network access.

use crate::error::{AgentError, Result};
use advisor_market::demo_market_analysis;
use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

/// One completion request for a named sub-agent
#[derive(Debug, Clone)]
pub struct AgentRequest {
    /// Sub-agent name (e.g. "data_analyst")
    pub agent_name: String,
    /// Fully rendered instruction
    pub instruction: String,
}

/// Seam to the external LLM runtime
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Produce the agent's output for a rendered instruction
    async fn complete(&self, request: AgentRequest) -> Result<String>;
}

static TICKER_IN_INSTRUCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"provided_ticker:\s*([A-Z]{1,5})").expect("valid pattern"));

/// Deterministic stand-in for the LLM runtime
///
/// The data analyst step returns the demo market report for the ticker
/// named in its instruction; downstream steps return canned text derived
/// from their agent name.
#[derive(Debug, Clone, Default)]
pub struct DemoModelClient;

impl DemoModelClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ModelClient for DemoModelClient {
    async fn complete(&self, request: AgentRequest) -> Result<String> {
        match request.agent_name.as_str() {
            "data_analyst" => {
                let ticker = TICKER_IN_INSTRUCTION
                    .captures(&request.instruction)
                    .map_or("AAPL", |caps| {
                        caps.get(1).map_or("AAPL", |m| m.as_str())
                    });
                Ok(demo_market_analysis(ticker))
            }
            "trading_analyst" => Ok(
                "Proposed Trading Strategies (DEMO MODE)\n\n\
                 **Top Strategy #1: Momentum Continuation**\n\
                 Entry on confirmed trend, exit at 2x risk. Expected return on \
                 $1,000: conservative $30, moderate $60, aggressive $120.\n\n\
                 **Top Strategy #2: Value Accumulation**\n\
                 Staged entries below fair value, 12-month horizon. Expected \
                 return on $1,000: conservative $40, moderate $80, aggressive $150."
                    .to_string(),
            ),
            "execution_analyst" => Ok(
                "Execution Plan (DEMO MODE)\n\n\
                 Use limit orders 0.5% below reference price, position size \
                 $500 per strategy, review weekly. Benchmark fills against VWAP."
                    .to_string(),
            ),
            "risk_analyst" => Ok(
                "Risk Assessment (DEMO MODE)\n\n\
                 Strategy #1: medium overall risk, max drawdown risk 15%, \
                 mitigate with stop-loss at pattern low.\n\
                 Strategy #2: low overall risk, max drawdown risk 8%, mitigate \
                 with staged entries."
                    .to_string(),
            ),
            "summary" => Ok(
                "Executive Summary (DEMO MODE)\n\n\
                 Market momentum is constructive. Two strategies recommended: \
                 momentum continuation and value accumulation, both sized for a \
                 $1,000 investment with defined exits. Key risks are drawdown \
                 and liquidity; both have concrete mitigations. Educational \
                 analysis, not financial advice."
                    .to_string(),
            ),
            other => Err(AgentError::Model(format!("unknown agent: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_client_data_analyst_uses_ticker() {
        let client = DemoModelClient::new();
        let output = client
            .complete(AgentRequest {
                agent_name: "data_analyst".to_string(),
                instruction: "provided_ticker: MSFT".to_string(),
            })
            .await
            .expect("completes");
        assert!(output.contains("MSFT"));
    }

    #[tokio::test]
    async fn test_demo_client_defaults_to_aapl() {
        let client = DemoModelClient::new();
        let output = client
            .complete(AgentRequest {
                agent_name: "data_analyst".to_string(),
                instruction: "no ticker here".to_string(),
            })
            .await
            .expect("completes");
        assert!(output.contains("AAPL"));
    }

    #[tokio::test]
    async fn test_demo_client_rejects_unknown_agent() {
        let client = DemoModelClient::new();
        let err = client
            .complete(AgentRequest {
                agent_name: "mystery".to_string(),
                instruction: String::new(),
            })
            .await
            .expect_err("unknown agent");
        assert!(matches!(err, AgentError::Model(_)));
    }
}
