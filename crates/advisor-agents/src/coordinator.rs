//! Sequential advisory pipeline
//!
//! The coordinator runs the five sub-agents in a fixed order. Each step
//! renders its instruction from the accumulated state, invokes the model
//! client, and writes its output key. Any step error aborts the run; there
//! is no retry.

use crate::error::Result;
use crate::model::{AgentRequest, ModelClient};
use crate::prompts;
use crate::state::{StateMap, keys};
use minijinja::{Environment, context};
use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::info;

/// One step of the advisory pipeline
#[derive(Debug, Clone, Copy)]
pub struct AgentSpec {
    /// Sub-agent and template name
    pub name: &'static str,
    /// State key the step writes
    pub output_key: &'static str,
}

/// The fixed sub-agent sequence
pub const PIPELINE: &[AgentSpec] = &[
    AgentSpec {
        name: prompts::DATA_ANALYST,
        output_key: keys::MARKET_DATA_ANALYSIS,
    },
    AgentSpec {
        name: prompts::TRADING_ANALYST,
        output_key: keys::PROPOSED_TRADING_STRATEGIES,
    },
    AgentSpec {
        name: prompts::EXECUTION_ANALYST,
        output_key: keys::EXECUTION_PLAN,
    },
    AgentSpec {
        name: prompts::RISK_ANALYST,
        output_key: keys::FINAL_RISK_ASSESSMENT,
    },
    AgentSpec {
        name: prompts::SUMMARY,
        output_key: keys::EXECUTIVE_SUMMARY,
    },
];

/// User profile fed into the instruction templates
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    pub user_risk_attitude: String,
    pub user_investment_period: String,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            user_risk_attitude: "moderate".to_string(),
            user_investment_period: "medium-term".to_string(),
        }
    }
}

/// Coordinates the sub-agents and owns the rendered template environment
pub struct FinancialCoordinator {
    model: Arc<dyn ModelClient>,
    env: Environment<'static>,
    config: CoordinatorConfig,
}

impl FinancialCoordinator {
    /// Create a coordinator over a model client
    pub fn new(model: Arc<dyn ModelClient>) -> Result<Self> {
        Self::with_config(model, CoordinatorConfig::default())
    }

    /// Create a coordinator with an explicit user profile
    pub fn with_config(model: Arc<dyn ModelClient>, config: CoordinatorConfig) -> Result<Self> {
        Ok(Self {
            model,
            env: prompts::environment()?,
            config,
        })
    }

    /// Run the full pipeline for a user query, returning the final state
    pub async fn run(&self, query: &str) -> Result<StateMap> {
        let ticker = extract_ticker(query);
        info!(ticker = %ticker, "starting advisory pipeline");

        let mut state = StateMap::new();

        for step in PIPELINE {
            let instruction = self.render_instruction(step.name, query, &ticker, &state)?;
            info!(agent = step.name, "running sub-agent");

            let output = self
                .model
                .complete(AgentRequest {
                    agent_name: step.name.to_string(),
                    instruction,
                })
                .await?;
            state.insert(step.output_key, output);
        }

        let summary = state.require(keys::EXECUTIVE_SUMMARY)?.to_string();
        state.insert(keys::FINANCIAL_COORDINATOR, summary);

        Ok(state)
    }

    /// Run the pipeline and return only the terminal state value
    pub async fn run_query(&self, query: &str) -> Result<String> {
        let state = self.run(query).await?;
        Ok(state.require(keys::FINANCIAL_COORDINATOR)?.to_string())
    }

    fn render_instruction(
        &self,
        template: &str,
        query: &str,
        ticker: &str,
        state: &StateMap,
    ) -> Result<String> {
        let rendered = self.env.get_template(template)?.render(context! {
            query => query,
            ticker => ticker,
            user_risk_attitude => self.config.user_risk_attitude,
            user_investment_period => self.config.user_investment_period,
            market_data_analysis_output => state.get(keys::MARKET_DATA_ANALYSIS).unwrap_or(""),
            proposed_trading_strategies_output =>
                state.get(keys::PROPOSED_TRADING_STRATEGIES).unwrap_or(""),
            execution_plan_output => state.get(keys::EXECUTION_PLAN).unwrap_or(""),
            final_risk_assessment_output =>
                state.get(keys::FINAL_RISK_ASSESSMENT).unwrap_or(""),
        })?;
        Ok(rendered)
    }
}

static TICKER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,5}\b").expect("valid pattern"));

/// First all-caps token of 2-5 letters in the query, defaulting to AAPL
pub fn extract_ticker(query: &str) -> String {
    TICKER_TOKEN
        .find(query)
        .map_or_else(|| "AAPL".to_string(), |m| m.as_str().to_string())
}
