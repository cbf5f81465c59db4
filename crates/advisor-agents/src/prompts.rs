//! Instruction templates for the advisory sub-agents
//!
//! Templates are minijinja sources rendered with the user's ticker and the
//! accumulated state outputs. Each sub-agent reads the keys it depends on
//! and writes exactly one output key.

use crate::error::Result;
use minijinja::Environment;

/// Template name for the data analyst
pub const DATA_ANALYST: &str = "data_analyst";
/// Template name for the trading analyst
pub const TRADING_ANALYST: &str = "trading_analyst";
/// Template name for the execution analyst
pub const EXECUTION_ANALYST: &str = "execution_analyst";
/// Template name for the risk analyst
pub const RISK_ANALYST: &str = "risk_analyst";
/// Template name for the summary agent
pub const SUMMARY: &str = "summary";

const DATA_ANALYST_TEMPLATE: &str = r"Agent Role: data_analyst

Overall Goal: Generate a comprehensive and timely market analysis report for
the provided ticker, including live or near-real-time stock price data,
company fundamentals, and market intelligence, synthesized into a structured
report.

provided_ticker: {{ ticker }}

Tool Usage (CRITICAL - minimize API calls): use ONLY the two required Alpha
Vantage tools unless explicitly asked for more:
1. GLOBAL_QUOTE for the current price, change, volume, and previous close.
2. COMPANY_OVERVIEW for market cap, P/E, EPS, 52-week range, sector,
   industry, dividend yield, and the business description.

If demo mode is enabled, do not call any tools; return the canned demo
report for the ticker instead.

Output: a Market Analysis Report with three sections - Current Market Data,
Company Fundamentals, and an Executive Summary of five bullet points.";

const TRADING_ANALYST_TEMPLATE: &str = r"Agent Role: trading_analyst

Overall Goal: Conceptualize at least five distinct trading strategies from
the market analysis below, then identify the TOP 2 with the highest expected
returns. For the top 2, present expected returns for a $1,000 USD initial
investment under conservative, moderate, and aggressive scenarios. Each
strategy must state entry conditions, exit conditions, and alignment with
the user's risk attitude ({{ user_risk_attitude }}) and investment period
({{ user_investment_period }}).

Draw on established principles: momentum, value, growth, mean reversion,
trend following, sector rotation, and dividend strategies.

Required input - market analysis (from state key market_data_analysis_output):
{% if market_data_analysis_output %}{{ market_data_analysis_output }}{% else %}
Error: The foundational market analysis data is missing. Halt strategy
generation and report that the Market Data Analysis step must run first.
{% endif %}";

const EXECUTION_ANALYST_TEMPLATE: &str = r"Agent Role: execution_analyst

Overall Goal: Define a detailed execution plan for the TOP 2 proposed
strategies: order types, position sizing for a $1,000 USD investment,
timing windows, slippage expectations, and benchmark (e.g. VWAP) where
relevant. Respect the user's execution preferences when stated.

Required input - proposed strategies (from state key
proposed_trading_strategies_output):
{% if proposed_trading_strategies_output %}{{ proposed_trading_strategies_output }}{% else %}
Error: The strategy proposals are missing. Halt execution planning and
report that the Trading Strategy step must run first.
{% endif %}";

const RISK_ANALYST_TEMPLATE: &str = r"Agent Role: risk_analyst

Objective: Generate a detailed, reasoned risk analysis organized
STRATEGY-BY-STRATEGY for the TOP 2 recommended strategies and their
execution plans, tailored to the user's risk attitude
({{ user_risk_attitude }}) and investment period
({{ user_investment_period }}). Open with a comparative risk overview table
(overall risk level, max drawdown risk, liquidity risk, volatility
exposure, complexity), then detail market, liquidity, and execution risks
per strategy with probability assessments and actionable mitigations.

Inputs (strictly provided; do not solicit more from the user):

Proposed strategies:
{{ proposed_trading_strategies_output }}

Execution plan:
{{ execution_plan_output }}";

const SUMMARY_TEMPLATE: &str = r"Agent Role: summary_agent

Goal: Produce a concise executive summary of the full advisory run for
{{ ticker }}, in Markdown, covering the market picture, the two recommended
strategies with expected returns, the execution approach, and the key risks
with mitigations. Close with a reminder that this is educational analysis,
not financial advice.

Market analysis:
{{ market_data_analysis_output }}

Strategies:
{{ proposed_trading_strategies_output }}

Execution plan:
{{ execution_plan_output }}

Risk assessment:
{{ final_risk_assessment_output }}";

/// Build the template environment for all sub-agents
pub fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template(DATA_ANALYST, DATA_ANALYST_TEMPLATE)?;
    env.add_template(TRADING_ANALYST, TRADING_ANALYST_TEMPLATE)?;
    env.add_template(EXECUTION_ANALYST, EXECUTION_ANALYST_TEMPLATE)?;
    env.add_template(RISK_ANALYST, RISK_ANALYST_TEMPLATE)?;
    env.add_template(SUMMARY, SUMMARY_TEMPLATE)?;
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_all_templates_parse() {
        let env = environment().expect("templates parse");
        for name in [
            DATA_ANALYST,
            TRADING_ANALYST,
            EXECUTION_ANALYST,
            RISK_ANALYST,
            SUMMARY,
        ] {
            assert!(env.get_template(name).is_ok(), "missing template {name}");
        }
    }

    #[test]
    fn test_data_analyst_renders_ticker() {
        let env = environment().expect("templates parse");
        let rendered = env
            .get_template(DATA_ANALYST)
            .expect("template exists")
            .render(context! { ticker => "MSFT" })
            .expect("renders");
        assert!(rendered.contains("provided_ticker: MSFT"));
    }

    #[test]
    fn test_trading_analyst_missing_input_renders_error() {
        let env = environment().expect("templates parse");
        let rendered = env
            .get_template(TRADING_ANALYST)
            .expect("template exists")
            .render(context! {
                user_risk_attitude => "moderate",
                user_investment_period => "medium-term",
                market_data_analysis_output => "",
            })
            .expect("renders");
        assert!(rendered.contains("market analysis data is missing"));
    }
}
