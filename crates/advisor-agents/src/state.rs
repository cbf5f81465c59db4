//! Shared session state
//!
//! Each sub-agent writes its output under a well-known key and later agents
//! read what they need. The map is owned by one coordinator run; nothing is
//! shared across runs.

use crate::error::{AgentError, Result};
use std::collections::HashMap;

/// Well-known state keys written by the advisory pipeline
pub mod keys {
    /// Market analysis report from the data analyst
    pub const MARKET_DATA_ANALYSIS: &str = "market_data_analysis_output";
    /// Strategy proposals from the trading analyst
    pub const PROPOSED_TRADING_STRATEGIES: &str = "proposed_trading_strategies_output";
    /// Execution plan from the execution analyst
    pub const EXECUTION_PLAN: &str = "execution_plan_output";
    /// Risk assessment from the risk analyst
    pub const FINAL_RISK_ASSESSMENT: &str = "final_risk_assessment_output";
    /// Executive summary from the summary agent
    pub const EXECUTIVE_SUMMARY: &str = "executive_summary_output";
    /// Terminal value returned to the caller
    pub const FINANCIAL_COORDINATOR: &str = "financial_coordinator_output";
}

/// Key-value state propagated through a pipeline run
#[derive(Debug, Clone, Default)]
pub struct StateMap {
    data: HashMap<String, String>,
}

impl StateMap {
    /// Create an empty state map
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a value under a key, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    /// Read a value if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Read a value, failing if the key was never written
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| AgentError::MissingState(key.to_string()))
    }

    /// Number of keys written
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when no key has been written yet
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut state = StateMap::new();
        assert!(state.is_empty());
        state.insert(keys::MARKET_DATA_ANALYSIS, "report");
        assert_eq!(state.get(keys::MARKET_DATA_ANALYSIS), Some("report"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_require_missing_key() {
        let state = StateMap::new();
        let err = state.require(keys::EXECUTIVE_SUMMARY).expect_err("missing");
        assert!(matches!(err, AgentError::MissingState(_)));
    }
}
