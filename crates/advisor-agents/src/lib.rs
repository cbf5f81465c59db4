//! Advisory agent orchestration
//!
//! Wires a fixed sequence of sub-agents - data analyst, trading analyst,
//! execution analyst, risk analyst, summary - through a shared key-value
//! state. Each agent is configured by a natural-language instruction
//! template; the LLM runtime itself sits behind the [`ModelClient`] seam.

pub mod coordinator;
pub mod error;
pub mod model;
pub mod prompts;
pub mod state;

// Re-export main types for convenience
pub use coordinator::{AgentSpec, CoordinatorConfig, FinancialCoordinator, PIPELINE,
    extract_ticker};
pub use error::{AgentError, Result};
pub use model::{AgentRequest, DemoModelClient, ModelClient};
pub use state::{StateMap, keys};
