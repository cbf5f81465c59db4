//! Market data access for the financial advisor
//!
//! Provides two data paths:
//!
//! - Canned demo data ([`demo`]) so the system runs without API calls
//! - A remote Alpha Vantage MCP connection ([`mcp`]) constructed explicitly
//!   at startup and passed down to whichever component needs it

pub mod config;
pub mod demo;
pub mod error;
pub mod mcp;

// Re-export main types for convenience
pub use config::MarketConfig;
pub use demo::{DemoQuote, demo_market_analysis, demo_quote};
pub use error::{MarketError, Result};
pub use mcp::{AlphaVantageMcp, McpContent, McpToolDefinition, McpToolResult};
