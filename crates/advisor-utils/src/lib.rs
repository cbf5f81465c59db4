//! Shared utilities for financial-advisor-rs
//!
//! This crate provides common functionality used across the advisor
//! workspace, currently the tracing setup every binary runs at startup.

pub mod logging;

pub use logging::init_tracing;
