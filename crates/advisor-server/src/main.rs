//! HTTP endpoint for the financial advisory pipeline
//!
//! Exposes the coordinator over three routes: a health probe, a service
//! index, and `POST /query` which runs the full pipeline for a user query
//! and returns the terminal summary.

use advisor_agents::{DemoModelClient, FinancialCoordinator};
use advisor_market::{AlphaVantageMcp, MarketConfig};
use advisor_utils::init_tracing;
use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::env;
use std::sync::Arc;
use tracing::{error, info};

const SERVICE_NAME: &str = "financial-advisor";
const DEFAULT_PORT: u16 = 8000;

#[derive(Clone)]
struct AppState {
    coordinator: Arc<FinancialCoordinator>,
}

#[derive(Debug, Deserialize)]
struct QueryRequest {
    query: String,
    #[serde(default = "default_session_id")]
    session_id: String,
}

fn default_session_id() -> String {
    "default".to_string()
}

#[derive(Debug, Serialize)]
struct QueryResponse {
    result: String,
    session_id: String,
}

async fn index() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "docs": "/docs",
        "health": "/health",
        "agent_endpoint": "/query",
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, (StatusCode, Json<Value>)> {
    info!(session_id = %request.session_id, "processing query");

    match state.coordinator.run_query(&request.query).await {
        Ok(result) => Ok(Json(QueryResponse {
            result,
            session_id: request.session_id,
        })),
        Err(err) => {
            error!(error = %err, session_id = %request.session_id, "query failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": err.to_string(),
                    "message": "Failed to process query",
                })),
            ))
        }
    }
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/query", post(query))
        .with_state(state)
}

/// Set up the market data connection according to configuration
///
/// Demo mode serves canned data only, so no MCP connection is built at
/// all. Outside demo mode a missing API key surfaces a warning at startup;
/// tool calls fail only when actually invoked.
fn market_connection(config: &MarketConfig) -> Option<AlphaVantageMcp> {
    if config.demo_mode {
        info!("demo mode enabled; serving canned market data without MCP");
        return None;
    }
    Some(AlphaVantageMcp::from_config(config))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let market_config = MarketConfig::from_env();
    let _mcp = market_connection(&market_config);

    let coordinator = FinancialCoordinator::new(Arc::new(DemoModelClient::new()))
        .context("failed to build coordinator")?;
    let state = AppState {
        coordinator: Arc::new(coordinator),
    };

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(addr = %addr, "advisor server listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
