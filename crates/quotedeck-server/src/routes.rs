use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use quotedeck_core::StockQuote;

use crate::state::AppState;

/// Assemble the API router.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stocks", get(list_stocks))
        .route("/health", get(health))
}

/// Returns the current result set, refreshing it first when the staleness
/// policy demands. An upstream outage shows up as an empty array with a 200
/// status; distinguishing "no data" from "error" is the dashboard's job.
async fn list_stocks(State(state): State<Arc<AppState>>) -> Json<Vec<StockQuote>> {
    let results = state.refresher.ensure_fresh().await;
    Json(results.as_ref().clone())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
