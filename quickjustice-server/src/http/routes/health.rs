//! Liveness endpoint
//!
//! Answers without touching the database, so a load balancer can tell a
//! running process from a reachable store.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Collections served by this API
const COLLECTIONS: [&str; 4] = ["clients", "lawyers", "cases", "receipts"];

/// Liveness payload
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub collections: [&'static str; 4],
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        collections: COLLECTIONS,
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
