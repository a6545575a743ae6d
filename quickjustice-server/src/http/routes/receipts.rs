//! Receipt endpoints
//!
//! There is no receipt listing; receipts are fetched by id only.

use std::sync::Arc;

use axum::{extract::State, routing::{get, post}, Json, Router};

use crate::db::repos::ReceiptRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidUuid};
use crate::http::server::AppState;
use crate::models::{Receipt, ReceiptCreate};

/// POST /receipts/ - record a payment for an existing case
async fn create_receipt(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<ReceiptCreate>,
) -> Result<Json<Receipt>, ApiError> {
    let receipt = ReceiptRepo::new(&state.pool).create(req).await?;
    Ok(Json(receipt))
}

/// GET /receipts/{id}
async fn get_receipt(
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<Receipt>, ApiError> {
    let receipt = ReceiptRepo::new(&state.pool).get(id).await?;
    Ok(Json(receipt))
}

/// Receipt routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/receipts", post(create_receipt))
        .route("/receipts/", post(create_receipt))
        .route("/receipts/{id}", get(get_receipt))
}
