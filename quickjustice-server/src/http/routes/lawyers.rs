//! Lawyer endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::LawyerRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidUuid};
use crate::http::server::AppState;
use crate::models::{Lawyer, LawyerCreate};

/// POST /lawyers/ - register a lawyer
async fn create_lawyer(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<LawyerCreate>,
) -> Result<Json<Lawyer>, ApiError> {
    let lawyer = LawyerRepo::new(&state.pool).create(req).await?;
    Ok(Json(lawyer))
}

/// GET /lawyers/ - list lawyers by last names
async fn list_lawyers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Lawyer>>, ApiError> {
    let lawyers = LawyerRepo::new(&state.pool).list().await?;
    Ok(Json(lawyers))
}

/// GET /lawyers/{id}
async fn get_lawyer(
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<Lawyer>, ApiError> {
    let lawyer = LawyerRepo::new(&state.pool).get(id).await?;
    Ok(Json(lawyer))
}

/// Lawyer routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lawyers", get(list_lawyers).post(create_lawyer))
        .route("/lawyers/", get(list_lawyers).post(create_lawyer))
        .route("/lawyers/{id}", get(get_lawyer))
}
