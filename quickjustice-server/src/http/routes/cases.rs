//! Case endpoints
//!
//! Creating a case also bumps the assigned lawyer's case count; both happen
//! in one transaction inside [`CaseRepo::create`].

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::CaseRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidUuid};
use crate::http::server::AppState;
use crate::models::{Case, CaseCreate, CaseWithNames};

/// POST /cases/ - open a case for an existing lawyer and client
async fn create_case(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CaseCreate>,
) -> Result<Json<Case>, ApiError> {
    let case = CaseRepo::new(&state.pool).create(req).await?;
    Ok(Json(case))
}

/// GET /cases/ - list cases with client and lawyer names, newest first
async fn list_cases(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CaseWithNames>>, ApiError> {
    let cases = CaseRepo::new(&state.pool).list().await?;
    Ok(Json(cases))
}

/// GET /cases/{id} - get a single case (no joined names)
async fn get_case(
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<Case>, ApiError> {
    let case = CaseRepo::new(&state.pool).get(id).await?;
    Ok(Json(case))
}

/// Case routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cases", get(list_cases).post(create_case))
        .route("/cases/", get(list_cases).post(create_case))
        .route("/cases/{id}", get(get_case))
}
