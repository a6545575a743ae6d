//! Client endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::ClientRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidUuid};
use crate::http::server::AppState;
use crate::models::{Client, ClientCreate};

/// POST /clients/ - register a client
async fn create_client(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<ClientCreate>,
) -> Result<Json<Client>, ApiError> {
    let client = ClientRepo::new(&state.pool).create(req).await?;
    Ok(Json(client))
}

/// GET /clients/ - list clients by last name
async fn list_clients(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Client>>, ApiError> {
    let clients = ClientRepo::new(&state.pool).list().await?;
    Ok(Json(clients))
}

/// GET /clients/{id} - get a single client
async fn get_client(
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<Client>, ApiError> {
    let client = ClientRepo::new(&state.pool).get(id).await?;
    Ok(Json(client))
}

/// Client routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route("/clients/", get(list_clients).post(create_client))
        .route("/clients/{id}", get(get_client))
}
