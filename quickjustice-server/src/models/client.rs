//! Client create and read shapes

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Fields a caller supplies to register a client
#[derive(Debug, Clone, Deserialize)]
pub struct ClientCreate {
    pub names: String,
    pub lastname: String,
    pub document_type: String,
    pub document_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Client record as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub names: String,
    pub lastname: String,
    pub document_type: String,
    pub document_number: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}
