//! Receipt create and read shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Fields a caller supplies to record a payment
///
/// RUC values are tax ids carried as opaque strings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptCreate {
    pub amount: f64,
    #[serde(default)]
    pub ruc_enterprise: Option<String>,
    #[serde(default)]
    pub ruc_client: Option<String>,
    pub case_id: Uuid,
}

/// Receipt record as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Receipt {
    pub id: Uuid,
    pub case_id: Uuid,
    pub amount: f64,
    pub ruc_enterprise: Option<String>,
    pub ruc_client: Option<String>,
    pub date: DateTime<Utc>,
    pub file_path: Option<String>,
}
