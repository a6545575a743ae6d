//! Case create and read shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// State assigned to a case when the caller does not pick one
pub const DEFAULT_CASE_STATE: &str = "open";

/// Priority assigned to a case when the caller does not pick one
pub const DEFAULT_CASE_PRIORITY: i32 = 3;

fn default_state() -> String {
    DEFAULT_CASE_STATE.to_owned()
}

fn default_priority() -> i32 {
    DEFAULT_CASE_PRIORITY
}

/// Fields a caller supplies to open a case
///
/// `lawyer_id` and `client_id` must be UUIDs; whether they exist is checked
/// when the case is stored.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_state")]
    pub state: String,
    #[serde(default = "default_priority")]
    pub priority: i32,
    pub lawyer_id: Uuid,
    pub client_id: Uuid,
}

/// Case record as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Case {
    pub id: Uuid,
    pub lawyer_id: Uuid,
    pub client_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub state: String,
    pub priority: i32,
    pub date_created: DateTime<Utc>,
    pub date_updated: Option<DateTime<Utc>>,
}

/// Case with the names of its client and lawyer, for list display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CaseWithNames {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub case: Case,
    pub client_names: String,
    pub client_lastname: String,
    pub lawyer_names: String,
    pub lawyer_lastnames: String,
}
