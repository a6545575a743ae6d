//! Lawyer create and read shapes

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Fields a caller supplies to register a lawyer
#[derive(Debug, Clone, Deserialize)]
pub struct LawyerCreate {
    pub names: String,
    pub lastnames: String,
    /// Specialty, e.g. "penal" or "civil"
    #[serde(default)]
    pub field: Option<String>,
    pub email: String,
}

/// Lawyer record as stored
///
/// `num_cases` is maintained by case creation. `available` is stored and
/// returned but no operation changes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Lawyer {
    pub id: Uuid,
    pub names: String,
    pub lastnames: String,
    pub field: Option<String>,
    pub email: String,
    pub num_cases: i32,
    pub available: bool,
}
