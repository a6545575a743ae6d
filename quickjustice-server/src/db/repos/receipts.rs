//! Receipt repository
//!
//! `amount` may be stored as `numeric` or `double precision`, and `date` as
//! `timestamp` or `timestamptz`; reads cast both to the types the model
//! decodes.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::cases::{ensure_exists, Referenced};
use super::{DbError, Resource};
use crate::models::{Receipt, ReceiptCreate};

/// Receipt repository
pub struct ReceiptRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReceiptRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a payment against an existing case.
    ///
    /// `file_path` is never set here.
    pub async fn create(&self, new: ReceiptCreate) -> Result<Receipt, DbError> {
        let mut tx = self.pool.begin().await?;

        ensure_exists(&mut tx, Referenced::Case, new.case_id).await?;

        let receipt: Receipt = sqlx::query_as(
            r#"
            INSERT INTO receipts (id, case_id, amount, ruc_enterprise, ruc_client, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, case_id, amount::float8 AS amount, ruc_enterprise, ruc_client,
                      date::timestamptz AS date, file_path
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.case_id)
        .bind(new.amount)
        .bind(new.ruc_enterprise.as_deref())
        .bind(new.ruc_client.as_deref())
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DbError::from_write(e, Resource::Receipt))?;

        tx.commit().await?;

        tracing::debug!(receipt_id = %receipt.id, case_id = %receipt.case_id, "receipt created");
        Ok(receipt)
    }

    /// Get a single receipt by ID.
    pub async fn get(&self, id: Uuid) -> Result<Receipt, DbError> {
        let receipt: Receipt = sqlx::query_as(
            r#"
            SELECT id, case_id, amount::float8 AS amount, ruc_enterprise, ruc_client,
                   date::timestamptz AS date, file_path
            FROM receipts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: Resource::Receipt,
            id: id.to_string(),
        })?;

        Ok(receipt)
    }
}
