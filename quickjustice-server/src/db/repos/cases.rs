//! Case repository
//!
//! Handles case creation as one unit of work:
//! - referenced lawyer and client must exist
//! - insert the case
//! - bump the lawyer's `num_cases`
//!
//! Timestamp columns are cast to `timestamptz` on the way out so a
//! `timestamp` column decodes the same way.
//!
//! The existence checks only select a friendly error. The foreign keys on
//! `cases` still reject a reference deleted between check and insert, and
//! that violation is reported the same way.

use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::{DbError, Resource};
use crate::models::{Case, CaseCreate, CaseWithNames};

/// Case repository
pub struct CaseRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CaseRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a case and increment its lawyer's case count (atomic).
    ///
    /// Dropping the transaction on any early return rolls back the insert.
    pub async fn create(&self, new: CaseCreate) -> Result<Case, DbError> {
        let mut tx = self.pool.begin().await?;

        ensure_exists(&mut tx, Referenced::Lawyer, new.lawyer_id).await?;
        ensure_exists(&mut tx, Referenced::Client, new.client_id).await?;

        let case: Case = sqlx::query_as(
            r#"
            INSERT INTO cases (id, lawyer_id, client_id, title, description, state, priority, date_created)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, lawyer_id, client_id, title, description, state, priority,
                      date_created::timestamptz AS date_created,
                      date_updated::timestamptz AS date_updated
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.lawyer_id)
        .bind(new.client_id)
        .bind(&new.title)
        .bind(new.description.as_deref())
        .bind(&new.state)
        .bind(new.priority)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DbError::from_write(e, Resource::Case))?;

        let updated = sqlx::query("UPDATE lawyers SET num_cases = num_cases + 1 WHERE id = $1")
            .bind(new.lawyer_id)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() != 1 {
            return Err(DbError::NotFound {
                resource: Resource::Lawyer,
                id: new.lawyer_id.to_string(),
            });
        }

        tx.commit().await?;

        tracing::debug!(case_id = %case.id, lawyer_id = %case.lawyer_id, "case created");
        Ok(case)
    }

    /// List all cases with client and lawyer names, newest first.
    ///
    /// Single JOIN query (no N+1).
    pub async fn list(&self) -> Result<Vec<CaseWithNames>, DbError> {
        let cases: Vec<CaseWithNames> = sqlx::query_as(
            r#"
            SELECT
                c.id,
                c.lawyer_id,
                c.client_id,
                c.title,
                c.description,
                c.state,
                c.priority,
                c.date_created::timestamptz AS date_created,
                c.date_updated::timestamptz AS date_updated,
                cl.names AS client_names,
                cl.lastname AS client_lastname,
                l.names AS lawyer_names,
                l.lastnames AS lawyer_lastnames
            FROM cases c
            JOIN clients cl ON c.client_id = cl.id
            JOIN lawyers l ON c.lawyer_id = l.id
            ORDER BY c.date_created DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(cases)
    }

    /// Get a single case by ID.
    pub async fn get(&self, id: Uuid) -> Result<Case, DbError> {
        let case: Case = sqlx::query_as(
            r#"
            SELECT id, lawyer_id, client_id, title, description, state, priority,
                   date_created::timestamptz AS date_created,
                   date_updated::timestamptz AS date_updated
            FROM cases
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: Resource::Case,
            id: id.to_string(),
        })?;

        Ok(case)
    }
}

/// Tables other rows point at through a foreign key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Referenced {
    Lawyer,
    Client,
    Case,
}

impl Referenced {
    fn exists_query(self) -> &'static str {
        match self {
            Self::Lawyer => "SELECT EXISTS(SELECT 1 FROM lawyers WHERE id = $1)",
            Self::Client => "SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)",
            Self::Case => "SELECT EXISTS(SELECT 1 FROM cases WHERE id = $1)",
        }
    }

    fn resource(self) -> Resource {
        match self {
            Self::Lawyer => Resource::Lawyer,
            Self::Client => Resource::Client,
            Self::Case => Resource::Case,
        }
    }
}

/// Fail with `DbError::NotFound` unless a row with `id` exists in the
/// referenced table.
pub(crate) async fn ensure_exists(
    tx: &mut Transaction<'_, Postgres>,
    table: Referenced,
    id: Uuid,
) -> Result<(), DbError> {
    let exists: (bool,) = sqlx::query_as(table.exists_query())
        .bind(id)
        .fetch_one(&mut **tx)
        .await?;

    if !exists.0 {
        return Err(DbError::NotFound {
            resource: table.resource(),
            id: id.to_string(),
        });
    }

    Ok(())
}
