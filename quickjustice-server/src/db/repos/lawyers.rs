//! Lawyer repository
//!
//! `num_cases` is only ever changed by [`super::CaseRepo::create`].

use sqlx::PgPool;
use uuid::Uuid;

use super::{DbError, Resource};
use crate::models::{Lawyer, LawyerCreate};

/// Lawyer repository
pub struct LawyerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> LawyerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a lawyer with no cases, available.
    ///
    /// Returns `DbError::Conflict` when the email is already taken.
    pub async fn create(&self, new: LawyerCreate) -> Result<Lawyer, DbError> {
        let lawyer: Lawyer = sqlx::query_as(
            r#"
            INSERT INTO lawyers (id, names, lastnames, field, email, num_cases, available)
            VALUES ($1, $2, $3, $4, $5, 0, TRUE)
            RETURNING id, names, lastnames, field, email, num_cases, available
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.names)
        .bind(&new.lastnames)
        .bind(new.field.as_deref())
        .bind(&new.email)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_write(e, Resource::Lawyer))?;

        tracing::debug!(lawyer_id = %lawyer.id, "lawyer created");
        Ok(lawyer)
    }

    /// List all lawyers by (lastnames, names).
    pub async fn list(&self) -> Result<Vec<Lawyer>, DbError> {
        let lawyers: Vec<Lawyer> = sqlx::query_as(
            r#"
            SELECT id, names, lastnames, field, email, num_cases, available
            FROM lawyers
            ORDER BY lastnames, names
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(lawyers)
    }

    /// Get a single lawyer by ID.
    pub async fn get(&self, id: Uuid) -> Result<Lawyer, DbError> {
        let lawyer: Lawyer = sqlx::query_as(
            r#"
            SELECT id, names, lastnames, field, email, num_cases, available
            FROM lawyers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: Resource::Lawyer,
            id: id.to_string(),
        })?;

        Ok(lawyer)
    }
}
