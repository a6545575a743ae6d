//! Client repository
//!
//! - create: plain INSERT; the (document_type, document_number) unique
//!   constraint decides duplicates
//! - list: ordered by last name, then names

use sqlx::PgPool;
use uuid::Uuid;

use super::{DbError, Resource};
use crate::models::{Client, ClientCreate};

/// Client repository
pub struct ClientRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ClientRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a client with a freshly generated id.
    ///
    /// Returns `DbError::Conflict` when the document is already registered.
    pub async fn create(&self, new: ClientCreate) -> Result<Client, DbError> {
        let client: Client = sqlx::query_as(
            r#"
            INSERT INTO clients (id, names, lastname, document_type, document_number, email, phone)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, names, lastname, document_type, document_number, email, phone
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.names)
        .bind(&new.lastname)
        .bind(&new.document_type)
        .bind(&new.document_number)
        .bind(new.email.as_deref())
        .bind(new.phone.as_deref())
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_write(e, Resource::Client))?;

        tracing::debug!(client_id = %client.id, "client created");
        Ok(client)
    }

    /// List all clients by (lastname, names).
    pub async fn list(&self) -> Result<Vec<Client>, DbError> {
        let clients: Vec<Client> = sqlx::query_as(
            r#"
            SELECT id, names, lastname, document_type, document_number, email, phone
            FROM clients
            ORDER BY lastname, names
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(clients)
    }

    /// Get a single client by ID.
    pub async fn get(&self, id: Uuid) -> Result<Client, DbError> {
        let client: Client = sqlx::query_as(
            r#"
            SELECT id, names, lastname, document_type, document_number, email, phone
            FROM clients
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: Resource::Client,
            id: id.to_string(),
        })?;

        Ok(client)
    }
}
