//! quickjustice-server: HTTP API for law firm case management
//!
//! Clients, lawyers, cases and payment receipts stored in PostgreSQL and
//! exposed as JSON over axum. The database schema is provisioned outside
//! this crate; `sql/schema.sql` at the workspace root is a reference copy.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DatabaseConfig};
pub use http::{build_router, run_server, ServerConfig};
