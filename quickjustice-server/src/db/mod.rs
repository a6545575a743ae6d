//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool, one pooled connection per request
//! - Positional parameters only, never interpolated SQL
//! - Database constraints are the source of truth; existence pre-checks only
//!   produce friendlier errors
//! - Transactions for multi-step operations

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_lazy};
pub use repos::*;
