//! Domain models: create shapes, read shapes, validation errors
//!
//! Create shapes are what callers send; read shapes are full persisted rows.
//! They are decoded strictly; a body that fails to decode never
//! reaches the database.

pub mod validation;
pub mod client;
pub mod lawyer;
pub mod case;
pub mod receipt;

pub use validation::ValidationError;
pub use client::{Client, ClientCreate};
pub use lawyer::{Lawyer, LawyerCreate};
pub use case::{Case, CaseCreate, CaseWithNames};
pub use receipt::{Receipt, ReceiptCreate};
