//! Repository implementations for database access
//!
//! One repository per table. Each borrows the pool and returns typed rows
//! or a classified [`DbError`].

pub mod error;
pub mod clients;
pub mod lawyers;
pub mod cases;
pub mod receipts;

pub use error::{DbError, Resource};
pub use clients::ClientRepo;
pub use lawyers::LawyerRepo;
pub use cases::CaseRepo;
pub use receipts::ReceiptRepo;
