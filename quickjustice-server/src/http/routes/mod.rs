//! Route handlers organized by resource

pub mod health;
pub mod clients;
pub mod lawyers;
pub mod cases;
pub mod receipts;
