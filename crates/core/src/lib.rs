//! Receipt tracker core - domain entities, services, and traits.
//!
//! This crate contains the domain model and business rules of the receipt
//! tracker: receipts and their items, incomes, monthly and category budgets,
//! and the spending statistics computed over them. It is database-agnostic
//! and defines the repository traits implemented by the `storage-sqlite` crate.

pub mod budgets;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod incomes;
pub mod page;
pub mod receipts;
pub mod statistics;
pub mod utils;

pub use categories::Category;
pub use page::Page;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
