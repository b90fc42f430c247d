//! SQLite storage implementation for the receipt tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `receipt-tracker-core` and contains:
//! - Database lifecycle (open, schema initialization, reset, readiness)
//! - Connection pooling and the single serialized writer
//! - Diesel migrations
//! - Repository implementations for receipts, items, incomes and budgets
//! - The range queries behind the spending statistics
//!
//! # Architecture
//!
//! ```text
//!        core (domain, services)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod config;
pub mod context;
pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod budgets;
pub mod incomes;
pub mod receipts;
pub mod statistics;

pub use config::StorageConfig;
pub use context::ServiceContext;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, Database, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from receipt-tracker-core for convenience
pub use receipt_tracker_core::errors::{DatabaseError, Error, Result};
