//! Lifecycle of the local store: open, schema initialization, reset, and the
//! readiness gate every repository call goes through.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use diesel::connection::SimpleConnection;
use diesel::SqliteConnection;
use log::{error, info, warn};
use tokio::task;

use receipt_tracker_core::errors::{DatabaseError, Error, Result};

use super::write_actor::{spawn_writer, WriteHandle};
use super::{create_pool, get_connection, init, run_migrations, DbPool};
use crate::config::StorageConfig;
use crate::errors::IntoCore;

// Children before parents so cascading deletes never fire on the way down.
const DROP_ALL_TABLES: &str = "
    DROP TABLE IF EXISTS items;
    DROP TABLE IF EXISTS receipts;
    DROP TABLE IF EXISTS category_budgets;
    DROP TABLE IF EXISTS monthly_budgets;
    DROP TABLE IF EXISTS incomes;
    DROP TABLE IF EXISTS __diesel_schema_migrations;
";

/// Handle to the local store.
///
/// Cloning is cheap; clones share the pool, the writer and the readiness flag.
/// Dropping the last clone closes the pool and stops the writer.
#[derive(Clone)]
pub struct Database {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    ready: Arc<AtomicBool>,
    db_path: String,
}

impl Database {
    /// Opens (creating if needed) the database file. Must be called from
    /// within a Tokio runtime.
    ///
    /// The store is not usable until [`Database::initialize`] has completed.
    pub fn open(config: &StorageConfig) -> Result<Self> {
        let db_path = init(config)?;
        let pool = create_pool(&db_path, config)?;
        let writer = spawn_writer(&pool, config.writer_queue_capacity)?;
        info!("Opened receipt store at {}", db_path);

        Ok(Database {
            pool,
            writer,
            ready: Arc::new(AtomicBool::new(false)),
            db_path,
        })
    }

    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Creates any missing tables and indexes. Safe to call repeatedly.
    pub async fn initialize(&self) -> Result<()> {
        info!("Initializing schema at {}", self.db_path);
        let applied = self
            .writer
            .exec(run_migrations)
            .await
            .map_err(into_init_failure)?;
        self.ready.store(true, Ordering::Release);
        info!("Schema ready ({} migrations applied)", applied.len());
        Ok(())
    }

    /// Drops every table and recreates the schema in one transaction.
    ///
    /// Works on a store that was never initialized and leaves it ready.
    /// On failure the previous contents are kept.
    pub async fn reset(&self) -> Result<()> {
        warn!("Resetting all data at {}", self.db_path);
        self.writer
            .exec(|conn| {
                conn.batch_execute(DROP_ALL_TABLES).into_core()?;
                run_migrations(conn)
            })
            .await
            .map_err(into_init_failure)?;
        self.ready.store(true, Ordering::Release);
        info!("Store reset complete");
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn ensure_ready(&self) -> Result<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(DatabaseError::NotReady.into())
        }
    }

    /// Runs a read on a pooled connection off the async executor.
    pub async fn read<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        self.ensure_ready()?;
        let pool = Arc::clone(&self.pool);
        task::spawn_blocking(move || {
            let mut conn = get_connection(&pool)?;
            f(&mut *conn)
        })
        .await
        .map_err(|e| DatabaseError::Internal(format!("Read task failed: {}", e)))?
    }

    /// Runs a write on the serialized writer inside `BEGIN IMMEDIATE`.
    pub async fn write<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        self.ensure_ready()?;
        self.writer.exec(f).await
    }
}

fn into_init_failure(err: Error) -> Error {
    error!("Schema setup failed: {}", err);
    if err.is_init_failure() {
        err
    } else {
        DatabaseError::InitFailed(err.to_string()).into()
    }
}
