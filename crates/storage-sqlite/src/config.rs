use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_DB_FILE: &str = "receipts.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 30_000;
pub const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_WRITER_QUEUE_CAPACITY: usize = 1024;

/// Settings for opening the local store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageConfig {
    pub db_path: PathBuf,
    /// Upper bound of the read pool. The writer holds one of these.
    pub max_connections: u32,
    pub busy_timeout_ms: u32,
    pub connection_timeout_secs: u64,
    pub writer_queue_capacity: usize,
}

impl StorageConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        StorageConfig {
            db_path: db_path.into(),
            ..Default::default()
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            connection_timeout_secs: DEFAULT_CONNECTION_TIMEOUT_SECS,
            writer_queue_capacity: DEFAULT_WRITER_QUEUE_CAPACITY,
        }
    }
}
