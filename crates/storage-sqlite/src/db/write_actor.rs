use std::any::Any;

use diesel::SqliteConnection;
use log::{debug, error};
use tokio::sync::{mpsc, oneshot};

use receipt_tracker_core::errors::{DatabaseError, Error, Result};

use super::{get_connection, DbPool};
use crate::errors::StorageError;

// A write job runs against the writer's dedicated connection and reports a core Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

impl WriteHandle {
    /// Runs `job` on the writer connection inside `BEGIN IMMEDIATE`.
    ///
    /// Any error returned by the job rolls the transaction back and is handed
    /// to the caller with its kind intact.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| DatabaseError::Internal("Writer actor has stopped".to_string()))?;

        let boxed = ret_rx.await.map_err(|_| {
            DatabaseError::Internal("Writer actor dropped the reply without a result".to_string())
        })??;

        boxed.downcast::<T>().map(|v| *v).map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "Writer actor returned an unexpected result type".to_string(),
            ))
        })
    }
}

/// Spawns the single writer task. It owns one pooled connection for its
/// lifetime and processes jobs one at a time, in submission order.
///
/// The task stops once every `WriteHandle` has been dropped.
pub fn spawn_writer(pool: &DbPool, queue_capacity: usize) -> Result<WriteHandle> {
    let runtime = tokio::runtime::Handle::try_current()
        .map_err(|e| DatabaseError::Internal(format!("Writer actor needs a Tokio runtime: {}", e)))?;
    let mut conn = get_connection(pool).map_err(|e| {
        error!("Writer actor could not acquire a connection: {}", e);
        e
    })?;
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(queue_capacity.max(1));

    runtime.spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Error::from);

            // The caller may have gone away; nothing to report to.
            let _ = reply_tx.send(result);
        }
        debug!("Writer actor stopped");
    });

    Ok(WriteHandle { tx })
}
