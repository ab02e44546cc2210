// Persistence writer drains durable writes in the background.
//
// Purpose
// - Let store mutations return immediately while their blobs are mirrored to storage.
//
// Responsibilities
// - Serialize on the caller's side, write on a single worker task so writes to the
//   same key land in mutation order.
// - Log failures and move on. Nothing is retried and nothing is reported back.

use crate::application::errors::PersistenceError;
use crate::application::persistence::keys::StorageKey;
use crate::core::ports::KeyValueStore;
use serde::Serialize;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};

enum WriteRequest {
    Put { key: StorageKey, value: String },
    Flush(oneshot::Sender<()>),
}

#[derive(Debug, Clone)]
pub struct PersistenceWriter {
    sender: mpsc::UnboundedSender<WriteRequest>,
}

impl std::fmt::Debug for WriteRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteRequest::Put { key, value } => f
                .debug_struct("Put")
                .field("key", key)
                .field("bytes", &value.len())
                .finish(),
            WriteRequest::Flush(_) => f.write_str("Flush"),
        }
    }
}

impl PersistenceWriter {
    /// Spawns the worker on `runtime`.
    pub fn spawn(runtime: &Handle, storage: Arc<dyn KeyValueStore>) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        runtime.spawn(async move {
            while let Some(request) = receiver.recv().await {
                match request {
                    WriteRequest::Put { key, value } => {
                        if let Err(error) = write(storage.as_ref(), key, &value).await {
                            tracing::error!(%error, "failed to persist waitlist data");
                        } else {
                            tracing::debug!(key = key.as_str(), bytes = value.len(), "persisted");
                        }
                    }
                    WriteRequest::Flush(done) => {
                        let _ = done.send(());
                    }
                }
            }
            tracing::debug!("persistence writer stopped");
        });
        Self { sender }
    }

    /// Serializes `value` now and queues the write. Never fails the caller.
    pub fn enqueue<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) {
        let value = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(source) => {
                let error = PersistenceError::Serialization {
                    key: key.as_str(),
                    source,
                };
                tracing::error!(%error, "failed to persist waitlist data");
                return;
            }
        };
        if self.sender.send(WriteRequest::Put { key, value }).is_err() {
            tracing::warn!(key = key.as_str(), "persistence writer is gone, write dropped");
        }
    }

    /// Resolves once every write queued before this call has been attempted.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.sender.send(WriteRequest::Flush(done)).is_ok() {
            let _ = wait.await;
        }
    }
}

async fn write(
    storage: &dyn KeyValueStore,
    key: StorageKey,
    value: &str,
) -> Result<(), PersistenceError> {
    storage
        .set(key.as_str(), value)
        .await
        .map_err(|source| PersistenceError::Backend {
            key: key.as_str(),
            source: source.into(),
        })
}
