use thiserror::Error;

/// Failures of the durable mirror. These are logged by the writer and loader
/// and never reach the caller of a store mutation.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("could not encode or decode {key}: {source}")]
    Serialization {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage backend failed for {key}: {source}")]
    Backend {
        key: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
