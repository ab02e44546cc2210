// Ports define what the waitlist core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the persistent mirror (a flat key to string store) and the time source as traits.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - Use the in memory key value store and the fixed clock for tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Namespaced key to string storage. A missing key is `Ok(None)`, never an error.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
