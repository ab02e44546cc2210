// Startup load of the persistent mirror.
//
// A missing key means "use the default". A backend failure or a blob that no
// longer parses is logged and also falls back to the default, per key.

use crate::application::errors::PersistenceError;
use crate::application::persistence::keys::StorageKey;
use crate::core::ports::KeyValueStore;
use crate::core::waitlist::daily_stats::DailyStats;
use crate::core::waitlist::guest::{Guest, GuestId};
use crate::core::waitlist::settings::AppSettings;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistSnapshot {
    pub guests: Vec<Guest>,
    pub daily_stats: Vec<DailyStats>,
    pub settings: AppSettings,
    pub in_line_guests: Vec<GuestId>,
}

pub async fn load_snapshot(storage: &dyn KeyValueStore) -> WaitlistSnapshot {
    let snapshot = WaitlistSnapshot {
        guests: load_or_default(storage, StorageKey::Guests).await,
        daily_stats: load_or_default(storage, StorageKey::DailyStats).await,
        settings: load_or_default(storage, StorageKey::Settings).await,
        in_line_guests: load_or_default(storage, StorageKey::InLineGuests).await,
    };
    tracing::info!(
        guests = snapshot.guests.len(),
        days = snapshot.daily_stats.len(),
        in_line = snapshot.in_line_guests.len(),
        "waitlist loaded"
    );
    snapshot
}

async fn load_or_default<T: DeserializeOwned + Default>(
    storage: &dyn KeyValueStore,
    key: StorageKey,
) -> T {
    match load(storage, key).await {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(error) => {
            tracing::error!(%error, "failed to load waitlist data, using default");
            T::default()
        }
    }
}

async fn load<T: DeserializeOwned>(
    storage: &dyn KeyValueStore,
    key: StorageKey,
) -> Result<Option<T>, PersistenceError> {
    let raw = storage
        .get(key.as_str())
        .await
        .map_err(|source| PersistenceError::Backend {
            key: key.as_str(),
            source: source.into(),
        })?;
    raw.map(|json| {
        serde_json::from_str(&json).map_err(|source| PersistenceError::Serialization {
            key: key.as_str(),
            source,
        })
    })
    .transpose()
}
