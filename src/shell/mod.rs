// Composition root for the waitlist.
//
// Responsibilities
// - Read config from environment.
// - Install the tracing subscriber.
// - Instantiate the file backed storage and the system clock.
// - Load the WaitlistStore that presentation layers hold for the life of the process.

pub mod config;
pub mod telemetry;

use crate::adapters::clock::system_clock::SystemClock;
use crate::adapters::file::file_key_value_store::FileKeyValueStore;
use crate::application::waitlist_store::WaitlistStore;
use crate::shell::config::WaitlistConfig;
use std::sync::Arc;

pub async fn bootstrap(config: &WaitlistConfig) -> anyhow::Result<WaitlistStore> {
    let storage = FileKeyValueStore::open(config.namespace_dir()).await?;
    tracing::info!(dir = %storage.dir().display(), "waitlist storage opened");
    Ok(WaitlistStore::load(Arc::new(storage), Arc::new(SystemClock)).await)
}

#[cfg(test)]
mod shell_bootstrap_tests {
    use super::*;
    use crate::core::waitlist::draft::GuestDraft;
    use crate::core::waitlist::guest::GuestStatus;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_bootstrap_and_reload_from_the_namespace_directory() {
        let root = tempfile::tempdir().unwrap();
        let config = WaitlistConfig {
            storage_dir: root.path().to_path_buf(),
            namespace: "front-desk".to_string(),
            log_filter: "info".to_string(),
        };

        let mut store = bootstrap(&config).await.unwrap();
        let guest = store.add_guest(GuestDraft::new("Asha", "9876543210", 2, true));
        store.update_guest_status(&guest.id, GuestStatus::Seated);
        store.flush().await;
        assert!(root.path().join("front-desk").join("guests.json").is_file());

        let reloaded = bootstrap(&config).await.unwrap();
        assert_eq!(reloaded.guests(), store.guests());
        assert_eq!(reloaded.daily_stats().len(), 1);
    }
}
