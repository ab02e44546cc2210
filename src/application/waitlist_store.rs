// Waitlist store: the single owner of guests, daily stats, settings and the
// in-line marker set for the lifetime of the process.
//
// Purpose
// - Serve the read model to presentation layers and apply their mutations.
//
// Responsibilities
// - Derive the waiting and completed views and the wait estimate on every read.
// - Apply a mutation in memory first, then queue a best effort durable write.
//   Memory is the truth; storage is a mirror whose failures are only logged.
// - Silently ignore unknown guest ids and transitions out of a terminal status.
//
// Boundaries
// - Input shape validation (names, phone numbers, ranges) belongs to the caller.
// - Callers own the in-line marker set; the store does not prune it.

use crate::application::persistence::keys::StorageKey;
use crate::application::persistence::loader::{WaitlistSnapshot, load_snapshot};
use crate::application::persistence::writer::PersistenceWriter;
use crate::core::ports::{Clock, KeyValueStore};
use crate::core::waitlist::daily_stats::{DailyStats, find_daily_stats, record_seating};
use crate::core::waitlist::decider::add_guest::command::AddGuest;
use crate::core::waitlist::decider::add_guest::decide::decide_add_guest;
use crate::core::waitlist::decider::update_status::decide::decide_status_change;
use crate::core::waitlist::draft::GuestDraft;
use crate::core::waitlist::guest::{Guest, GuestId, GuestStatus};
use crate::core::waitlist::settings::{AppSettings, estimate_waiting_time};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::runtime::Handle;

pub struct WaitlistStore {
    guests: Vec<Guest>,
    daily_stats: Vec<DailyStats>,
    settings: AppSettings,
    in_line_guests: Vec<GuestId>,
    clock: Arc<dyn Clock>,
    writer: PersistenceWriter,
}

impl WaitlistStore {
    /// Empty waitlist with default settings, writing through the current runtime.
    ///
    /// # Panics
    ///
    /// Outside a Tokio runtime. Use [`WaitlistStore::with_runtime`] there.
    pub fn new(storage: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self::with_runtime(&Handle::current(), storage, clock)
    }

    /// Empty waitlist with default settings whose writer runs on `runtime`.
    pub fn with_runtime(
        runtime: &Handle,
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::from_snapshot(runtime, WaitlistSnapshot::default(), storage, clock)
    }

    /// Reads the four persisted keys once and starts the persistence writer.
    pub async fn load(storage: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let snapshot = load_snapshot(storage.as_ref()).await;
        Self::from_snapshot(&Handle::current(), snapshot, storage, clock)
    }

    fn from_snapshot(
        runtime: &Handle,
        snapshot: WaitlistSnapshot,
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            guests: snapshot.guests,
            daily_stats: snapshot.daily_stats,
            settings: snapshot.settings,
            in_line_guests: snapshot.in_line_guests,
            clock,
            writer: PersistenceWriter::spawn(runtime, storage),
        }
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn find_guest(&self, id: &GuestId) -> Option<&Guest> {
        self.guests.iter().find(|g| &g.id == id)
    }

    /// Guests still waiting, in registration order.
    pub fn waiting_guests(&self) -> Vec<&Guest> {
        self.guests.iter().filter(|g| g.is_waiting()).collect()
    }

    /// Seated and cancelled guests, in registration order.
    pub fn completed_guests(&self) -> Vec<&Guest> {
        self.guests.iter().filter(|g| !g.is_waiting()).collect()
    }

    /// Completed guests, most recently processed first.
    pub fn completed_guests_by_recency(&self) -> Vec<&Guest> {
        let mut completed = self.completed_guests();
        // Stable sort; records without processed_at go last.
        completed.sort_by(|a, b| b.processed_at.cmp(&a.processed_at));
        completed
    }

    pub fn daily_stats(&self) -> &[DailyStats] {
        &self.daily_stats
    }

    pub fn get_daily_stats(&self, date: NaiveDate) -> Option<&DailyStats> {
        find_daily_stats(&self.daily_stats, date)
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn estimated_waiting_time(&self) -> u32 {
        let waiting = self.guests.iter().filter(|g| g.is_waiting()).count();
        estimate_waiting_time(waiting, &self.settings)
    }

    pub fn in_line_guests(&self) -> &[GuestId] {
        &self.in_line_guests
    }

    pub fn is_in_line(&self, id: &GuestId) -> bool {
        self.in_line_guests.contains(id)
    }

    /// Registers a waiting guest and returns the stored record.
    pub fn add_guest(&mut self, draft: GuestDraft) -> Guest {
        // Snapshot the estimate before the new guest joins the waiting set.
        let estimate = self.estimated_waiting_time();
        let command = AddGuest {
            guest_id: GuestId::generate(),
            draft,
            registered_at: self.clock.now(),
        };
        let guest = decide_add_guest(command, estimate);
        tracing::info!(
            guest_id = %guest.id,
            guest_count = guest.guest_count,
            waiting_time = guest.waiting_time,
            "guest registered"
        );
        self.guests.push(guest.clone());
        self.writer.enqueue(StorageKey::Guests, &self.guests);
        guest
    }

    /// Moves a waiting guest to `status`. Unknown ids and terminal guests are ignored.
    pub fn update_guest_status(&mut self, id: &GuestId, status: GuestStatus) {
        let now = self.clock.now();
        let Some(index) = self.guests.iter().position(|g| &g.id == id) else {
            tracing::warn!(guest_id = %id, %status, "status update for unknown guest ignored");
            return;
        };

        let updated = match decide_status_change(&self.guests[index], status, now) {
            Ok(updated) => updated,
            Err(reason) => {
                tracing::debug!(guest_id = %id, %status, %reason, "status update ignored");
                return;
            }
        };
        // Daily stats keep the guest as it stood on the waitlist when seated.
        let before = std::mem::replace(&mut self.guests[index], updated);
        tracing::info!(guest_id = %id, %status, "guest status updated");
        self.writer.enqueue(StorageKey::Guests, &self.guests);

        if status == GuestStatus::Seated {
            record_seating(&mut self.daily_stats, now.date_naive(), before);
            self.writer.enqueue(StorageKey::DailyStats, &self.daily_stats);
        }
    }

    /// Seats a guest that was called up and clears its marker.
    pub fn seat_in_line_guest(&mut self, id: &GuestId) {
        self.update_guest_status(id, GuestStatus::Seated);
        self.unmark_in_line(id);
    }

    /// Replaces the settings wholesale; applies to every later estimate.
    pub fn update_settings(&mut self, settings: AppSettings) {
        tracing::info!(
            avg_table_turnaround_time = settings.avg_table_turnaround_time,
            total_tables = settings.total_tables,
            "settings updated"
        );
        self.settings = settings;
        self.writer.enqueue(StorageKey::Settings, &self.settings);
    }

    pub fn mark_in_line(&mut self, id: &GuestId) {
        if self.is_in_line(id) {
            return;
        }
        tracing::debug!(guest_id = %id, "guest called in line");
        self.in_line_guests.push(id.clone());
        self.writer
            .enqueue(StorageKey::InLineGuests, &self.in_line_guests);
    }

    pub fn unmark_in_line(&mut self, id: &GuestId) {
        let before = self.in_line_guests.len();
        self.in_line_guests.retain(|marked| marked != id);
        if self.in_line_guests.len() == before {
            return;
        }
        tracing::debug!(guest_id = %id, "guest removed from line");
        self.writer
            .enqueue(StorageKey::InLineGuests, &self.in_line_guests);
    }

    /// Replaces the marker set. Duplicates collapse to their first occurrence.
    pub fn set_in_line_guests(&mut self, ids: Vec<GuestId>) {
        let mut deduped: Vec<GuestId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !deduped.contains(&id) {
                deduped.push(id);
            }
        }
        self.in_line_guests = deduped;
        self.writer
            .enqueue(StorageKey::InLineGuests, &self.in_line_guests);
    }

    /// Waits until every durable write queued so far has been attempted.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }
}
