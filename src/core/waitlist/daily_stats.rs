// Append only aggregate of seating events for one calendar day.
//
// Invariants
// - total_guests == guests_served.len()
// - total_plates == sum of guest_count over guests_served
// - A record is created on the first seating of its day and only grows afterwards.

use crate::core::waitlist::guest::Guest;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub date: NaiveDate,
    pub total_guests: u32,
    pub total_plates: u64,
    pub guests_served: Vec<Guest>,
}

impl DailyStats {
    fn first_seating(date: NaiveDate, guest: Guest) -> Self {
        Self {
            date,
            total_guests: 1,
            total_plates: u64::from(guest.guest_count),
            guests_served: vec![guest],
        }
    }

    fn record(&mut self, guest: Guest) {
        self.total_guests += 1;
        self.total_plates += u64::from(guest.guest_count);
        self.guests_served.push(guest);
    }
}

/// Records one seating against `date`, creating the day's record if needed.
pub fn record_seating(stats: &mut Vec<DailyStats>, date: NaiveDate, guest: Guest) {
    match stats.iter_mut().find(|s| s.date == date) {
        Some(existing) => existing.record(guest),
        None => stats.push(DailyStats::first_seating(date, guest)),
    }
}

pub fn find_daily_stats(stats: &[DailyStats], date: NaiveDate) -> Option<&DailyStats> {
    stats.iter().find(|s| s.date == date)
}
