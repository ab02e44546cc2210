use crate::core::waitlist::guest::{Guest, GuestId, GuestStatus};
use chrono::{DateTime, TimeZone, Utc};

/// 2024-06-10T06:13:20Z
pub fn fixed_now() -> DateTime<Utc> {
    Utc.timestamp_opt(1_718_000_000, 0).unwrap()
}

pub fn make_waiting_guest(id: &str, guest_count: u32) -> Guest {
    Guest {
        id: GuestId::from(id),
        name: format!("Guest {id}"),
        phone_number: "9876543210".to_string(),
        guest_count,
        willing_to_share: false,
        registered_at: fixed_now(),
        waiting_time: 0,
        status: GuestStatus::Waiting,
        processed_at: None,
    }
}
