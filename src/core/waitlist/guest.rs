// Guest is one registration event on the waitlist.
//
// Notes
// - `waiting_time` is the estimate captured at registration and is never recomputed.
// - `processed_at` is present if and only if the status is not `Waiting`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestId(String);

impl GuestId {
    /// Time ordered UUIDv7, so ids sort by registration.
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GuestId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for GuestId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestStatus {
    Waiting,
    Seated,
    Cancelled,
}

impl GuestStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GuestStatus::Waiting)
    }
}

impl fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GuestStatus::Waiting => "waiting",
            GuestStatus::Seated => "seated",
            GuestStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    pub phone_number: String,
    pub guest_count: u32,
    pub willing_to_share: bool,
    pub registered_at: DateTime<Utc>,
    /// Minutes.
    pub waiting_time: u32,
    pub status: GuestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
}

impl Guest {
    pub fn is_waiting(&self) -> bool {
        self.status == GuestStatus::Waiting
    }
}

#[cfg(test)]
mod waitlist_guest_tests {
    use super::*;
    use crate::test_support::fixtures::guests::make_waiting_guest;
    use rstest::rstest;

    #[rstest]
    #[case(GuestStatus::Waiting, false)]
    #[case(GuestStatus::Seated, true)]
    #[case(GuestStatus::Cancelled, true)]
    fn it_should_know_which_statuses_are_terminal(
        #[case] status: GuestStatus,
        #[case] expected: bool,
    ) {
        assert_eq!(status.is_terminal(), expected);
    }

    #[rstest]
    fn it_should_generate_unique_ids() {
        let first = GuestId::generate();
        let second = GuestId::generate();
        assert_ne!(first, second);
    }

    #[rstest]
    fn it_should_serialize_with_camel_case_fields_and_omit_processed_at() {
        let guest = make_waiting_guest("g-0001", 3);
        let value = serde_json::to_value(&guest).unwrap();
        assert_eq!(value["id"], "g-0001");
        assert_eq!(value["phoneNumber"], guest.phone_number);
        assert_eq!(value["guestCount"], 3);
        assert_eq!(value["willingToShare"], false);
        assert_eq!(value["status"], "waiting");
        assert!(value.get("processedAt").is_none());
    }

    #[rstest]
    fn it_should_read_a_record_written_with_iso_timestamps_and_legacy_ids() {
        let json = r#"{
            "id": "1718000000000",
            "name": "Asha",
            "phoneNumber": "9876543210",
            "guestCount": 2,
            "willingToShare": true,
            "registeredAt": "2024-06-10T06:13:20.000Z",
            "waitingTime": 12,
            "status": "seated",
            "processedAt": "2024-06-10T06:30:00.000Z"
        }"#;
        let guest: Guest = serde_json::from_str(json).unwrap();
        assert_eq!(guest.id.as_str(), "1718000000000");
        assert_eq!(guest.status, GuestStatus::Seated);
        assert_eq!(guest.waiting_time, 12);
        assert!(guest.processed_at.is_some());
        assert!(!guest.is_waiting());
    }
}
