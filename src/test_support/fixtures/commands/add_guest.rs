// Shared test fixture for the AddGuest command, seeded from a JSON file.

use crate::core::waitlist::decider::add_guest::command::AddGuest;
use crate::core::waitlist::draft::GuestDraft;
use crate::core::waitlist::guest::GuestId;
use crate::test_support::fixtures::guests::fixed_now;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct AddGuestDto {
    pub guest_id: String,
    pub name: String,
    pub phone_number: String,
    pub guest_count: u32,
    pub willing_to_share: bool,
}

pub struct AddGuestBuilder {
    inner: AddGuest,
}

impl Default for AddGuestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddGuestBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/test_support/fixtures/commands/json/add_guest.json").unwrap();
        let dto: AddGuestDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: AddGuest {
                guest_id: GuestId::from(dto.guest_id),
                draft: GuestDraft {
                    name: dto.name,
                    phone_number: dto.phone_number,
                    guest_count: dto.guest_count,
                    willing_to_share: dto.willing_to_share,
                },
                registered_at: fixed_now(),
            },
        }
    }

    pub fn guest_id(mut self, v: impl Into<String>) -> Self {
        self.inner.guest_id = GuestId::from(v.into());
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.draft.name = v.into();
        self
    }

    pub fn phone_number(mut self, v: impl Into<String>) -> Self {
        self.inner.draft.phone_number = v.into();
        self
    }

    pub fn guest_count(mut self, v: u32) -> Self {
        self.inner.draft.guest_count = v;
        self
    }

    pub fn willing_to_share(mut self, v: bool) -> Self {
        self.inner.draft.willing_to_share = v;
        self
    }

    pub fn registered_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.registered_at = v;
        self
    }

    pub fn draft(&self) -> GuestDraft {
        self.inner.draft.clone()
    }

    pub fn build(self) -> AddGuest {
        self.inner
    }
}

#[cfg(test)]
mod waitlist_add_guest_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = AddGuestBuilder::default().build();
        assert_eq!(built.guest_id.as_str(), "guest-fixed-0001");
        assert_eq!(built.draft.name, "Asha Rao");
        assert_eq!(built.draft.phone_number, "9876543210");
        assert_eq!(built.draft.guest_count, 2);
        assert!(built.draft.willing_to_share);
        assert_eq!(built.registered_at, fixed_now());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let later = fixed_now() + chrono::Duration::hours(1);
        let custom = AddGuestBuilder::new()
            .guest_id("gid-123")
            .name("Vikram")
            .phone_number("9123456780")
            .guest_count(5)
            .willing_to_share(false)
            .registered_at(later)
            .build();

        assert_eq!(custom.guest_id.as_str(), "gid-123");
        assert_eq!(custom.draft.name, "Vikram");
        assert_eq!(custom.draft.phone_number, "9123456780");
        assert_eq!(custom.draft.guest_count, 5);
        assert!(!custom.draft.willing_to_share);
        assert_eq!(custom.registered_at, later);
    }
}
