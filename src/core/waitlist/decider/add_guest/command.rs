// Command data type for registering a guest on the waitlist.
//
// Purpose
// - Carry the caller's draft together with the identity and timestamp the store assigns.
//
// Responsibilities
// - Be independent of any presentation or storage detail.

use crate::core::waitlist::draft::GuestDraft;
use crate::core::waitlist::guest::GuestId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddGuest {
    pub guest_id: GuestId,
    pub draft: GuestDraft,
    pub registered_at: DateTime<Utc>,
}

#[cfg(test)]
mod waitlist_add_guest_command_tests {
    use super::*;
    use crate::test_support::fixtures::commands::add_guest::AddGuestBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_create_the_command_from_the_fixture() {
        let command = AddGuestBuilder::new().build();
        assert_eq!(command.guest_id.as_str(), "guest-fixed-0001");
        assert_eq!(command.draft.name, "Asha Rao");
        assert_eq!(command.draft.guest_count, 2);
        assert!(command.draft.willing_to_share);
    }
}
