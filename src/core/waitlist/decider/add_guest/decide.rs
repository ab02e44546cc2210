// Pure decision function for registering a guest.
//
// Responsibilities
// - Build the waiting guest from the command.
// - Drop the share preference unless the party is exactly two, whatever the draft says.
// - Stamp `waiting_time` with the estimate taken before the guest joins the list;
//   a guest never counts toward its own estimate.
// - Never perform input or output.

use crate::core::waitlist::decider::add_guest::command::AddGuest;
use crate::core::waitlist::guest::{Guest, GuestStatus};

pub fn decide_add_guest(command: AddGuest, estimated_waiting_time: u32) -> Guest {
    let AddGuest {
        guest_id,
        draft,
        registered_at,
    } = command;
    Guest {
        id: guest_id,
        name: draft.name,
        phone_number: draft.phone_number,
        guest_count: draft.guest_count,
        willing_to_share: draft.guest_count == 2 && draft.willing_to_share,
        registered_at,
        waiting_time: estimated_waiting_time,
        status: GuestStatus::Waiting,
        processed_at: None,
    }
}
