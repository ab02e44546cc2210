// Pure decision function for moving a guest through its lifecycle.
//
//   waiting -> seated     (terminal)
//   waiting -> cancelled  (terminal)
//
// Nothing leaves a terminal status, and processed_at is stamped exactly once,
// on the transition out of waiting.

use crate::core::waitlist::guest::{Guest, GuestStatus};
use chrono::{DateTime, Utc};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("guest was already processed as {status}")]
    AlreadyProcessed { status: GuestStatus },

    #[error("guest is already waiting")]
    Unchanged,
}

pub fn decide_status_change(
    guest: &Guest,
    target: GuestStatus,
    now: DateTime<Utc>,
) -> Result<Guest, TransitionError> {
    match (guest.status, target) {
        (status, _) if status.is_terminal() => Err(TransitionError::AlreadyProcessed { status }),
        (GuestStatus::Waiting, GuestStatus::Waiting) => Err(TransitionError::Unchanged),
        (_, target) => Ok(Guest {
            status: target,
            processed_at: Some(now),
            ..guest.clone()
        }),
    }
}

#[cfg(test)]
mod waitlist_update_status_decide_tests {
    use super::*;
    use crate::test_support::fixtures::guests::{fixed_now, make_waiting_guest};
    use rstest::{fixture, rstest};

    #[fixture]
    fn waiting_guest() -> Guest {
        make_waiting_guest("g-0001", 3)
    }

    #[rstest]
    #[case(GuestStatus::Seated)]
    #[case(GuestStatus::Cancelled)]
    fn it_should_process_a_waiting_guest(waiting_guest: Guest, #[case] target: GuestStatus) {
        let now = fixed_now();
        let updated = decide_status_change(&waiting_guest, target, now).unwrap();
        assert_eq!(updated.status, target);
        assert_eq!(updated.processed_at, Some(now));
        assert_eq!(updated.id, waiting_guest.id);
        assert_eq!(updated.waiting_time, waiting_guest.waiting_time);
        assert_eq!(updated.registered_at, waiting_guest.registered_at);
    }

    #[rstest]
    fn it_should_reject_waiting_to_waiting(waiting_guest: Guest) {
        let result = decide_status_change(&waiting_guest, GuestStatus::Waiting, fixed_now());
        assert_eq!(result, Err(TransitionError::Unchanged));
    }

    #[rstest]
    fn it_should_leave_terminal_statuses_alone(
        waiting_guest: Guest,
        #[values(GuestStatus::Seated, GuestStatus::Cancelled)] first: GuestStatus,
        #[values(GuestStatus::Waiting, GuestStatus::Seated, GuestStatus::Cancelled)]
        then: GuestStatus,
    ) {
        let processed = decide_status_change(&waiting_guest, first, fixed_now()).unwrap();
        let later = fixed_now() + chrono::Duration::minutes(5);
        let result = decide_status_change(&processed, then, later);
        assert_eq!(result, Err(TransitionError::AlreadyProcessed { status: first }));
    }
}
