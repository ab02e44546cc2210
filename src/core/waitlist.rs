// This module groups the waitlist domain components.
//
// Structure
// - guest.rs: guest record, id and status lifecycle
// - draft.rs: caller supplied guest input and its form level validation
// - settings.rs: turnaround and capacity settings, the wait estimate
// - daily_stats.rs: per day aggregate of seating events
// - decider/: pure decision logic per mutation

pub mod daily_stats;
pub mod draft;
pub mod guest;
pub mod settings;
pub mod decider {
    pub mod add_guest {
        pub mod command;
        pub mod decide;
    }
    pub mod update_status {
        pub mod decide;
    }
}
