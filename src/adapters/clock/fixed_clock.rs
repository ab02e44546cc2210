// Clock that only moves when told to. Used by tests and by hosts that replay a
// recorded service day.

use crate::core::ports::Clock;
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod fixed_clock_tests {
    use super::*;
    use crate::test_support::fixtures::guests::fixed_now;
    use rstest::rstest;

    #[rstest]
    fn it_should_only_move_when_told_to() {
        let clock = FixedClock::new(fixed_now());
        assert_eq!(clock.now(), fixed_now());
        clock.advance(Duration::minutes(15));
        assert_eq!(clock.now(), fixed_now() + Duration::minutes(15));
        clock.set(fixed_now());
        assert_eq!(clock.now(), fixed_now());
    }
}
