//! Wall-clock source used to seed an unset picker.
//!
//! The picker only ever needs "a current time of day" once, as the initial
//! seed when the bound value starts empty. Keeping the source explicit lets
//! tests pin it.

use crate::time::{TimeOfDay, SECONDS_PER_DAY};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Clock {
    /// The system clock (UTC time of day)
    #[default]
    System,
    /// A fixed time, for deterministic tests
    Fixed(TimeOfDay),
}

impl Clock {
    /// The current time of day according to this source.
    #[must_use]
    pub fn now(&self) -> TimeOfDay {
        match self {
            Self::System => {
                let epoch_seconds = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map_or(0, |elapsed| elapsed.as_secs());
                TimeOfDay::from_seconds_of_day((epoch_seconds as i64).rem_euclid(SECONDS_PER_DAY))
            }
            Self::Fixed(time) => *time,
        }
    }
}
