//! Live wall clock reading the host time.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Live clock backed by the host's wall clock.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
