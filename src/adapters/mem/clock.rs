//! In-memory wall clock pinned and stepped by tests.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::ports::clock::Clock;

/// In-memory clock that only moves when told to.
pub struct MemClock {
    now: Mutex<DateTime<Utc>>,
}

impl MemClock {
    /// Creates a clock pinned at the Unix epoch.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(DateTime::UNIX_EPOCH)
    }

    /// Creates a clock pinned at the given time.
    #[must_use]
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(now) }
    }

    /// Pins the clock to the given time.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("clock lock poisoned") = now;
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now += delta;
    }
}

impl Default for MemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MemClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock poisoned")
    }
}
