//! Wall-clock port for reading the current time.

use chrono::{DateTime, Utc};

/// Provides the current wall-clock time.
///
/// Abstracting the clock lets tests pin or step time instead of reading
/// the host clock. The filesystem double also stamps entry timestamps
/// through this port.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
