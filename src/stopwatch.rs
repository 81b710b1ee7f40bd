//! Stopwatch measuring elapsed time through the monotonic clock port.

use std::sync::Arc;
use std::time::Duration;

use crate::ports::monotonic::MonotonicClock;

/// Accumulating stopwatch driven by a [`MonotonicClock`].
///
/// With the live clock it behaves like any wall stopwatch; with a
/// manually advanced clock every reading is deterministic.
pub struct Stopwatch {
    clock: Arc<dyn MonotonicClock>,
    accumulated: Duration,
    started_at: Option<Duration>,
}

impl Stopwatch {
    /// Creates a stopped stopwatch reading zero.
    #[must_use]
    pub fn new(clock: Arc<dyn MonotonicClock>) -> Self {
        Self { clock, accumulated: Duration::ZERO, started_at: None }
    }

    /// Creates a stopwatch and starts it immediately.
    #[must_use]
    pub fn start_new(clock: Arc<dyn MonotonicClock>) -> Self {
        let mut watch = Self::new(clock);
        watch.start();
        watch
    }

    /// Starts or resumes measurement. No effect while already running.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(self.clock.elapsed());
        }
    }

    /// Stops measurement, keeping the accumulated reading.
    pub fn stop(&mut self) {
        if let Some(started) = self.started_at.take() {
            self.accumulated += self.clock.elapsed().saturating_sub(started);
        }
    }

    /// Stops and clears the reading.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started_at = None;
    }

    /// Clears the reading and starts measuring again.
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Returns the total measured time, including any running segment.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started) => self.accumulated + self.clock.elapsed().saturating_sub(started),
            None => self.accumulated,
        }
    }

    /// Returns `true` while the stopwatch is measuring.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mem::MemMonotonicClock;

    fn fixture() -> (Arc<MemMonotonicClock>, Stopwatch) {
        let clock = Arc::new(MemMonotonicClock::new());
        let watch = Stopwatch::new(Arc::clone(&clock) as Arc<dyn MonotonicClock>);
        (clock, watch)
    }

    #[test]
    fn starts_stopped_at_zero() {
        let (_clock, watch) = fixture();
        assert!(!watch.is_running());
        assert_eq!(watch.elapsed(), Duration::ZERO);
    }

    #[test]
    fn accumulates_across_start_stop_cycles() {
        let (clock, mut watch) = fixture();

        watch.start();
        clock.advance(Duration::from_secs(2));
        watch.stop();

        clock.advance(Duration::from_secs(5));

        watch.start();
        clock.advance(Duration::from_secs(3));
        watch.stop();

        assert_eq!(watch.elapsed(), Duration::from_secs(5));
    }

    #[test]
    fn elapsed_tracks_a_running_segment() {
        let (clock, mut watch) = fixture();
        watch.start();
        clock.advance(Duration::from_millis(1500));

        assert!(watch.is_running());
        assert_eq!(watch.elapsed(), Duration::from_millis(1500));
    }

    #[test]
    fn double_start_does_not_reset_the_segment() {
        let (clock, mut watch) = fixture();
        watch.start();
        clock.advance(Duration::from_secs(1));
        watch.start();
        clock.advance(Duration::from_secs(1));

        assert_eq!(watch.elapsed(), Duration::from_secs(2));
    }

    #[test]
    fn restart_clears_and_runs() {
        let (clock, mut watch) = fixture();
        watch.start();
        clock.advance(Duration::from_secs(4));
        watch.restart();
        clock.advance(Duration::from_secs(1));

        assert!(watch.is_running());
        assert_eq!(watch.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn reset_stops_and_zeroes() {
        let (clock, mut watch) = fixture();
        watch.start();
        clock.advance(Duration::from_secs(4));
        watch.reset();

        assert!(!watch.is_running());
        assert_eq!(watch.elapsed(), Duration::ZERO);
    }

    #[test]
    fn start_new_is_running() {
        let clock = Arc::new(MemMonotonicClock::new());
        let watch = Stopwatch::start_new(clock);
        assert!(watch.is_running());
    }
}
