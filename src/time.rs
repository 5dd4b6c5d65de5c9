//! Clock Abstraction for the Monitor Scheduler
//!
//! The monitor never sleeps or blocks; it is polled with a timestamp and
//! decides what is due. That keeps the scheduler testable (drive it with a
//! [`ManualClock`]) and portable (feed it a hardware tick counter on
//! embedded targets, wall-clock milliseconds on a phone).

/// Timestamp in milliseconds.
///
/// Monotonic since boot or since the Unix epoch - the monitor only ever
/// looks at differences, so either works as long as the source is
/// non-decreasing.
pub type Timestamp = u64;

/// Source of the current time for the scheduler
pub trait Clock {
    /// Current timestamp in milliseconds
    fn now_ms(&self) -> Timestamp;
}

/// Wall-clock time via the operating system (requires `std`)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now_ms(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Manually advanced clock for tests and simulations
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Timestamp,
}

impl ManualClock {
    /// Create a clock frozen at the given timestamp
    pub fn new(now: Timestamp) -> Self {
        Self { now }
    }

    /// Jump to an absolute timestamp
    pub fn set(&mut self, now: Timestamp) {
        self.now = now;
    }

    /// Move forward by `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Timestamp {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let mut clock = ManualClock::new(1_000);
        assert_eq!(clock.now_ms(), 1_000);

        clock.advance(250);
        assert_eq!(clock.now_ms(), 1_250);

        clock.set(10_000);
        assert_eq!(clock.now_ms(), 10_000);
    }
}
