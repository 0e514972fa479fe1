//! Clock sources for the current time of day.

use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;

use crate::time::TimeOfDay;

/// Source of the current wall-clock time of day.
pub trait Clock: Send {
    /// Current hours and minutes.
    fn now(&self) -> TimeOfDay;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_timelike(&chrono::Local::now())
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and hand
/// another to the scheduler.
#[derive(Debug, Clone)]
pub struct ManualClock {
    minutes: Arc<AtomicU16>,
}

impl ManualClock {
    /// Create a clock stopped at `time`.
    pub fn new(time: TimeOfDay) -> Self {
        Self {
            minutes: Arc::new(AtomicU16::new(time.minutes_since_midnight())),
        }
    }

    /// Move the clock to `time`.
    pub fn set(&self, time: TimeOfDay) {
        self.minutes
            .store(time.minutes_since_midnight(), Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_minutes(i32::from(self.minutes.load(Ordering::Relaxed)))
    }
}
