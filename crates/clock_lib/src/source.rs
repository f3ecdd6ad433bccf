//! The sources of the current time, read by the clocks when the custom time isn't active.

use chrono::{Local, NaiveDate};

use crate::time::CanonicalTime;

/// Represents a clock the current time of the day can be read from.
pub trait TimeSource: Send + Sync + 'static {
    /// Returns the current time.
    fn now(&self) -> CanonicalTime;

    /// Returns the current date, if this source knows it.
    fn today(&self) -> Option<NaiveDate> {
        None
    }
}

/// The local system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> CanonicalTime {
        CanonicalTime::from_timelike(&Local::now())
    }

    fn today(&self) -> Option<NaiveDate> {
        Some(Local::now().date_naive())
    }
}

/// A clock stuck at the same time, mostly used for testing.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub CanonicalTime);

impl TimeSource for FixedClock {
    #[inline]
    fn now(&self) -> CanonicalTime {
        self.0
    }
}
