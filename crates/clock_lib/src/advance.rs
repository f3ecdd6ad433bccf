//! The tick-by-tick simulation of a custom time.

use crate::time::DisplayTime;

/// The number of ticks after which [`advance`] comes back to the same time.
pub const CYCLE_TICKS: u64 = 24 * 3600;

/// Returns the time one second after the provided one.
///
/// The seconds wrap to 0 at 60, carrying to the minutes, which wrap to 0 at 60, carrying to the
/// hours. The hours wrap from 12 to 1. The AM/PM marker flips when the hours reach 12:00:00,
/// and only then, so 12:59:59 PM is followed by 01:00:00 PM.
pub fn advance(time: DisplayTime) -> DisplayTime {
    let mut hours = time.hours12();
    let mut minutes = time.minutes();
    let mut seconds = time.seconds() + 1;
    let mut period = time.period();

    if seconds >= 60 {
        seconds = 0;
        minutes += 1;
    }

    if minutes >= 60 {
        minutes = 0;
        hours += 1;
    }

    if hours > 12 {
        hours = 1;
    } else if hours == 12 && minutes == 0 && seconds == 0 {
        period = period.flip();
    }

    DisplayTime::new_unchecked(hours, minutes, seconds, period)
}

/// Returns the time `ticks` seconds after the provided one.
pub fn advance_by(time: DisplayTime, ticks: u64) -> DisplayTime {
    (0..ticks % CYCLE_TICKS).fold(time, |time, _| advance(time))
}
