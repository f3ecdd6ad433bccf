//! Validation of a user-entered custom time.
//!
//! The custom time is entered field by field, in its 12-hour form. It is checked here before
//! reaching the [`advance`](crate::advance) or [`codec`](crate::codec) modules.

use crate::time::{DisplayTime, Period};

/// The error emitted when a custom time field is out of its range.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The 12-hour field isn't in the `1..=12` range.
    #[error("hour `{0}` is out of the 1-12 range")]
    Hours(i64),
    /// The minutes field isn't in the `0..=59` range.
    #[error("minute `{0}` is out of the 0-59 range")]
    Minutes(i64),
    /// The seconds field isn't in the `0..=59` range.
    #[error("second `{0}` is out of the 0-59 range")]
    Seconds(i64),
}

/// Checks the fields of a custom time and returns it as a [`DisplayTime`].
///
/// The hour must be in the `1..=12` range, the minutes and seconds in the `0..=59` range.
/// The first field out of range is reported, in the hours, minutes, seconds order.
pub fn validate_custom_time(
    hours12: i64,
    minutes: i64,
    seconds: i64,
    period: Period,
) -> Result<DisplayTime, RangeError> {
    if !(1..=12).contains(&hours12) {
        return Err(RangeError::Hours(hours12));
    }
    if !(0..=59).contains(&minutes) {
        return Err(RangeError::Minutes(minutes));
    }
    if !(0..=59).contains(&seconds) {
        return Err(RangeError::Seconds(seconds));
    }

    Ok(DisplayTime::new_unchecked(
        hours12 as _,
        minutes as _,
        seconds as _,
        period,
    ))
}

/// The custom time as entered by the user, before any check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CustomTimeInput {
    /// The hour, expected from 1 to 12.
    pub hours: i64,
    /// The minutes, expected from 0 to 59.
    pub minutes: i64,
    /// The seconds, expected from 0 to 59.
    pub seconds: i64,
    /// The AM/PM marker.
    pub period: Period,
}

impl Default for CustomTimeInput {
    fn default() -> Self {
        Self {
            hours: 12,
            minutes: 0,
            seconds: 0,
            period: Period::Am,
        }
    }
}

impl CustomTimeInput {
    /// Checks the input. See [`validate_custom_time`].
    #[inline]
    pub fn validate(&self) -> Result<DisplayTime, RangeError> {
        validate_custom_time(self.hours, self.minutes, self.seconds, self.period)
    }
}
