//! This module contains the time types shared by the clocks.
//!
//! A [`CanonicalTime`] is the 24-hour value every widget derives its projection from. A
//! [`DisplayTime`] is its 12-hour counterpart, the one edited by the user and advanced while
//! the custom time mode is active.

use core::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{
    codec::{self, FormatError},
    validate::{self, RangeError},
};

/// The half of the day of a 12-hour time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum Period {
    /// Before noon.
    #[serde(rename = "AM")]
    Am,
    /// After noon.
    #[serde(rename = "PM")]
    Pm,
}

impl Period {
    /// Returns the other half of the day.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Period::Am => Period::Pm,
            Period::Pm => Period::Am,
        }
    }

    /// Returns the marker as written in a textual time.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AM" => Ok(Period::Am),
            "PM" => Ok(Period::Pm),
            other => Err(FormatError::InvalidPeriod(other.to_owned())),
        }
    }
}

/// A time of the day in its 24-hour form.
///
/// The hours are always in the `0..=23` range, the minutes and seconds in the `0..=59` range.
/// There is no timezone nor leap second.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CanonicalTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl CanonicalTime {
    /// The first second of the day.
    pub const MIDNIGHT: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Returns a time from its 24-hour components, or `None` if one of them is out of range.
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Option<Self> {
        (hours < 24 && minutes < 60 && seconds < 60).then_some(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Builds a time from components that were already checked.
    #[inline]
    pub(crate) const fn new_unchecked(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Returns the time of the provided chrono value, dropping its date and sub-second parts.
    pub fn from_timelike<T: chrono::Timelike>(t: &T) -> Self {
        // chrono represents a leap second with the nanosecond part, so `second()` stays below 60.
        Self::new_unchecked(t.hour() as _, t.minute() as _, t.second() as _)
    }

    /// The hours, from 0 to 23.
    #[inline]
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// The minutes, from 0 to 59.
    #[inline]
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// The seconds, from 0 to 59.
    #[inline]
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// The hour shown by a 12-hour clock, from 1 to 12.
    #[inline]
    pub fn hours12(&self) -> u8 {
        match self.hours % 12 {
            0 => 12,
            h => h,
        }
    }

    /// The half of the day this time belongs to.
    #[inline]
    pub fn period(&self) -> Period {
        if self.hours >= 12 {
            Period::Pm
        } else {
            Period::Am
        }
    }

    /// The number of minutes elapsed since midnight, ignoring the seconds.
    #[inline]
    pub fn total_minutes(&self) -> u16 {
        self.hours as u16 * 60 + self.minutes as u16
    }

    /// The fractional number of hours elapsed since midnight, ignoring the seconds.
    #[inline]
    pub fn fractional_hours(&self) -> f64 {
        self.hours as f64 + self.minutes as f64 / 60.
    }
}

impl fmt::Display for CanonicalTime {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&DisplayTime::from(*self), f)
    }
}

impl fmt::Debug for CanonicalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl FromStr for CanonicalTime {
    type Err = FormatError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse(s)
    }
}

/// A time of the day in its 12-hour form, as shown to the user.
///
/// The hours are in the `1..=12` range. It is derived from a [`CanonicalTime`] or checked by
/// [`DisplayTime::new`], and only [`advance`](crate::advance::advance) produces a new one
/// from an old one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DisplayTime {
    hours12: u8,
    minutes: u8,
    seconds: u8,
    period: Period,
}

impl DisplayTime {
    /// Returns a display time from user-provided components.
    ///
    /// See [`validate_custom_time`](validate::validate_custom_time) for the accepted ranges.
    pub fn new(hours12: u8, minutes: u8, seconds: u8, period: Period) -> Result<Self, RangeError> {
        validate::validate_custom_time(hours12 as _, minutes as _, seconds as _, period)
    }

    #[inline]
    pub(crate) const fn new_unchecked(hours12: u8, minutes: u8, seconds: u8, period: Period) -> Self {
        Self {
            hours12,
            minutes,
            seconds,
            period,
        }
    }

    /// The hours, from 1 to 12.
    #[inline]
    pub fn hours12(&self) -> u8 {
        self.hours12
    }

    /// The minutes, from 0 to 59.
    #[inline]
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// The seconds, from 0 to 59.
    #[inline]
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// The AM/PM marker.
    #[inline]
    pub fn period(&self) -> Period {
        self.period
    }

    /// Converts this time to its 24-hour form.
    ///
    /// 12 AM becomes hour 0, 12 PM stays hour 12, and the other PM hours are shifted by 12.
    pub fn to_canonical(self) -> CanonicalTime {
        let hours = match (self.period, self.hours12) {
            (Period::Am, 12) => 0,
            (Period::Am, h) => h,
            (Period::Pm, 12) => 12,
            (Period::Pm, h) => h + 12,
        };
        CanonicalTime::new_unchecked(hours, self.minutes, self.seconds)
    }
}

impl From<CanonicalTime> for DisplayTime {
    fn from(time: CanonicalTime) -> Self {
        Self::new_unchecked(time.hours12(), time.minutes, time.seconds, time.period())
    }
}

impl From<DisplayTime> for CanonicalTime {
    #[inline]
    fn from(time: DisplayTime) -> Self {
        time.to_canonical()
    }
}

impl fmt::Display for DisplayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02} {}",
            self.hours12, self.minutes, self.seconds, self.period
        )
    }
}

impl fmt::Debug for DisplayTime {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for DisplayTime {
    type Err = FormatError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse(s).map(From::from)
    }
}
