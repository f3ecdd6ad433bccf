//! The textual representation of a custom time, like `07:45:00 PM`.
//!
//! The [`parse`] and [`format`] functions convert between this representation and the
//! [`CanonicalTime`] used by the rest of the crate.

use nom::{
    Parser as _,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, value},
};

use crate::{
    time::{CanonicalTime, DisplayTime, Period},
    validate::{RangeError, validate_custom_time},
};

/// The error emitted when parsing a textual time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The text has no space separating the clock portion from the AM/PM marker.
    #[error("missing AM/PM marker (must respect `HH:MM:SS AM|PM` form)")]
    MissingPeriod,
    /// The clock portion doesn't contain three numeric fields separated by `:`.
    #[error("invalid clock `{0}` (must respect `HH:MM:SS` form)")]
    InvalidClock(String),
    /// The marker after the clock portion is neither `AM` nor `PM`.
    #[error("invalid period `{0}` (must be AM or PM)")]
    InvalidPeriod(String),
    /// The fields are numeric but can't represent a time of the day.
    #[error("time out of range: {0}")]
    OutOfRange(#[from] RangeError),
}

fn parse_field(input: &str) -> nom::IResult<&str, u32> {
    map_res(digit1, |input: &str| input.parse()).parse(input)
}

fn parse_clock(input: &str) -> nom::IResult<&str, (u32, u32, u32)> {
    let (input, (hours, _, minutes, _, seconds)) =
        (parse_field, char(':'), parse_field, char(':'), parse_field).parse(input)?;
    Ok((input, (hours, minutes, seconds)))
}

fn parse_period(input: &str) -> nom::IResult<&str, Period> {
    alt((value(Period::Am, tag("AM")), value(Period::Pm, tag("PM")))).parse(input)
}

/// Parses a `HH:MM:SS AM|PM` text into its 24-hour form.
///
/// Hour 12 with `AM` becomes hour 0, hour 12 with `PM` stays 12, and the other `PM` hours
/// are shifted by 12. The fields may have a single digit.
///
/// The 12-hour field must be in the `1..=12` range, and the minutes and seconds in the `0..=59`
/// range, otherwise this returns [`FormatError::OutOfRange`]. Thus `13:00:00 AM` is rejected.
pub fn parse(text: &str) -> Result<CanonicalTime, FormatError> {
    let (clock, marker) = text.split_once(' ').ok_or(FormatError::MissingPeriod)?;

    let (_, (hours, minutes, seconds)) = all_consuming(parse_clock)
        .parse(clock)
        .map_err(|_| FormatError::InvalidClock(clock.to_owned()))?;

    let (_, period) = all_consuming(parse_period)
        .parse(marker)
        .map_err(|_| FormatError::InvalidPeriod(marker.to_owned()))?;

    let time = validate_custom_time(hours as _, minutes as _, seconds as _, period)?;
    Ok(time.to_canonical())
}

/// Formats the time in its `HH:MM:SS AM|PM` form, each field padded to two digits.
///
/// Hour 0 is shown as 12.
#[inline]
pub fn format(time: CanonicalTime) -> String {
    DisplayTime::from(time).to_string()
}

/// Formats the time in its 24-hour `HH:MM:SS` form.
#[inline]
pub fn format_24h(time: CanonicalTime) -> String {
    format!("{time:?}")
}
