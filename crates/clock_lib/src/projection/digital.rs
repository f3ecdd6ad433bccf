//! The digital readout.

use serde::Serialize;

use crate::{
    codec,
    time::{CanonicalTime, Period},
};

/// The text fields of the 12-hour readout shown by most widgets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DigitalReadout {
    /// The hour, from `01` to `12`.
    pub hours: String,
    /// The minutes, from `00` to `59`.
    pub minutes: String,
    /// The seconds, from `00` to `59`.
    pub seconds: String,
    /// The AM/PM marker.
    pub period: Period,
    /// The whole `HH:MM:SS AM|PM` text.
    pub text: String,
}

/// Returns the zero-padded 12-hour readout of the time.
pub fn readout(time: CanonicalTime) -> DigitalReadout {
    DigitalReadout {
        hours: format!("{:02}", time.hours12()),
        minutes: format!("{:02}", time.minutes()),
        seconds: format!("{:02}", time.seconds()),
        period: time.period(),
        text: codec::format(time),
    }
}
