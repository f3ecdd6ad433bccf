//! The clock with hands.

use serde::Serialize;

use crate::time::CanonicalTime;

/// The rotation of each hand, in degrees clockwise from 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HandAngles {
    /// The hour hand, moving half a degree each minute.
    pub hour: f64,
    /// The minute hand, moving a tenth of a degree each second.
    pub minute: f64,
    /// The second hand.
    pub second: f64,
}

/// Returns the angles of the hands for the provided time.
pub fn angles(time: CanonicalTime) -> HandAngles {
    let (h, m, s) = (
        (time.hours() % 12) as f64,
        time.minutes() as f64,
        time.seconds() as f64,
    );

    HandAngles {
        hour: h * 30. + m * 0.5,
        minute: m * 6. + s * 0.1,
        second: s * 6.,
    }
}

/// A number printed on the dial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DialMark {
    /// The printed number, from 1 to 12.
    pub number: u8,
    /// The rotation of the mark, in degrees.
    pub degrees: u16,
}

/// Returns the 12 marks of the dial, starting with the 12 at the top.
pub fn dial_marks() -> impl Iterator<Item = DialMark> {
    (0..12u8).map(|i| DialMark {
        number: if i == 0 { 12 } else { i },
        degrees: i as u16 * 30,
    })
}
