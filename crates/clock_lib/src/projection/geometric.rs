//! The geometric clock: a triangle for the hours, a square for the minutes and a circle
//! for the seconds, each growing with its field.

use serde::Serialize;

use crate::time::CanonicalTime;

/// The sizes of the shapes, in pixels, and the progress of each field, in percent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Shapes {
    /// The base of the hours triangle.
    pub triangle_base: f64,
    /// The height of the hours triangle, keeping it equilateral.
    pub triangle_height: f64,
    /// The progress of the 12-hour hour through 12.
    pub hours_progress: f64,
    /// The side of the minutes square.
    pub square_size: f64,
    /// The progress of the minutes through the hour.
    pub minutes_progress: f64,
    /// The diameter of the seconds circle.
    pub circle_size: f64,
    /// The progress of the seconds through the minute.
    pub seconds_progress: f64,
}

/// Returns the shapes of the geometric clock.
///
/// Unlike the other ratios, the hour used here is the one shown by a 12-hour clock, so
/// 12 o'clock is a full triangle.
pub fn shapes(time: CanonicalTime) -> Shapes {
    let hours = time.hours12() as f64;
    let minutes = time.minutes() as f64;
    let seconds = time.seconds() as f64;
    let triangle_base = 60. + hours * 10.;

    Shapes {
        triangle_base,
        triangle_height: triangle_base * 0.866,
        hours_progress: hours / 12. * 100.,
        square_size: 40. + minutes,
        minutes_progress: minutes / 60. * 100.,
        circle_size: 40. + seconds,
        seconds_progress: seconds / 60. * 100.,
    }
}
