//! The fill levels and progress ratios of the aquarium and pomodoro clocks.

use std::f64::consts::PI;

use serde::Serialize;

use crate::time::CanonicalTime;

/// The radius of a pomodoro ring.
pub const RING_RADIUS: f64 = 54.;

/// The progress of each field through its cycle, each in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Ratios {
    /// The hours through a 12-hour cycle.
    pub hours: f64,
    /// The minutes through the hour.
    pub minutes: f64,
    /// The seconds through the minute.
    pub seconds: f64,
}

/// Returns the progress ratios of the time.
pub fn ratios(time: CanonicalTime) -> Ratios {
    Ratios {
        hours: (time.hours() % 12) as f64 / 12.,
        minutes: time.minutes() as f64 / 60.,
        seconds: time.seconds() as f64 / 60.,
    }
}

/// The water level of each tank of the aquarium, in percent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WaterLevels {
    /// The hours tank.
    pub hours: f64,
    /// The minutes tank.
    pub minutes: f64,
    /// The seconds tank.
    pub seconds: f64,
}

/// Returns the water levels of the aquarium.
pub fn water_levels(time: CanonicalTime) -> WaterLevels {
    let r = ratios(time);
    WaterLevels {
        hours: r.hours * 100.,
        minutes: r.minutes * 100.,
        seconds: r.seconds * 100.,
    }
}

/// The circumference of a pomodoro ring.
#[inline]
pub fn circumference() -> f64 {
    2. * PI * RING_RADIUS
}

/// The dash offset of a ring stroke, so that only the `progress` part of the ring is drawn.
#[inline]
pub fn stroke_dashoffset(progress: f64) -> f64 {
    circumference() * (1. - progress)
}

/// The progress rings of the pomodoro clock.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PomodoroRings {
    /// The progress of each ring.
    pub progress: Ratios,
    /// The stroke dash offset of the hours ring.
    pub hours_offset: f64,
    /// The stroke dash offset of the minutes ring.
    pub minutes_offset: f64,
    /// The stroke dash offset of the seconds ring.
    pub seconds_offset: f64,
}

/// Returns the progress rings of the pomodoro clock.
pub fn rings(time: CanonicalTime) -> PomodoroRings {
    let progress = ratios(time);
    PomodoroRings {
        progress,
        hours_offset: stroke_dashoffset(progress.hours),
        minutes_offset: stroke_dashoffset(progress.minutes),
        seconds_offset: stroke_dashoffset(progress.seconds),
    }
}

#[cfg(test)]
mod tests {
    use super::{circumference, ratios, rings, water_levels};
    use crate::CanonicalTime;

    #[test]
    fn ratios_stay_below_one() {
        let r = ratios(CanonicalTime::new(23, 59, 59).unwrap());
        assert_eq!(r.hours, 11. / 12.);
        assert_eq!(r.minutes, 59. / 60.);
        assert_eq!(r.seconds, 59. / 60.);
    }

    #[test]
    fn noon_is_empty() {
        let r = ratios(CanonicalTime::new(12, 0, 0).unwrap());
        assert_eq!((r.hours, r.minutes, r.seconds), (0., 0., 0.));
    }

    #[test]
    fn aquarium_percent() {
        let w = water_levels(CanonicalTime::new(6, 30, 15).unwrap());
        assert_eq!(w.hours, 50.);
        assert_eq!(w.minutes, 50.);
        assert_eq!(w.seconds, 25.);
    }

    #[test]
    fn pomodoro_offsets() {
        let r = rings(CanonicalTime::new(0, 0, 30).unwrap());
        assert_eq!(r.hours_offset, circumference());
        assert_eq!(r.seconds_offset, circumference() / 2.);
    }
}
