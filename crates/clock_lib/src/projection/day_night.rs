//! The day/night clock: a landscape whose sky, sun, moon and stars follow the time of the day.
//!
//! The sun crosses the sky on an arc between 06:00 and 19:00, and the moon on the same arc
//! between 19:00 and 06:00. The sky color and the star opacity are piecewise-linear functions
//! of the hour, across the bands of [`SkyBand`].

use core::fmt;
use std::f64::consts::PI;

use serde::Serialize;

use crate::{codec, time::CanonicalTime};

const DAY_START: f64 = 6. * 60.;
const DAY_END: f64 = 19. * 60.;
const NIGHT_END: f64 = 24. * 60. + DAY_START;

/// The position of the body hidden below the horizon.
pub const PARKED: Position = Position { x: -50., y: 120. };

/// A position in the scene, in percent of its width and height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Position {
    /// From the left edge.
    pub x: f64,
    /// From the top edge.
    pub y: f64,
}

/// Returns the position on the sky arc for the provided progress, clamped to `[0, 1]`.
///
/// The arc starts at `(-20, 80)`, culminates at `(50, 20)` and ends at `(120, 80)`.
pub fn arc(progress: f64) -> Position {
    let progress = progress.clamp(0., 1.);
    Position {
        x: -20. + progress * 140.,
        y: 80. - (progress * PI).sin() * 60.,
    }
}

/// Returns whether the time is between 19:00 and 06:00.
#[inline]
pub fn is_night(time: CanonicalTime) -> bool {
    time.hours() >= 19 || time.hours() < 6
}

/// The part of the day the sky colors are computed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkyBand {
    /// From 05:00 to 06:00.
    PreDawn,
    /// From 06:00 to 07:00.
    Dawn,
    /// From 07:00 to 17:00.
    Day,
    /// From 17:00 to 19:00.
    Dusk,
    /// From 19:00 to 21:00.
    Evening,
    /// From 21:00 to 05:00.
    Night,
}

/// Returns the band of the provided fractional hour of the day.
pub fn sky_band(hours: f64) -> SkyBand {
    match hours {
        h if (5. ..6.).contains(&h) => SkyBand::PreDawn,
        h if (6. ..7.).contains(&h) => SkyBand::Dawn,
        h if (7. ..17.).contains(&h) => SkyBand::Day,
        h if (17. ..19.).contains(&h) => SkyBand::Dusk,
        h if (19. ..21.).contains(&h) => SkyBand::Evening,
        _ => SkyBand::Night,
    }
}

/// A color of the sky gradient.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorStop {
    /// A fixed color, like `#87CEEB`.
    Hex(&'static str),
    /// A color with a varying opacity.
    Rgba {
        /// Red.
        r: u8,
        /// Green.
        g: u8,
        /// Blue.
        b: u8,
        /// The opacity, rounded to the thousandth.
        a: f64,
    },
}

fn rgba(r: u8, g: u8, b: u8, a: f64) -> ColorStop {
    ColorStop::Rgba {
        r,
        g,
        b,
        a: (a * 1000.).round() / 1000.,
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorStop::Hex(hex) => f.write_str(hex),
            ColorStop::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a})"),
        }
    }
}

/// The top-to-bottom gradient of the sky.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SkyGradient {
    /// The band the gradient was computed for.
    pub band: SkyBand,
    /// The colors, from the top of the sky to the horizon.
    pub stops: [ColorStop; 3],
}

impl fmt::Display for SkyGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [top, middle, horizon] = &self.stops;
        write!(f, "linear-gradient(to bottom, {top}, {middle}, {horizon})")
    }
}

/// Returns the sky gradient for the provided time. The seconds are ignored.
pub fn sky_gradient(time: CanonicalTime) -> SkyGradient {
    let hours = time.fractional_hours();
    let band = sky_band(hours);

    let stops = match band {
        SkyBand::PreDawn => {
            let p = hours - 5.;
            [
                rgba(15, 32, 39, 1. - p * 0.7),
                rgba(44, 83, 100, 0.8 - p * 0.6),
                rgba(255, 126, 95, 0.3 * p),
            ]
        }
        SkyBand::Dawn => {
            let p = hours - 6.;
            [
                rgba(255, 126, 95, 0.3 + p * 0.7),
                rgba(254, 180, 123, 0.4 + p * 0.6),
                rgba(135, 206, 235, 0.2 + p * 0.8),
            ]
        }
        SkyBand::Day => [
            ColorStop::Hex("#64b3f4"),
            ColorStop::Hex("#87CEEB"),
            ColorStop::Hex("#98FB98"),
        ],
        SkyBand::Dusk => {
            let p = (hours - 17.) / 2.;
            [
                rgba(255, 107, 107, 1. - p * 0.5),
                rgba(255, 167, 38, 1. - p * 0.7),
                rgba(44, 83, 100, 0.3 + p * 0.7),
            ]
        }
        SkyBand::Evening => {
            let p = (hours - 19.) / 2.;
            [
                rgba(44, 83, 100, 1. - p * 0.3),
                rgba(32, 58, 67, 0.8 + p * 0.2),
                rgba(15, 32, 39, 0.6 + p * 0.4),
            ]
        }
        SkyBand::Night => [
            ColorStop::Hex("#0f2027"),
            ColorStop::Hex("#203a43"),
            ColorStop::Hex("#2c5364"),
        ],
    };

    SkyGradient { band, stops }
}

/// Returns the opacity of the stars, from 0 to 1. The seconds are ignored.
///
/// The stars fade in from 17:00 to 19:00, stay visible until 05:00, then fade out
/// until 07:00.
pub fn star_opacity(time: CanonicalTime) -> f64 {
    let hours = time.fractional_hours();

    if !(5. ..19.).contains(&hours) {
        1.
    } else if hours >= 17. {
        (hours - 17.) / 2.
    } else if hours < 7. {
        1. - (hours - 5.) / 2.
    } else {
        0.
    }
}

/// The whole scene for a given time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    /// The 24-hour `HH:MM:SS` readout.
    pub readout: String,
    /// Whether it's between 19:00 and 06:00.
    pub is_night: bool,
    /// The position of the sun.
    pub sun: Position,
    /// The position of the moon.
    pub moon: Position,
    /// The sky gradient.
    pub sky: SkyGradient,
    /// The sky gradient, as a CSS `linear-gradient`.
    pub sky_css: String,
    /// The opacity of the stars.
    pub star_opacity: f64,
}

/// Returns the scene for the provided time.
pub fn scene(time: CanonicalTime) -> Scene {
    let minutes = time.total_minutes() as f64;
    let is_night = is_night(time);

    let (sun, moon) = if is_night {
        let into_night = if time.hours() >= 19 {
            minutes - DAY_END
        } else {
            minutes + (24. * 60. - DAY_END)
        };
        (PARKED, arc(into_night / (NIGHT_END - DAY_END)))
    } else {
        (arc((minutes - DAY_START) / (DAY_END - DAY_START)), PARKED)
    };

    let sky = sky_gradient(time);

    Scene {
        readout: codec::format_24h(time),
        is_night,
        sun,
        moon,
        sky_css: sky.to_string(),
        sky,
        star_opacity: star_opacity(time),
    }
}

#[cfg(test)]
mod tests {
    use super::{PARKED, Position, SkyBand, scene, sky_band, sky_gradient, star_opacity};
    use crate::CanonicalTime;

    fn t(h: u8, m: u8) -> CanonicalTime {
        CanonicalTime::new(h, m, 0).unwrap()
    }

    #[test]
    fn sun_culminates_mid_day() {
        let s = scene(t(12, 30));
        assert!(!s.is_night);
        assert_eq!(s.sun, Position { x: 50., y: 20. });
        assert_eq!(s.moon, PARKED);
    }

    #[test]
    fn sun_rises_at_six() {
        let s = scene(t(6, 0));
        assert_eq!(s.sun, Position { x: -20., y: 80. });
    }

    #[test]
    fn moon_culminates_mid_night() {
        let s = scene(t(0, 30));
        assert!(s.is_night);
        assert_eq!(s.moon, Position { x: 50., y: 20. });
        assert_eq!(s.sun, PARKED);

        let s = scene(t(19, 0));
        assert_eq!(s.moon, Position { x: -20., y: 80. });
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(sky_band(4.99), SkyBand::Night);
        assert_eq!(sky_band(5.), SkyBand::PreDawn);
        assert_eq!(sky_band(6.), SkyBand::Dawn);
        assert_eq!(sky_band(7.), SkyBand::Day);
        assert_eq!(sky_band(17.), SkyBand::Dusk);
        assert_eq!(sky_band(19.), SkyBand::Evening);
        assert_eq!(sky_band(21.), SkyBand::Night);
    }

    #[test]
    fn pre_dawn_gradient() {
        assert_eq!(
            sky_gradient(t(5, 30)).to_string(),
            "linear-gradient(to bottom, rgba(15, 32, 39, 0.65), \
                rgba(44, 83, 100, 0.5), rgba(255, 126, 95, 0.15))"
        );
    }

    #[test]
    fn dawn_gradient() {
        assert_eq!(
            sky_gradient(t(6, 30)).to_string(),
            "linear-gradient(to bottom, rgba(255, 126, 95, 0.65), \
                rgba(254, 180, 123, 0.7), rgba(135, 206, 235, 0.6))"
        );
    }

    #[test]
    fn dusk_gradient() {
        assert_eq!(
            sky_gradient(t(17, 30)).to_string(),
            "linear-gradient(to bottom, rgba(255, 107, 107, 0.875), \
                rgba(255, 167, 38, 0.825), rgba(44, 83, 100, 0.475))"
        );
    }

    #[test]
    fn evening_gradient() {
        assert_eq!(
            sky_gradient(t(20, 0)).to_string(),
            "linear-gradient(to bottom, rgba(44, 83, 100, 0.85), \
                rgba(32, 58, 67, 0.9), rgba(15, 32, 39, 0.8))"
        );
    }

    #[test]
    fn fixed_gradients() {
        assert_eq!(
            sky_gradient(t(12, 0)).to_string(),
            "linear-gradient(to bottom, #64b3f4, #87CEEB, #98FB98)"
        );
        assert_eq!(
            sky_gradient(t(23, 0)).to_string(),
            "linear-gradient(to bottom, #0f2027, #203a43, #2c5364)"
        );
    }

    #[test]
    fn stars() {
        assert_eq!(star_opacity(t(23, 0)), 1.);
        assert_eq!(star_opacity(t(4, 59)), 1.);
        assert_eq!(star_opacity(t(6, 0)), 0.5);
        assert_eq!(star_opacity(t(12, 0)), 0.);
        assert_eq!(star_opacity(t(18, 0)), 0.5);
    }

    #[test]
    fn stars_at_band_edges() {
        assert_eq!(star_opacity(t(5, 0)), 1.);
        assert_eq!(star_opacity(t(7, 0)), 0.);
        assert_eq!(star_opacity(t(17, 0)), 0.);
        assert_eq!(star_opacity(t(19, 0)), 1.);
    }

    #[test]
    fn readout_is_24_hour() {
        assert_eq!(scene(t(21, 5)).readout, "21:05:00");
    }
}
