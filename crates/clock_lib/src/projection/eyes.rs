//! The eyes clock: a pair of eyes per field, blinking when their field changes, and
//! pupils following the cursor.

use serde::Serialize;

use crate::time::CanonicalTime;

/// The furthest a pupil moves from the center of its eye, in pixels.
pub const MAX_PUPIL_MOVEMENT: f64 = 8.;

/// The cursor distance from which a pupil reaches its furthest position, in pixels.
pub const MAX_CURSOR_DISTANCE: f64 = 200.;

/// Which pairs of eyes start blinking on a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Blinks {
    /// The hours eyes blink on each new hour.
    pub hours: bool,
    /// The minutes eyes blink on each new minute.
    pub minutes: bool,
    /// The seconds eyes blink on each new second.
    pub seconds: bool,
}

/// Remembers the last value each pair of eyes blinked for, so a field blinks once per change.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlinkTracker {
    last_hour: Option<u8>,
    last_minute: Option<u8>,
    last_second: Option<u8>,
}

impl BlinkTracker {
    /// Returns the blinks for the provided time, and remembers it.
    ///
    /// The hours eyes blink at `HH:00:00`, the minutes eyes at `MM:00`, and the seconds eyes
    /// whenever the seconds differ from the previous update.
    pub fn update(&mut self, time: CanonicalTime) -> Blinks {
        let mut blinks = Blinks::default();
        let hour = time.hours12();

        if time.minutes() == 0 && time.seconds() == 0 && self.last_hour != Some(hour) {
            blinks.hours = true;
            self.last_hour = Some(hour);
        }

        if time.seconds() == 0 && self.last_minute != Some(time.minutes()) {
            blinks.minutes = true;
            self.last_minute = Some(time.minutes());
        }

        if self.last_second != Some(time.seconds()) {
            blinks.seconds = true;
            self.last_second = Some(time.seconds());
        }

        blinks
    }
}

/// Returns the offset of a pupil from the center of its eye, so it looks toward the cursor.
///
/// The pupil moves along the eye-to-cursor direction, proportionally to the cursor distance,
/// up to [`MAX_PUPIL_MOVEMENT`] once the cursor is [`MAX_CURSOR_DISTANCE`] away.
pub fn pupil_offset(eye_center: (f64, f64), cursor: (f64, f64)) -> (f64, f64) {
    let dx = cursor.0 - eye_center.0;
    let dy = cursor.1 - eye_center.1;
    let distance = dx.hypot(dy);

    if distance == 0. {
        return (0., 0.);
    }

    let factor = (distance / MAX_CURSOR_DISTANCE).min(1.) * MAX_PUPIL_MOVEMENT;
    (dx / distance * factor, dy / distance * factor)
}

#[cfg(test)]
mod tests {
    use super::{BlinkTracker, Blinks, MAX_PUPIL_MOVEMENT, pupil_offset};
    use crate::CanonicalTime;

    fn t(h: u8, m: u8, s: u8) -> CanonicalTime {
        CanonicalTime::new(h, m, s).unwrap()
    }

    #[test]
    fn blinks_once_per_change() {
        let mut tracker = BlinkTracker::default();

        assert_eq!(
            tracker.update(t(14, 0, 0)),
            Blinks {
                hours: true,
                minutes: true,
                seconds: true,
            }
        );
        assert_eq!(tracker.update(t(14, 0, 0)), Blinks::default());
        assert_eq!(
            tracker.update(t(14, 0, 1)),
            Blinks {
                seconds: true,
                ..Default::default()
            }
        );
        assert_eq!(
            tracker.update(t(14, 1, 0)),
            Blinks {
                minutes: true,
                seconds: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn hours_use_12_hour_dial() {
        let mut tracker = BlinkTracker::default();
        assert!(tracker.update(t(2, 0, 0)).hours);
        // 14:00 shows the same hour as 02:00.
        assert!(!tracker.update(t(14, 0, 0)).hours);
        assert!(tracker.update(t(15, 0, 0)).hours);
    }

    #[test]
    fn pupil_centered_on_cursor() {
        assert_eq!(pupil_offset((10., 10.), (10., 10.)), (0., 0.));
    }

    #[test]
    fn pupil_clamped() {
        assert_eq!(pupil_offset((0., 0.), (1000., 0.)), (MAX_PUPIL_MOVEMENT, 0.));
        assert_eq!(pupil_offset((0., 0.), (0., -100.)), (0., -4.));
    }
}
