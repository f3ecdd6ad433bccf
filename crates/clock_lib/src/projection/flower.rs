//! The flower clock. Each flower starts full and loses a petal per unit, so the petals left
//! show the time remaining.

use serde::Serialize;

use crate::time::CanonicalTime;

/// A flower and how many of its petals have fallen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Flower {
    /// The number of petals of the full flower.
    pub total: u8,
    /// The number of fallen petals.
    pub fallen: u8,
}

impl Flower {
    fn new(total: u8, value: u8) -> Self {
        Self {
            total,
            fallen: total.saturating_sub(value),
        }
    }

    /// Returns whether the petal at the provided index has fallen.
    ///
    /// The petals fall in index order.
    #[inline]
    pub fn is_fallen(&self, index: u8) -> bool {
        index < self.fallen
    }

    /// The number of petals still on the flower.
    #[inline]
    pub fn remaining(&self) -> u8 {
        self.total - self.fallen
    }
}

/// The three flowers of the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Petals {
    /// The 12-petal flower of the hours.
    pub hours: Flower,
    /// The 60-petal flower of the minutes.
    pub minutes: Flower,
    /// The 60-petal flower of the seconds.
    pub seconds: Flower,
}

/// Returns the flowers for the provided time.
pub fn petals(time: CanonicalTime) -> Petals {
    Petals {
        hours: Flower::new(12, time.hours12()),
        minutes: Flower::new(60, time.minutes()),
        seconds: Flower::new(60, time.seconds()),
    }
}
