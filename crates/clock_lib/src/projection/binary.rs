//! The binary clock, with a column of bits for each field.

use itertools::Itertools as _;
use serde::Serialize;

use crate::time::CanonicalTime;

/// The bits of each field, most significant bit first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BinaryDigits {
    /// The 12-hour hour, on 4 bits.
    pub hours: [u8; 4],
    /// The minutes, on 6 bits.
    pub minutes: [u8; 6],
    /// The seconds, on 6 bits.
    pub seconds: [u8; 6],
}

impl BinaryDigits {
    /// Returns the bits as text, like `1100 101101 000000`.
    pub fn to_bit_string(&self) -> String {
        format!(
            "{} {} {}",
            self.hours.iter().join(""),
            self.minutes.iter().join(""),
            self.seconds.iter().join("")
        )
    }
}

/// Returns the `N` lowest bits of the value, most significant bit first.
pub fn bits<const N: usize>(value: u8) -> [u8; N] {
    let mut out = [0; N];
    for (i, bit) in out.iter_mut().rev().enumerate() {
        *bit = (value >> i) & 1;
    }
    out
}

/// The value of the bit at the provided position, counted from the least significant bit.
#[inline]
pub fn bit_weight(position: u32) -> u32 {
    1 << position
}

/// Returns the bits of the time. The hour is the one shown by a 12-hour clock.
pub fn digits(time: CanonicalTime) -> BinaryDigits {
    BinaryDigits {
        hours: bits(time.hours12()),
        minutes: bits(time.minutes()),
        seconds: bits(time.seconds()),
    }
}

#[cfg(test)]
mod tests {
    use super::{bit_weight, bits, digits};
    use crate::CanonicalTime;

    #[test]
    fn midnight_is_twelve() {
        let d = digits(CanonicalTime::new(0, 45, 0).unwrap());
        assert_eq!(d.hours, [1, 1, 0, 0]);
        assert_eq!(d.minutes, [1, 0, 1, 1, 0, 1]);
        assert_eq!(d.seconds, [0; 6]);
        assert_eq!(d.to_bit_string(), "1100 101101 000000");
    }

    #[test]
    fn max_values() {
        assert_eq!(bits::<6>(59), [1, 1, 1, 0, 1, 1]);
        assert_eq!(bits::<4>(1), [0, 0, 0, 1]);
    }

    #[test]
    fn weights() {
        assert_eq!(bit_weight(0), 1);
        assert_eq!(bit_weight(5), 32);
    }
}
