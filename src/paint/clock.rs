use core::fmt::Write;

use heapless::String;

use super::Paint;
use crate::color::{Rgb, half_brightness};

/// Digits in `HHMM`
pub const CLOCK_DIGITS: usize = 4;

/// Hours in one color, minutes in a color that dims on odd seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockPaint {
    hours: Rgb,
    minutes: Rgb,
    first_minute_unit: usize,
}

impl ClockPaint {
    /// Create a clock painter for a chain of `units` displays
    ///
    /// Minutes sit on the last two units. Chains shorter than four units
    /// keep the leading digits, so the minutes start at unit 2 there.
    pub const fn new(hours: Rgb, minutes: Rgb, seconds: u8, units: usize) -> Self {
        let laid_out = if units > CLOCK_DIGITS { units } else { CLOCK_DIGITS };
        Self {
            hours,
            minutes: if seconds % 2 == 1 {
                half_brightness(minutes)
            } else {
                minutes
            },
            first_minute_unit: laid_out - 2,
        }
    }
}

impl Paint for ClockPaint {
    fn color_at(&self, unit: usize, _pixel: usize) -> Rgb {
        if unit >= self.first_minute_unit {
            self.minutes
        } else {
            self.hours
        }
    }
}

/// Build `HHMM`, zero padded, right aligned in `units` cells
///
/// The text is cut to `units` characters, so chains shorter than four units
/// keep the leading digits. `N` must cover `units`; anything past it is
/// dropped.
pub fn clock_text<const N: usize>(hours: u8, minutes: u8, units: usize) -> String<N> {
    let mut digits: String<8> = String::new();
    // 8 bytes fit any pair of u8 values
    if write!(digits, "{:02}{:02}", hours, minutes).is_err() {
        return String::new();
    }

    let mut text = String::new();
    let padding = units.saturating_sub(digits.len());
    for ch in core::iter::repeat_n(' ', padding).chain(digits.chars()).take(units) {
        if text.push(ch).is_err() {
            break;
        }
    }
    text
}
