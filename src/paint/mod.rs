//! Per-pixel color policies for each render mode
//!
//! All painters are stored in an enum to avoid trait objects. Each painter
//! implements the `Paint` trait and is asked for the color of every lit LED.

mod clock;
mod color_cycle;
mod gradient;
mod solid;

pub use clock::{CLOCK_DIGITS, ClockPaint, clock_text};
pub use color_cycle::{CYCLE_STEP, ColorCyclePaint};
pub use gradient::{HorizontalGradientPaint, VerticalGradientPaint};
pub use solid::SolidPaint;

use crate::color::Rgb;

pub trait Paint {
    /// Color of LED `pixel` (0-14) on display unit `unit` when it is lit
    fn color_at(&self, unit: usize, pixel: usize) -> Rgb;
}

/// Painter slot - enum containing every render mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Painter {
    /// One color for every lit LED
    Solid(SolidPaint),
    /// Top to bottom blend, repeated on every unit
    VerticalGradient(VerticalGradientPaint),
    /// Left to right blend across the whole chain
    HorizontalGradient(HorizontalGradientPaint),
    /// Color wheel walk, shifted by an offset
    ColorCycle(ColorCyclePaint),
    /// Hours and minutes with a blinking minute color
    Clock(ClockPaint),
}

impl Paint for Painter {
    fn color_at(&self, unit: usize, pixel: usize) -> Rgb {
        match self {
            Self::Solid(paint) => paint.color_at(unit, pixel),
            Self::VerticalGradient(paint) => paint.color_at(unit, pixel),
            Self::HorizontalGradient(paint) => paint.color_at(unit, pixel),
            Self::ColorCycle(paint) => paint.color_at(unit, pixel),
            Self::Clock(paint) => paint.color_at(unit, pixel),
        }
    }
}
