use super::Paint;
use crate::{
    color::{Rgb, rgb_from_u32, wheel},
    math8::wheel_index,
};

/// Wheel positions advanced per LED within a unit
pub const CYCLE_STEP: u8 = 255 / 28;

/// Walks the color wheel LED by LED, restarting at `offset` on every unit
///
/// Feeding a moving offset on successive frames animates the rainbow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCyclePaint {
    offset: u8,
}

impl ColorCyclePaint {
    pub const fn new(offset: u8) -> Self {
        Self { offset }
    }
}

impl Paint for ColorCyclePaint {
    fn color_at(&self, _unit: usize, pixel: usize) -> Rgb {
        rgb_from_u32(wheel(wheel_index(self.offset, CYCLE_STEP, pixel)))
    }
}
