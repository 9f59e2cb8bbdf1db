use super::Paint;
use crate::color::Rgb;

/// Fills every lit LED with one color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidPaint {
    color: Rgb,
}

impl SolidPaint {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Paint for SolidPaint {
    fn color_at(&self, _unit: usize, _pixel: usize) -> Rgb {
        self.color
    }
}
