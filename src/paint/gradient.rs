//! Two-color linear gradients over the logical pixel grid
//!
//! Both directions truncate per channel. The vertical blend spans a fixed
//! ten rows, the horizontal one spans six columns per unit in the chain.

use super::Paint;
use crate::{
    color::{Rgb, blend_linear},
    geometry::{COLUMNS_PER_UNIT, GRADIENT_ROWS, column_of, row_of},
};

/// Blends from `top` to `bottom` by pixel row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalGradientPaint {
    top: Rgb,
    bottom: Rgb,
}

impl VerticalGradientPaint {
    pub const fn new(top: Rgb, bottom: Rgb) -> Self {
        Self { top, bottom }
    }
}

impl Paint for VerticalGradientPaint {
    fn color_at(&self, _unit: usize, pixel: usize) -> Rgb {
        blend_linear(self.top, self.bottom, row_of(pixel), GRADIENT_ROWS)
    }
}

/// Blends from `left` to `right` across every unit of the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalGradientPaint {
    left: Rgb,
    right: Rgb,
    columns: u32,
}

impl HorizontalGradientPaint {
    /// Create a gradient spanning a chain of `units` displays
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(left: Rgb, right: Rgb, units: usize) -> Self {
        Self {
            left,
            right,
            columns: units as u32 * COLUMNS_PER_UNIT,
        }
    }
}

impl Paint for HorizontalGradientPaint {
    fn color_at(&self, unit: usize, pixel: usize) -> Rgb {
        blend_linear(self.left, self.right, column_of(unit, pixel), self.columns)
    }
}
