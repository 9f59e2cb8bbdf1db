//! Flush-time output filters
//!
//! Filters run on the staging copy handed to the transport, never on the
//! chain's stored frame, so changing them does not require a re-render.

use crate::color::Rgb;

mod brightness;
mod gamma;

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&self, frame: &mut [Rgb]);
}

pub use brightness::BrightnessFilter;
pub use gamma::GammaFilter;

#[derive(Debug, Clone, Copy)]
pub struct FilterConfig {
    /// Global brightness (0-255)
    pub brightness: u8,
    /// Run each channel through the gamma curve before scaling
    pub gamma_correct: bool,
}

/// Filter processor - applies post-processing to frames
///
/// Gamma correction runs first, brightness scaling last.
#[derive(Debug, Clone)]
pub struct FilterProcessor {
    /// Brightness filter
    pub brightness: BrightnessFilter,
    /// Gamma filter
    pub gamma: GammaFilter,
}

impl FilterProcessor {
    pub const fn new(config: &FilterConfig) -> Self {
        Self {
            brightness: BrightnessFilter::new(config.brightness),
            gamma: GammaFilter::new(config.gamma_correct),
        }
    }

    /// Apply all filters to a frame
    pub fn apply(&self, frame: &mut [Rgb]) {
        self.gamma.apply(frame);
        self.brightness.apply(frame);
    }
}
