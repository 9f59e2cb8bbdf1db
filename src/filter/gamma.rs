use super::Filter;
use crate::color::{Rgb, gamma_rgb};

/// Perceptual gamma correction, off unless enabled
#[derive(Debug, Clone, Copy)]
pub struct GammaFilter {
    enabled: bool,
}

impl GammaFilter {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Filter for GammaFilter {
    fn apply(&self, frame: &mut [Rgb]) {
        if !self.enabled {
            return;
        }
        for pixel in frame.iter_mut() {
            *pixel = gamma_rgb(*pixel);
        }
    }
}
