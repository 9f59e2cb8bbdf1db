//! Global brightness scaling
//!
//! Each channel becomes `round(channel * brightness / 255)`.

use super::Filter;
use crate::{color::Rgb, math8::scale_round};

#[derive(Debug, Clone, Copy)]
pub struct BrightnessFilter {
    /// Current brightness value (0-255)
    brightness: u8,
}

impl BrightnessFilter {
    pub const fn new(brightness: u8) -> Self {
        Self { brightness }
    }

    pub const fn brightness(self) -> u8 {
        self.brightness
    }

    pub fn set(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}

impl Filter for BrightnessFilter {
    fn apply(&self, frame: &mut [Rgb]) {
        match self.brightness {
            255 => {}
            0 => frame.fill(Rgb::default()),
            brightness => {
                for pixel in frame.iter_mut() {
                    pixel.r = scale_round(pixel.r, brightness);
                    pixel.g = scale_round(pixel.g, brightness);
                    pixel.b = scale_round(pixel.b, brightness);
                }
            }
        }
    }
}
