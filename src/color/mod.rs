mod gamma;
mod gradient;
mod hsv;
mod packed;
mod wheel;

use smart_leds::RGB8;

pub use gamma::{gamma8, gamma32, gamma_rgb};
pub use gradient::{blend_linear, half_brightness};
pub use hsv::{hsv_to_rgb, hue_to_rgb};
pub use packed::{pack, rgb_from_u32, rgb_to_u32, unpack_blue, unpack_green, unpack_red};
pub use wheel::wheel;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
