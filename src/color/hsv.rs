//! Integer HSV to RGB conversion
//!
//! The 16-bit hue circle is remapped onto 1530 distinct hexcone steps: six
//! 255-wide slices whose last element is dropped, since it equals the first
//! element of the next slice. Pure red is centered on the 16-bit rollover.

use crate::color::pack;

/// Number of distinct hues the 8-bit hexcone can represent
const HUE_STEPS: u32 = 1530;

/// Convert a hue (0-65535), saturation and value to a packed `0xRRGGBB` color.
///
/// Uses fixed-point scaling only, so output is identical on every platform.
#[allow(clippy::cast_possible_truncation)]
pub const fn hsv_to_rgb(hue: u16, sat: u8, val: u8) -> u32 {
    let hue = (hue as u32 * HUE_STEPS + 32_768) / 65_536;

    let (r, g, b): (u32, u32, u32) = if hue < 510 {
        if hue < 255 {
            (255, hue, 0)
        } else {
            (510 - hue, 255, 0)
        }
    } else if hue < 1020 {
        if hue < 765 {
            (0, 255, hue - 510)
        } else {
            (0, 1020 - hue, 255)
        }
    } else if hue < HUE_STEPS {
        if hue < 1275 {
            (hue - 1020, 0, 255)
        } else {
            (255, 0, HUE_STEPS - hue)
        }
    } else {
        // 1530 is the upper half of red
        (255, 0, 0)
    };

    // 1..=256 so that >> 8 stands in for / 255
    let v1 = 1 + val as u32;
    let s1 = 1 + sat as u32;
    let s2 = 255 - sat as u32;

    let r = (((r * s1) >> 8) + s2) * v1;
    let g = (((g * s1) >> 8) + s2) * v1;
    let b = (((b * s1) >> 8) + s2) * v1;

    pack((r >> 8) as u8, (g >> 8) as u8, (b >> 8) as u8)
}

/// Fully saturated, full value color for `hue`
pub const fn hue_to_rgb(hue: u16) -> u32 {
    hsv_to_rgb(hue, 255, 255)
}
