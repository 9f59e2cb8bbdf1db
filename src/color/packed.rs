use crate::color::Rgb;

/// Pack separate channels into a `0xRRGGBB` color.
///
/// The packed layout is always RGB, whatever order the strip expects on the wire.
#[inline]
pub const fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_red(color: u32) -> u8 {
    (color >> 16) as u8
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_green(color: u32) -> u8 {
    (color >> 8) as u8
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_blue(color: u32) -> u8 {
    color as u8
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: unpack_red(color),
        g: unpack_green(color),
        b: unpack_blue(color),
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    pack(color.r, color.g, color.b)
}
