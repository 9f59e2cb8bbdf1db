use crate::color::Rgb;
use crate::math8::lerp8;

/// Blend from `a` to `b` along a line of `span` steps.
///
/// `position` 0 yields `a`, `position == span` yields `b`. Each channel is
/// truncated, never rounded. Positions past `span` clamp to `b`.
#[allow(clippy::cast_possible_truncation)]
pub fn blend_linear(a: Rgb, b: Rgb, position: u32, span: u32) -> Rgb {
    if span == 0 {
        return a;
    }
    let position = position.min(span);
    let mix = |from: u8, to: u8| -> u8 {
        ((u32::from(from) * (span - position) + u32::from(to) * position) / span) as u8
    };
    Rgb {
        r: mix(a.r, b.r),
        g: mix(a.g, b.g),
        b: mix(a.b, b.b),
    }
}

/// Halve every channel, truncating
pub const fn half_brightness(color: Rgb) -> Rgb {
    Rgb {
        r: lerp8(0, color.r, 128),
        g: lerp8(0, color.g, 128),
        b: lerp8(0, color.b, 128),
    }
}
