/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0), rounding to nearest
///
/// Computes `round(value * scale / 255)` in integer math. The product is
/// never exactly halfway between two outputs because 255 is odd, so adding
/// 127 before the division rounds the same way a float `round` would.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_round(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16 + 127) / 255) as u8
}

/// Advance a color-wheel index by `step` for each of `count` pixels
///
/// The index wraps at 256, matching the wheel's 8-bit domain.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn wheel_index(offset: u8, step: u8, count: usize) -> u8 {
    offset.wrapping_add(step.wrapping_mul(count as u8))
}

/// Linear interpolation between two 8-bit values
///
/// `frac` 0 yields `a`, each step moves 1/256 of the way towards `b`. The
/// result is floored, so `frac == 128` halves the distance exactly.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn lerp8(a: u8, b: u8, frac: u8) -> u8 {
    let delta = (b as i32 - a as i32) * frac as i32;
    (a as i32 + (delta >> 8)) as u8
}
