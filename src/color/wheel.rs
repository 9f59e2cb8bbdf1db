use crate::color::pack;

/// Sample the color wheel at `position`.
///
/// Three 85-wide bands ramp red to blue, blue to green and green back to
/// red. Positions 85 and 170 land exactly on band boundaries.
pub const fn wheel(position: u8) -> u32 {
    let pos = 255 - position;
    if pos < 85 {
        return pack(255 - pos * 3, 0, pos * 3);
    }
    if pos < 170 {
        let pos = pos - 85;
        return pack(0, pos * 3, 255 - pos * 3);
    }
    let pos = pos - 170;
    pack(pos * 3, 255 - pos * 3, 0)
}
