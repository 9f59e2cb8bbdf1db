//! Fixed layout of one seven-segment display unit
//!
//! Each unit carries 15 LEDs: two per segment A-G in segment order, then
//! one for the decimal point.

/// LEDs on a single display unit
pub const LEDS_PER_UNIT: usize = 15;

/// LEDs lighting each of the seven segments
pub const LEDS_PER_SEGMENT: usize = 2;

/// Segments A-G, not counting the decimal point
pub const SEGMENT_COUNT: usize = 7;

/// Index of the decimal-point LED within a unit
pub const DECIMAL_POINT_PIXEL: usize = 14;

/// Logical columns a unit spans in the horizontal gradient
pub const COLUMNS_PER_UNIT: u32 = 6;

/// Logical rows spanned by the vertical gradient
pub const GRADIENT_ROWS: u32 = 10;

/// LED indices within a unit belonging to segments A-G and the decimal point
pub const SEGMENT_PIXELS: [&[usize]; SEGMENT_COUNT + 1] = [
    &[0, 1],
    &[2, 3],
    &[4, 5],
    &[6, 7],
    &[8, 9],
    &[10, 11],
    &[12, 13],
    &[DECIMAL_POINT_PIXEL],
];

/// Logical `(x, y)` of every LED within a unit, used for gradients
pub const PIXEL_POSITIONS: [(u8, u8); LEDS_PER_UNIT] = [
    (1, 0),
    (2, 0),
    (3, 1),
    (3, 2),
    (3, 4),
    (3, 5),
    (1, 6),
    (2, 6),
    (0, 5),
    (0, 4),
    (0, 2),
    (0, 1),
    (1, 3),
    (2, 3),
    (4, 7),
];

/// Horizontal gradient coordinate of `pixel` on unit `unit`
#[allow(clippy::cast_possible_truncation)]
pub const fn column_of(unit: usize, pixel: usize) -> u32 {
    PIXEL_POSITIONS[pixel].0 as u32 + COLUMNS_PER_UNIT * unit as u32
}

/// Vertical gradient coordinate of `pixel`, the same on every unit
pub const fn row_of(pixel: usize) -> u32 {
    PIXEL_POSITIONS[pixel].1 as u32
}
