//! Character to seven-segment bitmask tables
//!
//! Bits 0-6 map to segments A-G, bit 7 is the decimal point. Two tables are
//! kept in lockstep: the default one prefers lower-case shapes, the forced
//! upper-case one swaps in capital shapes for `b`, `d`, `n`, `o` and `r`.

/// Number of glyphs a display unit can show.
pub const ALPHABET_SIZE: usize = 32;

/// Segment on/off pattern for a single display unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SegmentCode(u8);

impl SegmentCode {
    /// All segments off
    pub const BLANK: Self = Self(0);
    /// Only the decimal point lit
    pub const DECIMAL_POINT: Self = Self(DECIMAL_POINT_BIT);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if `segment` (0-6 for A-G, 7 for the decimal point) is lit.
    pub const fn is_lit(self, segment: usize) -> bool {
        segment < 8 && self.0 & (1 << segment) != 0
    }

    pub const fn has_decimal_point(self) -> bool {
        self.0 & DECIMAL_POINT_BIT != 0
    }

    #[must_use]
    pub const fn with_decimal_point(self) -> Self {
        Self(self.0 | DECIMAL_POINT_BIT)
    }
}

const DECIMAL_POINT_BIT: u8 = 0b1000_0000;

const GLYPHS: [(char, u8); ALPHABET_SIZE] = [
    ('0', 0b0011_1111),
    ('1', 0b0000_0110),
    ('2', 0b0101_1011),
    ('3', 0b0100_1111),
    ('4', 0b0110_0110),
    ('5', 0b0110_1101),
    ('6', 0b0111_1100),
    ('7', 0b0000_0111),
    ('8', 0b0111_1111),
    ('9', 0b0110_0111),
    ('a', 0b0111_0111),
    ('b', 0b0111_1100),
    ('c', 0b0011_1001),
    ('d', 0b0101_1110),
    ('e', 0b0111_1001),
    ('f', 0b0111_0001),
    ('g', 0b0110_0111),
    ('h', 0b0111_0110),
    ('i', 0b0011_0000),
    ('j', 0b0001_1110),
    ('l', 0b0011_1000),
    ('n', 0b0101_0100),
    ('o', 0b0101_1100),
    ('p', 0b0111_0011),
    ('q', 0b0110_0111),
    ('r', 0b0101_0000),
    ('s', 0b0110_1101),
    ('u', 0b0011_1110),
    ('x', 0b0111_0110),
    ('y', 0b0110_1110),
    ('-', 0b0100_0000),
    (' ', 0b0000_0000),
];

// Same order as `GLYPHS`, only the capital shapes differ.
const GLYPHS_UPPER: [(char, u8); ALPHABET_SIZE] = [
    ('0', 0b0011_1111),
    ('1', 0b0000_0110),
    ('2', 0b0101_1011),
    ('3', 0b0100_1111),
    ('4', 0b0110_0110),
    ('5', 0b0110_1101),
    ('6', 0b0111_1100),
    ('7', 0b0000_0111),
    ('8', 0b0111_1111),
    ('9', 0b0110_0111),
    ('a', 0b0111_0111),
    ('b', 0b0111_1111),
    ('c', 0b0011_1001),
    ('d', 0b0011_1111),
    ('e', 0b0111_1001),
    ('f', 0b0111_0001),
    ('g', 0b0110_0111),
    ('h', 0b0111_0110),
    ('i', 0b0011_0000),
    ('j', 0b0001_1110),
    ('l', 0b0011_1000),
    ('n', 0b0011_0111),
    ('o', 0b0011_1111),
    ('p', 0b0111_0011),
    ('q', 0b0110_0111),
    ('r', 0b0011_0001),
    ('s', 0b0110_1101),
    ('u', 0b0011_1110),
    ('x', 0b0111_0110),
    ('y', 0b0110_1110),
    ('-', 0b0100_0000),
    (' ', 0b0000_0000),
];

/// Look up the segment pattern for `ch`.
///
/// Matching is case-insensitive. Returns `None` for characters the display
/// cannot show; callers render those as blank.
pub fn lookup(ch: char, force_uppercase: bool) -> Option<SegmentCode> {
    let ch = ch.to_ascii_lowercase();
    let table = if force_uppercase {
        &GLYPHS_UPPER
    } else {
        &GLYPHS
    };
    table
        .iter()
        .find(|(glyph, _)| *glyph == ch)
        .map(|&(_, bits)| SegmentCode(bits))
}

/// Get the glyph stored at `index` of the alphabet
///
/// Returns `None` when `index >= ALPHABET_SIZE`.
pub fn glyph_at(index: usize) -> Option<char> {
    GLYPHS.get(index).map(|&(glyph, _)| glyph)
}
