//! Text to segment-code resolution with memoization
//!
//! A '.' folds into the previous unit's decimal point when it can; a leading
//! dot, or a dot following a unit whose point is already lit, takes a unit of
//! its own.

use heapless::{String, Vec};

use crate::glyph::{SegmentCode, lookup};

/// Longest text kept as a cache key. Longer texts are resolved every time.
pub const MAX_CACHED_TEXT: usize = 64;

/// Last resolved text and its segment codes, `N` is the unit capacity
#[derive(Debug, Clone)]
pub struct GlyphCache<const N: usize> {
    capacity: usize,
    text: Option<String<MAX_CACHED_TEXT>>,
    force_uppercase: bool,
    codes: Vec<SegmentCode, N>,
    generation: u32,
}

impl<const N: usize> GlyphCache<N> {
    /// Create an empty cache resolving into at most `capacity` units
    ///
    /// `capacity` is clamped to `N`.
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity: if capacity < N { capacity } else { N },
            text: None,
            force_uppercase: false,
            codes: Vec::new(),
            generation: 0,
        }
    }

    /// Resolve `text` into segment codes, one per display unit
    ///
    /// Returns the previous result untouched when both the text and the glyph
    /// variant are unchanged. Unsupported characters become blank units and
    /// anything past the unit capacity is dropped.
    pub fn resolve(&mut self, text: &str, force_uppercase: bool) -> &[SegmentCode] {
        if !self.is_cached(text, force_uppercase) {
            self.recompute(text, force_uppercase);
        }
        &self.codes
    }

    /// Maximum number of units a resolution can fill
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Codes produced by the last resolution
    pub fn codes(&self) -> &[SegmentCode] {
        &self.codes
    }

    /// Number of recomputations so far
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    /// Forget the cached text so the next resolve recomputes
    pub fn invalidate(&mut self) {
        self.text = None;
    }

    fn is_cached(&self, text: &str, force_uppercase: bool) -> bool {
        self.force_uppercase == force_uppercase
            && self.text.as_ref().is_some_and(|cached| cached.as_str() == text)
    }

    fn recompute(&mut self, text: &str, force_uppercase: bool) {
        self.codes.clear();
        self.generation = self.generation.wrapping_add(1);
        self.force_uppercase = force_uppercase;
        self.text = String::try_from(text).ok();

        for ch in text.chars() {
            if ch == '.' {
                if let Some(last) = self.codes.last_mut() {
                    if !last.has_decimal_point() {
                        *last = last.with_decimal_point();
                        continue;
                    }
                }
                if !self.push(SegmentCode::DECIMAL_POINT) {
                    break;
                }
                continue;
            }

            let code = lookup(ch, force_uppercase).unwrap_or(SegmentCode::BLANK);
            if !self.push(code) {
                break;
            }
        }
    }

    fn push(&mut self, code: SegmentCode) -> bool {
        self.codes.len() < self.capacity && self.codes.push(code).is_ok()
    }
}
