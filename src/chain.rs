use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::cache::GlyphCache;
use crate::color::{BLACK, Rgb};
use crate::error::{Error, Result};
use crate::filter::{FilterConfig, FilterProcessor};
use crate::geometry::{LEDS_PER_UNIT, SEGMENT_PIXELS};
use crate::glyph::{self, ALPHABET_SIZE, SegmentCode};
use crate::paint::{
    ClockPaint, ColorCyclePaint, HorizontalGradientPaint, Paint, Painter, SolidPaint,
    VerticalGradientPaint, clock_text,
};
use crate::transport::LedTransport;

/// LEDs of one display unit, in segment order
pub type UnitLeds = [Rgb; LEDS_PER_UNIT];

/// Configuration for a display chain
#[derive(Debug, Clone, Copy)]
pub struct ChainConfig {
    /// Number of display units wired in series
    pub units: usize,
    /// Brightness used until `begin` supplies one
    pub brightness: u8,
    /// Use the capital glyph shapes
    pub force_uppercase: bool,
    /// Gamma-correct colors before they reach the transport
    pub gamma_correct: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            units: 4,
            brightness: 90,
            force_uppercase: false,
            gamma_correct: false,
        }
    }
}

/// A series of seven-segment display units sharing one LED data line
///
/// `MAX_UNITS` bounds how many units the chain can be configured with. Every
/// render call rewrites the whole frame and flushes it to the transport.
/// Render calls before [`begin`](Self::begin) succeeds are ignored.
pub struct DisplayChain<T: LedTransport, const MAX_UNITS: usize> {
    // External dependencies and configuration
    transport: T,
    units: usize,
    force_uppercase: bool,

    // Internal state
    ready: bool,
    cache: GlyphCache<MAX_UNITS>,
    frame: Vec<UnitLeds, MAX_UNITS>,
    output: Vec<UnitLeds, MAX_UNITS>,

    // Internal dependencies
    filters: FilterProcessor,
}

impl<T: LedTransport, const MAX_UNITS: usize> DisplayChain<T, MAX_UNITS> {
    /// Create a chain of `config.units` displays, not yet ready to render
    pub fn new(config: &ChainConfig, transport: T) -> Result<Self> {
        if config.units == 0 {
            return Err(Error::ZeroUnits);
        }
        let capacity_error = Error::CapacityExceeded {
            requested: config.units,
            capacity: MAX_UNITS,
        };

        let mut frame: Vec<UnitLeds, MAX_UNITS> = Vec::new();
        frame
            .resize(config.units, [BLACK; LEDS_PER_UNIT])
            .map_err(|()| capacity_error)?;
        let output = frame.clone();

        Ok(Self {
            transport,
            units: config.units,
            force_uppercase: config.force_uppercase,
            ready: false,
            cache: GlyphCache::new(config.units),
            frame,
            output,
            filters: FilterProcessor::new(&FilterConfig {
                brightness: config.brightness,
                gamma_correct: config.gamma_correct,
            }),
        })
    }

    /// Start the transport and mark the chain ready
    ///
    /// On failure the chain stays not ready and renders remain no-ops.
    pub fn begin(&mut self, brightness: u8) -> Result<()> {
        if let Err(err) = self.transport.begin() {
            self.ready = false;
            #[cfg(feature = "esp32-log")]
            println!("[DisplayChain.begin] transport setup failed: {}", err);
            return Err(err.into());
        }

        self.filters.brightness.set(brightness);
        self.cache.invalidate();
        self.frame.fill([BLACK; LEDS_PER_UNIT]);
        self.ready = true;
        #[cfg(feature = "esp32-log")]
        println!(
            "[DisplayChain.begin] {} units ready, brightness {}",
            self.units, brightness
        );

        self.show();
        Ok(())
    }

    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Set global brightness, applied from the next flush on
    pub fn set_brightness(&mut self, brightness: u8) {
        self.filters.brightness.set(brightness);
    }

    pub const fn brightness(&self) -> u8 {
        self.filters.brightness.brightness()
    }

    /// Switch between lower-case and capital glyph shapes
    pub fn set_force_uppercase(&mut self, force: bool) {
        self.force_uppercase = force;
    }

    pub const fn is_force_uppercase(&self) -> bool {
        self.force_uppercase
    }

    pub fn set_gamma_correct(&mut self, enabled: bool) {
        self.filters.gamma.set_enabled(enabled);
    }

    /// Number of display units in the chain
    pub const fn unit_count(&self) -> usize {
        self.units
    }

    pub const fn led_count(&self) -> usize {
        self.units * LEDS_PER_UNIT
    }

    /// Unfiltered colors of every LED, in chain order
    pub fn leds(&self) -> &[Rgb] {
        self.frame.as_flattened()
    }

    /// Segment codes of the last rendered text
    pub fn segment_codes(&self) -> &[SegmentCode] {
        self.cache.codes()
    }

    pub const fn glyph_cache(&self) -> &GlyphCache<MAX_UNITS> {
        &self.cache
    }

    pub const fn alphabet_size(&self) -> usize {
        ALPHABET_SIZE
    }

    /// Glyph at `index` of the supported alphabet, `None` past its end
    pub fn glyph_at(&self, index: usize) -> Option<char> {
        glyph::glyph_at(index)
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub const fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Show `text` in a single color
    pub fn render_solid(&mut self, text: &str, color: Rgb) {
        self.render(text, &Painter::Solid(SolidPaint::new(color)));
    }

    /// Show `text` blended from `top` to `bottom` on every unit
    pub fn render_vertical_gradient(&mut self, text: &str, top: Rgb, bottom: Rgb) {
        self.render(
            text,
            &Painter::VerticalGradient(VerticalGradientPaint::new(top, bottom)),
        );
    }

    /// Show `text` blended from `left` to `right` across the whole chain
    pub fn render_horizontal_gradient(&mut self, text: &str, left: Rgb, right: Rgb) {
        let paint = HorizontalGradientPaint::new(left, right, self.units);
        self.render(text, &Painter::HorizontalGradient(paint));
    }

    /// Show `text` walking the color wheel from `offset`
    pub fn render_color_cycle(&mut self, text: &str, offset: u8) {
        self.render(text, &Painter::ColorCycle(ColorCyclePaint::new(offset)));
    }

    /// Show `HHMM` right aligned, minutes dimmed on odd seconds
    pub fn render_clock(
        &mut self,
        hours: u8,
        minutes: u8,
        seconds: u8,
        hours_color: Rgb,
        minutes_color: Rgb,
    ) {
        if !self.ready {
            return;
        }
        let text = clock_text::<MAX_UNITS>(hours, minutes, self.units);
        let paint = ClockPaint::new(hours_color, minutes_color, seconds, self.units);
        self.render(&text, &Painter::Clock(paint));
    }

    /// Compose a frame for `text` with `painter` and flush it
    pub fn render(&mut self, text: &str, painter: &Painter) {
        if !self.ready {
            return;
        }

        self.frame.fill([BLACK; LEDS_PER_UNIT]);
        let codes = self.cache.resolve(text, self.force_uppercase);

        for (unit, (leds, code)) in self.frame.iter_mut().zip(codes).enumerate() {
            for (segment, pixels) in SEGMENT_PIXELS.iter().enumerate() {
                if !code.is_lit(segment) {
                    continue;
                }
                for &pixel in *pixels {
                    leds[pixel] = painter.color_at(unit, pixel);
                }
            }
        }

        self.show();
    }

    /// Flush the stored frame through the filters to the transport
    ///
    /// Useful after changing brightness without re-rendering.
    pub fn show(&mut self) {
        if !self.ready {
            return;
        }
        self.output.copy_from_slice(&self.frame);
        let output = self.output.as_flattened_mut();
        self.filters.apply(output);
        self.transport.write(output);
    }
}
