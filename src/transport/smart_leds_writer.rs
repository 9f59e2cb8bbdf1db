use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::LedTransport;
use crate::color::Rgb;

/// Transport backed by any `smart-leds` driver
///
/// Write errors from the driver are dropped; the next frame simply tries again.
pub struct SmartLedsTransport<W> {
    writer: W,
}

impl<W> SmartLedsTransport<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the wrapped driver
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Release the wrapped driver
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> LedTransport for SmartLedsTransport<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) {
        if self.writer.write(colors.iter().copied()).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsTransport.write] driver rejected {} leds", colors.len());
        }
    }
}
