//! LED transport capability
//!
//! The chain hands every finished, filtered frame to a transport. Two
//! variants exist: one forwarding to any `smart-leds` driver, and one that
//! encodes the frame into high/low pulse pairs for a timing peripheral.

use derive_more::{Display, Error};

use crate::color::Rgb;

mod pulse;
mod smart_leds_writer;

pub use pulse::{PULSES_PER_LED, Pulse, PulseSink, PulseTransport, encode_pulses};
pub use smart_leds_writer::SmartLedsTransport;

/// Failure reported by an LED transport
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    #[display("LED peripheral could not be initialized")]
    Setup,
    #[display("LED peripheral rejected the frame")]
    Write,
}

/// Abstract LED transport trait
///
/// Implement this trait to support different hardware platforms.
/// The display chain is generic over this trait.
pub trait LedTransport {
    /// One-time hardware setup, called from `DisplayChain::begin`
    fn begin(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    /// Write colors to the LED strip
    ///
    /// Colors arrive in chain order, already brightness scaled. The call is
    /// fire-and-forget from the chain's point of view.
    fn write(&mut self, colors: &[Rgb]);
}
