//! Pulse-train encoding for WS2812-class LEDs
//!
//! Every LED becomes 24 pulses in GRB order, most significant bit first.
//! Durations are in ticks of a 100 ns peripheral clock.

use super::{LedTransport, TransportError};
use crate::color::Rgb;

/// Pulses emitted per LED
pub const PULSES_PER_LED: usize = 24;

/// One encoded bit: line high for `high_ticks`, then low for `low_ticks`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub high_ticks: u16,
    pub low_ticks: u16,
}

impl Pulse {
    pub const ONE: Self = Self {
        high_ticks: 8,
        low_ticks: 4,
    };
    pub const ZERO: Self = Self {
        high_ticks: 4,
        low_ticks: 8,
    };

    const fn from_bit(bit: bool) -> Self {
        if bit { Self::ONE } else { Self::ZERO }
    }
}

/// Peripheral that clocks out pulse trains
pub trait PulseSink {
    /// Claim the data pin and configure the peripheral clock
    fn begin(&mut self) -> Result<(), TransportError>;

    /// Emit one frame worth of pulses
    fn send<I: Iterator<Item = Pulse>>(&mut self, pulses: I);
}

/// Encode a frame as pulses, `PULSES_PER_LED` per color
pub fn encode_pulses(colors: &[Rgb]) -> impl Iterator<Item = Pulse> + '_ {
    colors
        .iter()
        .flat_map(|color| [color.g, color.r, color.b])
        .flat_map(|channel| (0..8).rev().map(move |bit| Pulse::from_bit(channel & (1 << bit) != 0)))
}

/// Transport driving a pulse peripheral directly
pub struct PulseTransport<S> {
    sink: S,
}

impl<S: PulseSink> PulseTransport<S> {
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Get a reference to the pulse sink
    pub const fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: PulseSink> LedTransport for PulseTransport<S> {
    fn begin(&mut self) -> Result<(), TransportError> {
        self.sink.begin()
    }

    fn write(&mut self, colors: &[Rgb]) {
        self.sink.send(encode_pulses(colors));
    }
}
