#![no_std]

pub mod cache;
pub mod chain;
pub mod color;
pub mod error;
pub mod filter;
pub mod frame_scheduler;
pub mod geometry;
pub mod glyph;
pub mod math8;
pub mod paint;
pub mod transport;

pub use cache::GlyphCache;
pub use chain::{ChainConfig, DisplayChain};
pub use error::{Error, Result};
pub use filter::{FilterConfig, FilterProcessor};
pub use frame_scheduler::CycleScheduler;
pub use glyph::{ALPHABET_SIZE, SegmentCode};
pub use paint::{Paint, Painter};
pub use transport::{LedTransport, PulseSink, PulseTransport, SmartLedsTransport, TransportError};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};
