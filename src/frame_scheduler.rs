//! Frame scheduling for animated color-cycle text.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};
use heapless::String;

use crate::cache::MAX_CACHED_TEXT;
use crate::chain::DisplayChain;
use crate::error::{Error, Result};
use crate::transport::LedTransport;

/// Default target frame rate (30 FPS).
pub const DEFAULT_FPS: u32 = 30;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Default wheel positions the pattern shifts per frame.
pub const DEFAULT_OFFSET_STEP: u8 = 1;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Animates a rainbow across the chain by advancing the color-cycle offset
/// once per frame.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = CycleScheduler::new(chain);
/// scheduler.set_text("hello")?;
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep(result.sleep_duration);
/// }
/// ```
pub struct CycleScheduler<T: LedTransport, const MAX_UNITS: usize> {
    chain: DisplayChain<T, MAX_UNITS>,
    text: String<MAX_CACHED_TEXT>,
    offset: u8,
    offset_step: u8,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<T: LedTransport, const MAX_UNITS: usize> CycleScheduler<T, MAX_UNITS> {
    /// Create a new scheduler with an empty text.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (30 FPS) for frame timing.
    pub fn new(chain: DisplayChain<T, MAX_UNITS>) -> Self {
        Self::with_frame_duration(chain, DEFAULT_FRAME_DURATION)
    }

    /// Create a new scheduler with custom frame duration.
    pub fn with_frame_duration(chain: DisplayChain<T, MAX_UNITS>, frame_duration: Duration) -> Self {
        Self {
            chain,
            text: String::new(),
            offset: 0,
            offset_step: DEFAULT_OFFSET_STEP,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Set how far the wheel moves between frames.
    #[must_use]
    pub fn with_offset_step(mut self, step: u8) -> Self {
        self.offset_step = step;
        self
    }

    /// Replace the animated text.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.text = String::try_from(text).map_err(|()| Error::TextTooLong {
            len: text.len(),
            capacity: MAX_CACHED_TEXT,
        })?;
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Wheel offset the next frame will be drawn with.
    pub const fn offset(&self) -> u8 {
        self.offset
    }

    /// Draw one frame and return timing information.
    ///
    /// If we've fallen more than two frames behind, the schedule restarts
    /// from `now` instead of bursting to catch up.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        self.chain.render_color_cycle(&self.text, self.offset);
        self.offset = self.offset.wrapping_add(self.offset_step);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the chain.
    pub const fn chain(&self) -> &DisplayChain<T, MAX_UNITS> {
        &self.chain
    }

    /// Get a mutable reference to the chain.
    pub const fn chain_mut(&mut self) -> &mut DisplayChain<T, MAX_UNITS> {
        &mut self.chain
    }

    /// Release the chain.
    pub fn into_chain(self) -> DisplayChain<T, MAX_UNITS> {
        self.chain
    }
}
