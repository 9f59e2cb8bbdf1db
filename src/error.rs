use derive_more::{Display, Error};

use crate::transport::TransportError;

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while setting up a display chain or its scheduler.
///
/// Rendering itself never fails; these only come out of construction,
/// [`DisplayChain::begin`](crate::DisplayChain::begin) and
/// [`CycleScheduler::set_text`](crate::CycleScheduler::set_text).
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A chain needs at least one display unit
    #[display("display chain must have at least one unit")]
    ZeroUnits,

    /// More units were requested than the chain was compiled to hold
    #[display("requested {requested} units but capacity is {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    /// Text does not fit the scheduler's buffer
    #[display("text of {len} bytes exceeds capacity {capacity}")]
    TextTooLong { len: usize, capacity: usize },

    /// The LED transport failed to start
    #[display("transport setup failed: {_0}")]
    Transport(TransportError),
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}
