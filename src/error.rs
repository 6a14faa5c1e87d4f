//! Error types returned by the strip driver.

use core::fmt;

/// The pulse buffer cannot hold a full frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BufferTooSmall {
    /// Duty values needed for one frame
    pub required: usize,
    /// Capacity of the buffer
    pub capacity: usize,
}

impl fmt::Display for BufferTooSmall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pulse buffer holds {} duty values, frame needs {}",
            self.capacity, self.required
        )
    }
}

/// Errors reported by [`Ws2812b`](crate::Ws2812b).
///
/// `E` is the error type of the underlying [`PulseTransport`](crate::PulseTransport).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// LED index outside `0..count`
    OutOfRange {
        /// Rejected index
        index: usize,
        /// Number of LEDs in the strip
        count: usize,
    },
    /// The transport did not report completion in time
    TransportTimeout,
    /// The transport refused to start a transfer
    Transport(E),
    /// The pulse buffer is too small for the configured strip
    BufferTooSmall(BufferTooSmall),
}

impl<E> From<BufferTooSmall> for Error<E> {
    fn from(value: BufferTooSmall) -> Self {
        Self::BufferTooSmall(value)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, count } => {
                write!(f, "led index {} out of range (strip has {} leds)", index, count)
            }
            Self::TransportTimeout => write!(f, "transfer did not complete in time"),
            Self::Transport(err) => write!(f, "transport error: {:?}", err),
            Self::BufferTooSmall(err) => err.fmt(f),
        }
    }
}
