#![no_std]

pub mod color;
pub mod encoder;
pub mod error;
pub mod fade;
pub mod math8;
pub mod sequence;
pub mod signal;
pub mod strip;
pub mod timing;

pub use encoder::encode_frame;
pub use error::{BufferTooSmall, Error};
pub use fade::{FadeConfig, FadeController, FadePhase};
pub use sequence::{ColorCheckConfig, run_color_check};
pub use signal::{StopFlag, TransferComplete};
pub use strip::{DEFAULT_COMPLETION_MARGIN, StripConfig, Ws2812b};
pub use timing::{BIT_TIME_NS, DEFAULT_LATCH_PULSES, PulseTiming, PwmChannel, pulse_count};

pub use color::Rgb;
pub use math8::scale_brightness;
pub use embassy_time::Duration;

/// Timed pulse output
///
/// Implement this trait on top of a timer PWM channel fed by DMA (or any
/// peripheral that can replay a duty sequence at the bit rate). The driver is
/// generic over this trait.
pub trait PulseTransport {
    /// Error returned when a transfer cannot be started
    type Error;

    /// Start replaying `pulses` on `channel` in the background
    ///
    /// Each value is the compare value for one bit period. The
    /// implementation must raise the shared
    /// [`TransferComplete`] exactly once after the last value went out. The
    /// driver leaves `pulses` untouched until that happened.
    fn start(&mut self, channel: PwmChannel, pulses: &[u16]) -> Result<(), Self::Error>;

    /// Stop the output on `channel`
    ///
    /// Called after every transfer, including ones that timed out.
    fn stop(&mut self, channel: PwmChannel);
}
