use core::mem::ManuallyDrop;
use core::ptr;

use embassy_time::{Duration, with_timeout};
use heapless::Vec;

use crate::PulseTransport;
use crate::color::{BLACK, Rgb};
use crate::encoder::encode_frame;
use crate::error::{BufferTooSmall, Error};
use crate::signal::TransferComplete;
use crate::timing::{PulseTiming, PwmChannel};

/// Default slack allowed on top of a frame's airtime.
///
/// The wait bound for a transfer is the frame airtime plus this margin, so it
/// grows with the strip length.
pub const DEFAULT_COMPLETION_MARGIN: Duration = Duration::from_millis(50);

/// Configuration for the strip driver
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    /// Bit timing in timer ticks
    pub timing: PulseTiming,
    /// Timer output channel handed to the transport
    pub channel: PwmChannel,
    /// Initial global brightness
    pub brightness: u8,
    /// Slack `send` allows beyond one frame's airtime before giving up.
    /// `None` waits forever.
    pub completion_margin: Option<Duration>,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            timing: PulseTiming::default(),
            channel: PwmChannel::default(),
            brightness: 255,
            completion_margin: Some(DEFAULT_COMPLETION_MARGIN),
        }
    }
}

/// WS2812B strip driven by a PWM transport
///
/// `N` is the number of LEDs, `P` the capacity of the pulse buffer in duty
/// values. `P` must be at least `24 * N + latch_pulses`, see
/// [`pulse_count`](crate::pulse_count).
pub struct Ws2812b<'a, T: PulseTransport, const N: usize, const P: usize> {
    // External dependencies and configuration
    transport: T,
    completion: &'a TransferComplete,
    config: StripConfig,
    completion_timeout: Option<Duration>,

    // Internal state
    colors: [Rgb; N],
    brightness: u8,
    pulses: Vec<u16, P>,
    in_flight: bool,
}

impl<'a, T: PulseTransport, const N: usize, const P: usize> Ws2812b<'a, T, N, P> {
    /// Create a new strip driver
    ///
    /// All LEDs start black. Fails if `P` cannot hold a full frame.
    pub fn new(
        transport: T,
        completion: &'a TransferComplete,
        config: StripConfig,
    ) -> Result<Self, Error<T::Error>> {
        let required = config.timing.frame_len(N);
        if required > P {
            return Err(Error::BufferTooSmall(BufferTooSmall {
                required,
                capacity: P,
            }));
        }
        completion.reset();
        let airtime = config.timing.frame_airtime(N);

        Ok(Self {
            transport,
            completion,
            config,
            completion_timeout: config.completion_margin.map(|margin| airtime + margin),
            colors: [BLACK; N],
            brightness: config.brightness,
            pulses: Vec::new(),
            in_flight: false,
        })
    }

    /// Number of LEDs in the strip
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if the strip has no LEDs
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Set the color of a single LED
    ///
    /// Takes effect on the next [`send`](Self::send).
    pub fn set_color(&mut self, index: usize, color: Rgb) -> Result<(), Error<T::Error>> {
        let Some(led) = self.colors.get_mut(index) else {
            return Err(Error::OutOfRange { index, count: N });
        };
        *led = color;
        Ok(())
    }

    /// Get the stored color of a single LED
    ///
    /// The value is returned as set, without brightness applied.
    pub fn color(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// Get all stored colors
    pub const fn colors(&self) -> &[Rgb; N] {
        &self.colors
    }

    /// Get mutable access to all stored colors
    pub fn colors_mut(&mut self) -> &mut [Rgb; N] {
        &mut self.colors
    }

    /// Set every LED to the same color
    pub fn fill(&mut self, color: Rgb) {
        self.colors = [color; N];
    }

    /// Set every LED to black
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Set the global brightness
    ///
    /// Stored colors are not touched; the scale is applied while encoding.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Get the global brightness
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Duty values of the last encoded frame
    pub fn pulses(&self) -> &[u16] {
        &self.pulses
    }

    /// Check if a transfer was started and its completion not yet consumed
    pub const fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Get the driver configuration
    pub const fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Get a reference to the transport
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Get a mutable reference to the transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// How long `send` waits for the transport, `None` if forever
    pub const fn completion_timeout(&self) -> Option<Duration> {
        self.completion_timeout
    }

    /// Release the transport
    ///
    /// A transfer left running by a dropped `send` is stopped first, since
    /// the buffer it reads from goes away with the driver.
    pub fn release(self) -> T {
        let mut this = ManuallyDrop::new(self);
        this.abort_transfer();
        // SAFETY: `this` is never dropped, so the transport is moved out
        // exactly once. The remaining fields own no resources.
        unsafe { ptr::read(&this.transport) }
    }

    /// Stop a transfer whose completion was never consumed
    fn abort_transfer(&mut self) {
        if self.in_flight {
            self.transport.stop(self.config.channel);
            self.in_flight = false;
            #[cfg(feature = "defmt")]
            defmt::warn!("[Ws2812b] stopped unfinished transfer");
        }
    }

    /// Encode the current colors and transmit them
    ///
    /// Returns once the transport reported completion. If a previous `send`
    /// was dropped while its transfer was still running, that transfer is
    /// waited for first so the buffer it reads from is never rewritten
    /// underneath it.
    pub async fn send(&mut self) -> Result<(), Error<T::Error>> {
        if self.in_flight {
            self.finish_transfer().await?;
        }

        encode_frame(
            &self.colors,
            self.brightness,
            &self.config.timing,
            &mut self.pulses,
        )?;

        // Nothing is in flight, so any raised completion is left over from a
        // transfer that already timed out.
        self.completion.reset();
        self.transport
            .start(self.config.channel, &self.pulses)
            .map_err(Error::Transport)?;
        self.in_flight = true;

        self.finish_transfer().await
    }

    /// Wait for the running transfer, then stop the output
    async fn finish_transfer(&mut self) -> Result<(), Error<T::Error>> {
        let completed = match self.completion_timeout {
            Some(timeout) => with_timeout(timeout, self.completion.wait())
                .await
                .is_ok(),
            None => {
                self.completion.wait().await;
                true
            }
        };

        self.transport.stop(self.config.channel);
        self.in_flight = false;

        if !completed {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "[Ws2812b.send] transfer of {} pulses did not complete",
                self.pulses.len()
            );
            return Err(Error::TransportTimeout);
        }

        Ok(())
    }
}

impl<T: PulseTransport, const N: usize, const P: usize> Drop for Ws2812b<'_, T, N, P> {
    fn drop(&mut self) {
        self.abort_transfer();
    }
}
