//! Color wheel fade animation
//!
//! Every LED walks the color wheel on its own: red fades into green, green
//! into blue, blue back into red. Channels move in lockstep by a fixed step
//! per frame and a leg ends only when the fading channel hit 0 and the rising
//! one hit 255 on the same LED.

use embassy_time::{Duration, Timer};

use crate::PulseTransport;
use crate::color::{Rgb, fill_wheel_gradient};
use crate::error::Error;
use crate::math8::{fade_down, fade_up};
use crate::signal::StopFlag;
use crate::strip::Ws2812b;

const DEFAULT_STEP: u8 = 5;
const DEFAULT_FRAME_DELAY_MS: u64 = 50;
const DEFAULT_BRIGHTNESS: u8 = 50;

/// Leg of the color wheel an LED is currently on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FadePhase {
    /// Red falls, green rises
    #[default]
    RedToGreen = 0,
    /// Green falls, blue rises
    GreenToBlue = 1,
    /// Blue falls, red rises
    BlueToRed = 2,
}

impl FadePhase {
    /// Convert a raw level (0, 1 or 2)
    pub const fn from_level(level: u8) -> Option<Self> {
        Some(match level {
            0 => Self::RedToGreen,
            1 => Self::GreenToBlue,
            2 => Self::BlueToRed,
            _ => return None,
        })
    }

    /// Raw level of this phase
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Apply one fade step to `color` and return the phase for the next frame
    pub fn advance(self, color: &mut Rgb, amount: u8) -> Self {
        let (falling, rising, next) = match self {
            Self::RedToGreen => (&mut color.r, &mut color.g, Self::GreenToBlue),
            Self::GreenToBlue => (&mut color.g, &mut color.b, Self::BlueToRed),
            Self::BlueToRed => (&mut color.b, &mut color.r, Self::RedToGreen),
        };

        *falling = fade_down(*falling, amount);
        *rising = fade_up(*rising, amount);

        if *falling == 0 && *rising == u8::MAX {
            next
        } else {
            self
        }
    }
}

/// Configuration for the fade animation
#[derive(Debug, Clone, Copy)]
pub struct FadeConfig {
    /// Channel change per frame
    pub step: u8,
    /// Pause after each transmitted frame
    pub frame_delay: Duration,
    /// Global brightness used while fading
    pub brightness: u8,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            frame_delay: Duration::from_millis(DEFAULT_FRAME_DELAY_MS),
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

/// Drives the color wheel fade across `N` LEDs
#[derive(Debug, Clone)]
pub struct FadeController<const N: usize> {
    phases: [FadePhase; N],
    config: FadeConfig,
}

impl<const N: usize> FadeController<N> {
    /// Create a controller with every LED on the first leg
    pub const fn new(config: FadeConfig) -> Self {
        Self {
            phases: [FadePhase::RedToGreen; N],
            config,
        }
    }

    /// Create a controller from raw per-LED levels
    ///
    /// # Panics
    ///
    /// A level outside `0..=2` means the caller's bookkeeping is broken; this
    /// is not recoverable and panics.
    pub fn from_levels(levels: [u8; N], config: FadeConfig) -> Self {
        let mut phases = [FadePhase::RedToGreen; N];
        for (i, (phase, level)) in phases.iter_mut().zip(levels).enumerate() {
            let Some(parsed) = FadePhase::from_level(level) else {
                panic!("fade level {} of led {} is outside 0..=2", level, i);
            };
            *phase = parsed;
        }
        Self { phases, config }
    }

    /// Current phase of every LED
    pub const fn phases(&self) -> &[FadePhase; N] {
        &self.phases
    }

    /// Get the fade configuration
    pub const fn config(&self) -> &FadeConfig {
        &self.config
    }

    /// Put every LED back on the first leg
    pub fn reset(&mut self) {
        self.phases = [FadePhase::RedToGreen; N];
    }

    /// Load the starting gradient and reset all phases
    ///
    /// Neighbouring LEDs start at different points of the first leg so the
    /// strip animates out of phase.
    pub fn seed(&mut self, leds: &mut [Rgb; N]) {
        fill_wheel_gradient(leds);
        self.reset();
    }

    /// Advance every LED by one step
    pub fn step(&mut self, leds: &mut [Rgb; N]) {
        for (phase, led) in self.phases.iter_mut().zip(leds.iter_mut()) {
            *phase = phase.advance(led, self.config.step);
        }
    }

    /// Run the animation on `strip` until `stop` is raised
    ///
    /// Seeds the gradient and sends it, then repeats step, send and
    /// `frame_delay` until `stop` is observed. The flag is checked once per
    /// frame, before the next step.
    pub async fn run<T: PulseTransport, const P: usize>(
        &mut self,
        strip: &mut Ws2812b<'_, T, N, P>,
        stop: &StopFlag,
    ) -> Result<(), Error<T::Error>> {
        self.seed(strip.colors_mut());
        strip.set_brightness(self.config.brightness);
        strip.send().await?;

        #[cfg(feature = "defmt")]
        defmt::debug!("[FadeController.run] fading {} leds", N);

        while !stop.is_stopped() {
            self.step(strip.colors_mut());
            strip.send().await?;
            Timer::after(self.config.frame_delay).await;
        }

        Ok(())
    }
}

impl<const N: usize> Default for FadeController<N> {
    fn default() -> Self {
        Self::new(FadeConfig::default())
    }
}
