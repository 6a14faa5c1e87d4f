//! Fixed color check for a freshly wired strip.
//!
//! Lights the whole strip in each primary color, then dim white, then turns
//! it off, so a person can see every channel of every LED working.

use embassy_time::{Duration, Timer};

use crate::PulseTransport;
use crate::color::{BLACK, BLUE, GREEN, RED, Rgb};
use crate::error::Error;
use crate::strip::Ws2812b;

const DEFAULT_CHECK_BRIGHTNESS: u8 = 30;
const DEFAULT_HOLD_MS: u64 = 500;
const DIM_WHITE: Rgb = Rgb {
    r: 100,
    g: 100,
    b: 100,
};

/// Configuration for [`run_color_check`]
#[derive(Debug, Clone, Copy)]
pub struct ColorCheckConfig {
    /// Brightness used for the whole check
    pub brightness: u8,
    /// Colors shown one after another
    pub colors: [Rgb; 4],
    /// How long each color stays lit
    pub hold: Duration,
}

impl Default for ColorCheckConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_CHECK_BRIGHTNESS,
            colors: [RED, GREEN, BLUE, DIM_WHITE],
            hold: Duration::from_millis(DEFAULT_HOLD_MS),
        }
    }
}

/// Show every configured color on the whole strip, then switch it off
///
/// Each color is held for `config.hold`. The final black frame is sent
/// without a hold. Brightness stays at `config.brightness` afterwards.
pub async fn run_color_check<T: PulseTransport, const N: usize, const P: usize>(
    strip: &mut Ws2812b<'_, T, N, P>,
    config: &ColorCheckConfig,
) -> Result<(), Error<T::Error>> {
    strip.set_brightness(config.brightness);

    for color in config.colors {
        strip.fill(color);
        strip.send().await?;
        Timer::after(config.hold).await;
    }

    strip.fill(BLACK);
    strip.send().await
}
