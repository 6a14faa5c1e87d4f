//! WS2812B bit timing expressed as PWM compare values.
//!
//! Each transmitted bit occupies one PWM period (1.25 µs at 800 kHz). The
//! level of the bit is encoded in how long the output stays high during that
//! period. After the last bit the line must stay low for the latch gap.

use embassy_time::Duration;

use crate::math8::percent_of;

/// Compare range of a TIM2 set up with `ARR = 100`.
///
/// The counter runs `ARR + 1` ticks per period, so at 80 MHz a period is
/// 101 ticks (~792 kHz), well inside the WS2812B bit rate tolerance.
pub const DEFAULT_PERIOD: u16 = 100;

/// High time of a logical one, in percent of the period (~850 ns high).
pub const ONE_DUTY_PERCENT: u8 = 68;

/// High time of a logical zero, in percent of the period (~400 ns high).
pub const ZERO_DUTY_PERCENT: u8 = 32;

/// Number of zero-duty periods appended after a frame.
///
/// 50 periods of 1.25 µs keep the line low for 62.5 µs, above the 50 µs
/// reset time of the WS2812B.
pub const DEFAULT_LATCH_PULSES: usize = 50;

/// Nominal duration of one bit period on the wire (800 kHz).
pub const BIT_TIME_NS: usize = 1250;

/// Number of duty values emitted per LED.
pub const BITS_PER_LED: usize = 24;

/// Number of duty values in one frame for `leds` LEDs.
///
/// Usable in const position to size the pulse buffer:
/// `Ws2812b<'_, T, 4, { pulse_count(4, DEFAULT_LATCH_PULSES) }>`.
pub const fn pulse_count(leds: usize, latch_pulses: usize) -> usize {
    BITS_PER_LED * leds + latch_pulses
}

/// Timer output channel the transport should drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmChannel(pub u8);

impl Default for PwmChannel {
    fn default() -> Self {
        Self(2)
    }
}

/// Compare values used to encode one bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTiming {
    /// Timer ticks per bit period
    pub period: u16,
    /// Compare value for a logical one
    pub one_high: u16,
    /// Compare value for a logical zero
    pub zero_high: u16,
    /// Zero-duty periods appended as the latch gap
    pub latch_pulses: usize,
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self::from_period(DEFAULT_PERIOD)
    }
}

impl PulseTiming {
    /// Derive the one/zero compare values from a timer period
    ///
    /// HALs usually report the maximum duty at runtime, once the timer
    /// frequency is configured. Pass that value here.
    pub const fn from_period(period: u16) -> Self {
        Self {
            period,
            one_high: percent_of(period, ONE_DUTY_PERCENT),
            zero_high: percent_of(period, ZERO_DUTY_PERCENT),
            latch_pulses: DEFAULT_LATCH_PULSES,
        }
    }

    /// Override the latch gap length
    #[must_use]
    pub const fn with_latch_pulses(mut self, latch_pulses: usize) -> Self {
        self.latch_pulses = latch_pulses;
        self
    }

    /// Compare value for a single bit
    #[inline]
    pub const fn duty(&self, bit: bool) -> u16 {
        if bit { self.one_high } else { self.zero_high }
    }

    /// Number of duty values in one frame for `leds` LEDs
    pub const fn frame_len(&self, leds: usize) -> usize {
        pulse_count(leds, self.latch_pulses)
    }

    /// Time one frame for `leds` LEDs takes on the wire, rounded up to
    /// whole microseconds
    #[allow(clippy::cast_possible_truncation)]
    pub const fn frame_airtime(&self, leds: usize) -> Duration {
        let nanos = self.frame_len(leds) * BIT_TIME_NS;
        Duration::from_micros(nanos.div_ceil(1000) as u64)
    }
}
