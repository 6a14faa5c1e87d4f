/// Scale an 8-bit value by a brightness factor (0-255 = 0.0-1.0)
///
/// Computes `floor(value * brightness / 255)`. Unlike a `>> 8` approximation,
/// full brightness leaves the value untouched and the result never exceeds
/// `value`.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale_brightness(value: u8, brightness: u8) -> u8 {
    ((value as u16 * brightness as u16) / 255) as u8
}

/// Move a channel toward full intensity, clamping at 255
#[inline]
pub const fn fade_up(value: u8, amount: u8) -> u8 {
    value.saturating_add(amount)
}

/// Move a channel toward zero, clamping at 0
#[inline]
pub const fn fade_down(value: u8, amount: u8) -> u8 {
    value.saturating_sub(amount)
}

/// Take `percent` of a 16-bit timer value, rounding down
///
/// `percent` is clamped to 100, so the result never exceeds `value`.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn percent_of(value: u16, percent: u8) -> u16 {
    let percent = if percent > 100 { 100 } else { percent };
    ((value as u32 * percent as u32) / 100) as u16
}
