use crate::{color::Rgb, math8::scale_brightness};

/// Pack a color into the 24-bit word a WS2812B expects on the wire
///
/// Channel order is green (bits 23-16), red (bits 15-8), blue (bits 7-0).
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn pack_grb(color: Rgb) -> u32 {
    ((color.g as u32) << 16) | ((color.r as u32) << 8) | color.b as u32
}

/// Scale every channel of a color by a global brightness
///
/// # Arguments
/// * `color` - Stored color
/// * `brightness` - Scale factor (0 = off, 255 = unchanged)
#[inline]
pub const fn scale_color(color: Rgb, brightness: u8) -> Rgb {
    Rgb {
        r: scale_brightness(color.r, brightness),
        g: scale_brightness(color.g, brightness),
        b: scale_brightness(color.b, brightness),
    }
}
