use crate::color::Rgb;

/// Fill the strip with a red to green ramp
///
/// LED `i` of `n` gets `offset = i * 256 / n` and the color
/// `(255 - offset, offset, 0)`, so every LED starts on the first leg of the
/// color wheel but at a different position. For four LEDs this yields
/// `(255,0,0) (191,64,0) (127,128,0) (63,192,0)`.
#[allow(clippy::cast_possible_truncation)]
pub fn fill_wheel_gradient(leds: &mut [Rgb]) {
    let count = leds.len();
    for (i, led) in leds.iter_mut().enumerate() {
        // i < count, so the offset never reaches 256
        let offset = (i * 256 / count) as u8;
        *led = Rgb {
            r: 255 - offset,
            g: offset,
            b: 0,
        };
    }
}
