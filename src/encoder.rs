//! Frame encoding
//!
//! Turns a color array into the duty sequence a PWM channel replays through
//! DMA. The sequence is rebuilt from scratch on every call.

use heapless::Vec;

use crate::color::{Rgb, pack_grb, scale_color};
use crate::error::BufferTooSmall;
use crate::timing::{BITS_PER_LED, PulseTiming};

/// Encode a frame into `out`
///
/// For every LED in order the brightness-scaled color is packed as GRB and
/// emitted MSB first, one duty value per bit. The latch gap follows as
/// `timing.latch_pulses` zero duties. `out` is cleared first; on error it is
/// left empty.
pub fn encode_frame<const P: usize>(
    colors: &[Rgb],
    brightness: u8,
    timing: &PulseTiming,
    out: &mut Vec<u16, P>,
) -> Result<(), BufferTooSmall> {
    out.clear();

    let required = timing.frame_len(colors.len());
    if required > out.capacity() {
        return Err(BufferTooSmall {
            required,
            capacity: out.capacity(),
        });
    }

    for color in colors {
        let word = pack_grb(scale_color(*color, brightness));
        for bit in (0..BITS_PER_LED).rev() {
            let duty = timing.duty(word & (1 << bit) != 0);
            // Capacity was checked above
            let _ = out.push(duty);
        }
    }

    for _ in 0..timing.latch_pulses {
        let _ = out.push(0);
    }

    Ok(())
}
