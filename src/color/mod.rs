mod gradient;
mod utils;

pub use gradient::fill_wheel_gradient;
use smart_leds::RGB8;
pub use utils::{pack_grb, scale_color};

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
