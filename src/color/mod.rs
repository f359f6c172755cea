mod palette;
mod utils;

pub use palette::{HEAT_PALETTE, Palette16, color_from_palette};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{blend_colors, fade_to_black_by, fill_rainbow, fill_solid, hsv2rgb, rgb_from_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Fully dark pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
