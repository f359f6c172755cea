//! Fixed 16-entry color palettes

use super::{Rgb, blend_colors, rgb_from_u32};

/// Palette of 16 evenly spaced colors covering the 0-255 index range
pub type Palette16 = [Rgb; 16];

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

/// Black body radiation: black -> red -> orange -> yellow -> white
#[allow(clippy::unreadable_literal)]
pub const HEAT_PALETTE: Palette16 = hex_palette![
    0x000000, 0x330000, 0x660000, 0x990000, 0xCC0000, 0xFF0000, 0xFF3300, 0xFF6600,
    0xFF9900, 0xFFCC00, 0xFFFF00, 0xFFFF33, 0xFFFF66, 0xFFFF99, 0xFFFFCC, 0xFFFFFF
];

/// Look up a palette color with linear blending between neighbours
///
/// The high nibble of `index` selects the entry, the low nibble blends
/// towards the next one. Past the last entry the blend wraps to the first.
pub fn color_from_palette(palette: &Palette16, index: u8) -> Rgb {
    let entry = usize::from(index >> 4);
    let frac = index & 0x0F;
    let color = palette[entry];
    if frac == 0 {
        return color;
    }

    let next = palette[(entry + 1) % palette.len()];
    blend_colors(color, next, frac << 4)
}
