pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::{Hsv, Rgb},
    math8::{blend8, scale8},
};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Fill every LED with one color
pub fn fill_solid(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}

/// Fill LEDs with a hue sweep
///
/// Starts at `initial_hue` and advances by `delta_hue` per pixel,
/// wrapping around the 0-255 hue circle at full saturation and value.
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, delta_hue: u8) {
    let mut hue = initial_hue;
    for led in leds {
        *led = hsv2rgb(Hsv {
            hue,
            sat: 255,
            val: 255,
        });
        hue = hue.wrapping_add(delta_hue);
    }
}

/// Darken LEDs towards black
///
/// `amount` of 0 leaves colors untouched, 255 turns them black.
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    let keep = 255 - amount;
    for led in leds {
        *led = Rgb {
            r: scale8(led.r, keep),
            g: scale8(led.g, keep),
            b: scale8(led.b, keep),
        };
    }
}
