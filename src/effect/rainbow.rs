//! Static rainbow gradient
//!
//! Sweeps the full hue circle once across the strip. The gradient does not
//! move; it is simply redrawn every frame.

use embassy_time::Instant;

use super::Effect;
use crate::color::{Rgb, fill_rainbow};

#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowEffect {
    /// Hue of the first LED
    initial_hue: u8,
}

impl RainbowEffect {
    pub const fn new(initial_hue: u8) -> Self {
        Self { initial_hue }
    }

    /// Hue distance between neighbouring LEDs on a strip of `len`
    pub fn hue_step(len: usize) -> u8 {
        if len == 0 {
            return 0;
        }
        u8::try_from(255 / len).unwrap_or(u8::MAX)
    }
}

impl Effect for RainbowEffect {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        let step = Self::hue_step(leds.len());
        fill_rainbow(leds, self.initial_hue, step);
    }
}
