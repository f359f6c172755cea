//! Static color fill effect
//!
//! Fills all LEDs with a single solid color. Backs both the off and the
//! on mode.

use embassy_time::Instant;

use super::Effect;
use crate::color::{BLACK, Hsv, Rgb, fill_solid, hsv2rgb};

/// Static color effect - fills all LEDs with one color
#[derive(Debug, Clone, Copy)]
pub struct StaticColorEffect {
    color: Rgb,
}

impl StaticColorEffect {
    /// Create a new static color effect
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    /// All LEDs dark
    pub const fn off() -> Self {
        Self::new(BLACK)
    }

    /// Solid color given in HSV
    pub fn from_hsv(color: Hsv) -> Self {
        Self::new(hsv2rgb(color))
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl Effect for StaticColorEffect {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        fill_solid(leds, self.color);
    }
}
