//! Breathing effect
//!
//! Fills the strip with one color and fades it in and out following a
//! triangle wave.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::{
    color::{Hsv, Rgb, fade_to_black_by, fill_solid, hsv2rgb},
    math8::triangle8,
};

#[derive(Debug, Clone, Copy)]
pub struct PulseEffect {
    color: Rgb,
    period: Duration,
}

impl PulseEffect {
    pub fn new(color: Hsv, period: Duration) -> Self {
        Self {
            color: hsv2rgb(color),
            period,
        }
    }

    /// How far the color is faded towards black at `now` (0-255)
    ///
    /// Fully dark at the start of each period, full color in the middle.
    pub const fn fade_level(&self, now: Instant) -> u8 {
        triangle8(now, self.period)
    }
}

impl Effect for PulseEffect {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        fill_solid(leds, self.color);
        fade_to_black_by(leds, self.fade_level(now));
    }
}
