//! Scanner effect
//!
//! A single lit LED bouncing between both ends of the strip.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::{
    color::{BLACK, Hsv, Rgb, fill_solid, hsv2rgb},
    math8::triangle_position,
};

#[derive(Debug, Clone, Copy)]
pub struct KnightRiderEffect {
    color: Rgb,
    period: Duration,
}

impl KnightRiderEffect {
    pub fn new(color: Hsv, period: Duration) -> Self {
        Self {
            color: hsv2rgb(color),
            period,
        }
    }

    /// Index of the lit LED at `now` on a strip of `len`
    pub const fn position(&self, now: Instant, len: usize) -> usize {
        triangle_position(now, self.period, len)
    }
}

impl Effect for KnightRiderEffect {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }
        let position = self.position(now, leds.len());
        fill_solid(leds, BLACK);
        leds[position] = self.color;
    }
}
