use embassy_time::Instant;

use crate::color::{Hsv, Rgb};
use crate::effect::{
    Effect, FireEffect, KnightRiderEffect, PulseEffect, RainbowEffect, StaticColorEffect,
};
use crate::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::random::RandomSource;
use crate::state::{Mode, RenderState};

/// Renderer - draws the active mode into the pixel buffer
///
/// Owns the frame buffer and the fire simulation, so both persist across
/// frames and nothing outside the render loop can touch them.
pub struct Renderer<R: RandomSource, const MAX_LEDS: usize> {
    frame_buffer: PixelBuffer<MAX_LEDS>,
    fire: FireEffect<R, MAX_LEDS>,
}

impl<R: RandomSource, const MAX_LEDS: usize> Renderer<R, MAX_LEDS> {
    /// Create a renderer for `led_count` LEDs
    pub fn new(led_count: usize, rng: R) -> Result<Self, PixelBufferError> {
        Ok(Self {
            frame_buffer: PixelBuffer::new(led_count)?,
            fire: FireEffect::new(rng),
        })
    }

    /// Number of active LEDs
    pub const fn led_count(&self) -> usize {
        self.frame_buffer.len()
    }

    /// Resize the active strip
    ///
    /// Clears the frame and the fire heat so no stale cells reappear.
    pub fn set_led_count(&mut self, led_count: usize) -> Result<(), PixelBufferError> {
        self.frame_buffer.set_len(led_count)?;
        self.fire.reset();
        Ok(())
    }

    /// Last rendered frame
    pub fn frame(&self) -> &[Rgb] {
        self.frame_buffer.as_slice()
    }

    pub const fn fire(&self) -> &FireEffect<R, MAX_LEDS> {
        &self.fire
    }

    /// Render one frame of the active mode
    pub fn render(&mut self, state: &RenderState, now: Instant) -> &[Rgb] {
        let frame = self.frame_buffer.as_mut_slice();
        let color = Hsv {
            hue: state.hue,
            sat: state.saturation,
            val: state.value,
        };

        match state.mode {
            // Solid modes skip the animated effects entirely
            Mode::Off => StaticColorEffect::off().render(now, frame),
            Mode::On => StaticColorEffect::from_hsv(color).render(now, frame),
            Mode::Pulse => PulseEffect::new(color, state.period()).render(now, frame),
            Mode::Rainbow => RainbowEffect::default().render(now, frame),
            Mode::KnightRider => {
                KnightRiderEffect::new(color, state.period()).render(now, frame);
            }
            Mode::Fire => {
                self.fire
                    .set_params(state.fire_cooling, state.fire_sparking);
                self.fire.render(now, frame);
            }
        }

        self.frame_buffer.as_slice()
    }
}
