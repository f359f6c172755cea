//! Effect renderers, one per mode
//!
//! Stateless effects are cheap `Copy` values built from the render state
//! right before drawing. The fire effect keeps its heat map between frames
//! and is owned by the renderer.

mod fire;
mod knight_rider;
mod pulse;
mod rainbow;
mod static_color;

use embassy_time::Instant;
pub use fire::{FireEffect, HeatMap, SPARK_ZONE, cool, diffuse, map_heat, spark};
pub use knight_rider::KnightRiderEffect;
pub use pulse::PulseEffect;
pub use rainbow::RainbowEffect;
pub use static_color::StaticColorEffect;

use crate::color::Rgb;

pub trait Effect {
    /// Render a single frame
    fn render(&mut self, now: Instant, leds: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}
}
