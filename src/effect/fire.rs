//! Fire effect
//!
//! One-dimensional heat simulation. Every frame the cells cool down, heat
//! drifts away from the base of the strip, and new sparks randomly ignite
//! near the base. Heat is then mapped through a black body palette.
//!
//! The heat map lives across frames, so the effect must be kept alive
//! rather than rebuilt per frame.

use embassy_time::Instant;

use super::Effect;
use crate::{
    color::{HEAT_PALETTE, Rgb, color_from_palette},
    math8::scale8,
    random::RandomSource,
    state::{DEFAULT_FIRE_COOLING, DEFAULT_FIRE_SPARKING},
};

/// Sparks ignite within this many cells of the base
pub const SPARK_ZONE: u8 = 7;
/// Lower bound of heat added by a spark
const SPARK_HEAT_MIN: u8 = 160;
/// Upper bound (exclusive) of heat added by a spark
const SPARK_HEAT_LIMIT: u8 = 255;
/// Highest palette index used, keeps the hottest cells off pure white
const PALETTE_MAX_INDEX: u8 = 240;

/// Per-cell temperature, one cell per LED
#[derive(Debug, Clone)]
pub struct HeatMap<const MAX_LEDS: usize> {
    cells: [u8; MAX_LEDS],
}

impl<const MAX_LEDS: usize> Default for HeatMap<MAX_LEDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX_LEDS: usize> HeatMap<MAX_LEDS> {
    /// Create a cold heat map
    pub const fn new() -> Self {
        Self {
            cells: [0; MAX_LEDS],
        }
    }

    /// Temperatures of the first `len` cells
    pub fn cells(&self, len: usize) -> &[u8] {
        &self.cells[..len.min(MAX_LEDS)]
    }

    /// Mutable temperatures of the first `len` cells
    pub fn cells_mut(&mut self, len: usize) -> &mut [u8] {
        &mut self.cells[..len.min(MAX_LEDS)]
    }

    /// Cool every cell to zero
    pub fn clear(&mut self) {
        self.cells = [0; MAX_LEDS];
    }
}

/// Step 1: cool down every cell a little
///
/// Shorter strips cool faster so flames keep a similar relative height.
pub fn cool<R: RandomSource>(heat: &mut [u8], cooling: u8, rng: &mut R) {
    if heat.is_empty() {
        return;
    }
    // at most 2552, wider than one byte on short strips
    let limit = u16::try_from(usize::from(cooling) * 10 / heat.len() + 2).unwrap_or(u16::MAX);
    for cell in heat.iter_mut() {
        let amount = u8::try_from(rng.random16_below(limit)).unwrap_or(u8::MAX);
        *cell = cell.saturating_sub(amount);
    }
}

/// Step 2: heat drifts up and diffuses a little
///
/// Each cell takes the average of the two cells below it, the farther one
/// weighted double. The two base cells are left alone.
#[allow(clippy::cast_possible_truncation)]
pub fn diffuse(heat: &mut [u8]) {
    for k in (2..heat.len()).rev() {
        let sum = u16::from(heat[k - 1]) + 2 * u16::from(heat[k - 2]);
        heat[k] = (sum / 3) as u8;
    }
}

/// Step 3: randomly ignite a new spark near the base
pub fn spark<R: RandomSource>(heat: &mut [u8], sparking: u8, rng: &mut R) {
    if heat.is_empty() {
        return;
    }
    if rng.random8() >= sparking {
        return;
    }
    let zone = u8::try_from(heat.len()).map_or(SPARK_ZONE, |len| len.min(SPARK_ZONE));
    let y = usize::from(rng.random8_below(zone));
    heat[y] = heat[y].saturating_add(rng.random8_between(SPARK_HEAT_MIN, SPARK_HEAT_LIMIT));
}

/// Step 4: map heat to colors
pub fn map_heat(heat: &[u8], leds: &mut [Rgb]) {
    for (led, &temperature) in leds.iter_mut().zip(heat) {
        let index = scale8(temperature, PALETTE_MAX_INDEX);
        *led = color_from_palette(&HEAT_PALETTE, index);
    }
}

/// Fire effect with persistent heat simulation
#[derive(Debug, Clone)]
pub struct FireEffect<R: RandomSource, const MAX_LEDS: usize> {
    heat: HeatMap<MAX_LEDS>,
    rng: R,
    /// How much the air cools as it rises, less cooling gives taller flames
    cooling: u8,
    /// Chance (out of 255) that a new spark is lit each frame
    sparking: u8,
}

impl<R: RandomSource, const MAX_LEDS: usize> FireEffect<R, MAX_LEDS> {
    pub const fn new(rng: R) -> Self {
        Self {
            heat: HeatMap::new(),
            rng,
            cooling: DEFAULT_FIRE_COOLING,
            sparking: DEFAULT_FIRE_SPARKING,
        }
    }

    /// Update the tuning parameters, keeping the current heat
    pub fn set_params(&mut self, cooling: u8, sparking: u8) {
        self.cooling = cooling;
        self.sparking = sparking;
    }

    pub const fn heat(&self) -> &HeatMap<MAX_LEDS> {
        &self.heat
    }

    pub fn heat_mut(&mut self) -> &mut HeatMap<MAX_LEDS> {
        &mut self.heat
    }

    /// Advance the simulation by one frame over `len` cells
    pub fn step(&mut self, len: usize) {
        let heat = self.heat.cells_mut(len);
        cool(heat, self.cooling, &mut self.rng);
        diffuse(heat);
        spark(heat, self.sparking, &mut self.rng);
    }
}

impl<R: RandomSource, const MAX_LEDS: usize> Effect for FireEffect<R, MAX_LEDS> {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        self.step(leds.len());
        map_heat(self.heat.cells(leds.len()), leds);
    }

    fn reset(&mut self) {
        self.heat.clear();
    }
}
