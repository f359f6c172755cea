//! Random sources for stochastic effects
//!
//! Effects never reach for a global generator; they receive a
//! [`RandomSource`] so rendering stays reproducible under test.

/// Source of random bytes
pub trait RandomSource {
    /// Next uniformly distributed byte
    fn random8(&mut self) -> u8;

    /// Random byte in `[0, limit)`
    ///
    /// Returns 0 when `limit` is 0.
    #[allow(clippy::cast_possible_truncation)]
    fn random8_below(&mut self, limit: u8) -> u8 {
        ((u16::from(self.random8()) * u16::from(limit)) >> 8) as u8
    }

    /// Next uniformly distributed 16-bit value, high byte first
    fn random16(&mut self) -> u16 {
        let high = self.random8();
        let low = self.random8();
        (u16::from(high) << 8) | u16::from(low)
    }

    /// Random value in `[0, limit)` for ranges wider than a byte
    ///
    /// Returns 0 when `limit` is 0.
    #[allow(clippy::cast_possible_truncation)]
    fn random16_below(&mut self, limit: u16) -> u16 {
        ((u32::from(self.random16()) * u32::from(limit)) >> 16) as u16
    }

    /// Random byte in `[min, limit)`
    ///
    /// Returns `min` when the range is empty.
    fn random8_between(&mut self, min: u8, limit: u8) -> u8 {
        if limit <= min {
            return min;
        }
        min + self.random8_below(limit - min)
    }
}

/// `SplitMix64` pseudo-random generator
#[derive(Debug, Clone)]
pub struct SplitMixRandom {
    state: u64,
}

impl SplitMixRandom {
    /// Create a generator from a seed
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 64-bit output
    pub const fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl RandomSource for SplitMixRandom {
    #[allow(clippy::cast_possible_truncation)]
    fn random8(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }
}
