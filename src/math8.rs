use embassy_time::{Duration, Instant};

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Distance of `now` from the middle of its period, doubled.
///
/// Forms a triangle wave over `0..=period`: `period` at the start and end
/// of each cycle, `0` in the middle. A zero period yields `0`.
#[inline]
pub const fn triangle_distance(now: Instant, period: Duration) -> u64 {
    let period_ms = period.as_millis();
    if period_ms == 0 {
        return 0;
    }
    let t = now.as_millis() % period_ms;
    t.abs_diff(period_ms / 2) * 2
}

/// Triangle wave level (0-255) with the given period
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn triangle8(now: Instant, period: Duration) -> u8 {
    let period_ms = period.as_millis();
    if period_ms == 0 {
        return 0;
    }
    let level = 255 * triangle_distance(now, period) / period_ms;
    if level > 255 { 255 } else { level as u8 }
}

/// Position on a strip of `len` LEDs following a triangle wave
///
/// Bounces between both ends; always a valid index for non-empty strips.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn triangle_position(now: Instant, period: Duration, len: usize) -> usize {
    let period_ms = period.as_millis();
    if period_ms == 0 || len == 0 {
        return 0;
    }
    let position = (len as u64 * triangle_distance(now, period) / period_ms) as usize;
    if position >= len { len - 1 } else { position }
}
