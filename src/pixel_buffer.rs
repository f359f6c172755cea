use core::fmt;

use crate::color::{BLACK, Rgb};

/// Error returned when an LED count does not fit the strip capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelBufferError {
    /// No LEDs configured
    Empty,
    /// More LEDs than the buffer can hold
    OverCapacity { requested: usize, capacity: usize },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("LED count must be at least 1"),
            Self::OverCapacity {
                requested,
                capacity,
            } => write!(f, "{requested} LEDs requested, capacity is {capacity}"),
        }
    }
}

/// Check that `len` is a usable LED count for a strip of `capacity`
pub const fn check_len(len: usize, capacity: usize) -> Result<(), PixelBufferError> {
    if len == 0 {
        return Err(PixelBufferError::Empty);
    }
    if len > capacity {
        return Err(PixelBufferError::OverCapacity {
            requested: len,
            capacity,
        });
    }
    Ok(())
}

/// Fixed-capacity frame of pixels
///
/// Storage is sized for `MAX_LEDS`; only the first `len` pixels form the
/// active strip handed to renderers and the output driver.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const MAX_LEDS: usize> {
    pixels: [Rgb; MAX_LEDS],
    len: usize,
}

impl<const MAX_LEDS: usize> PixelBuffer<MAX_LEDS> {
    /// Create a black buffer with `len` active pixels
    pub const fn new(len: usize) -> Result<Self, PixelBufferError> {
        if let Err(e) = check_len(len, MAX_LEDS) {
            return Err(e);
        }
        Ok(Self {
            pixels: [BLACK; MAX_LEDS],
            len,
        })
    }

    /// Number of active pixels
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false: a buffer holds at least one pixel
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of pixels
    pub const fn capacity(&self) -> usize {
        MAX_LEDS
    }

    /// Change the active length, blanking every pixel
    pub fn set_len(&mut self, len: usize) -> Result<(), PixelBufferError> {
        check_len(len, MAX_LEDS)?;
        self.pixels = [BLACK; MAX_LEDS];
        self.len = len;
        Ok(())
    }

    /// Active pixels
    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }

    /// Active pixels, mutable
    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.pixels[..self.len]
    }
}
