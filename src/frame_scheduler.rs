//! Frame scheduling
//!
//! Non-blocking frame pacing for a cooperative main loop. `tick` either
//! returns immediately because the next frame is not due yet, or renders
//! and pushes one frame. The caller never sleeps inside the scheduler.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::DeviceConfig;
use crate::pixel_buffer::PixelBufferError;
use crate::random::RandomSource;
use crate::request::StateRequest;
use crate::state::{RenderState, StateError};
use crate::{OutputDriver, Renderer};

/// Default target frame rate
pub const DEFAULT_FPS: u32 = 60;

/// Result of a frame tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameResult {
    /// Too early for the next frame, nothing was rendered
    Idle {
        /// Time left until the next frame is due
        remaining: Duration,
    },
    /// A frame was rendered and written to the output
    Rendered {
        /// Earliest time the next frame will render
        next_deadline: Instant,
    },
}

impl FrameResult {
    pub const fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

/// Frame interval for a frames-per-second target
///
/// A zero rate falls back to [`DEFAULT_FPS`].
#[allow(clippy::cast_lossless)]
pub const fn frame_interval(fps: u32) -> Duration {
    let fps = if fps == 0 { DEFAULT_FPS } else { fps };
    Duration::from_millis(1000 / fps as u64)
}

/// Owner of the render loop state
///
/// Holds the render state, the renderer and the output driver. Requests
/// are applied through [`FrameScheduler::update`] between ticks, so a frame
/// never observes a partially applied request.
///
/// # Usage
///
/// ```ignore
/// let renderer = Renderer::<_, 300>::new(config.led_count(), SplitMixRandom::new(seed))?;
/// let mut scheduler = FrameScheduler::new(renderer, driver, config.frame_interval());
///
/// loop {
///     if let Some(body) = server.poll_request() {
///         let _ = parse_request(body).map(|request| scheduler.update(&request));
///     }
///     scheduler.tick(Instant::from_millis(millis()));
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver, R: RandomSource, const MAX_LEDS: usize> {
    output: O,
    renderer: Renderer<R, MAX_LEDS>,
    state: RenderState,
    last_frame: Option<Instant>,
    frame_duration: Duration,
}

impl<O: OutputDriver, R: RandomSource, const MAX_LEDS: usize> FrameScheduler<O, R, MAX_LEDS> {
    /// Create a scheduler starting from the default render state
    pub fn new(renderer: Renderer<R, MAX_LEDS>, driver: O, frame_duration: Duration) -> Self {
        Self::with_state(renderer, driver, frame_duration, RenderState::default())
    }

    /// Create a scheduler with an initial render state
    pub fn with_state(
        renderer: Renderer<R, MAX_LEDS>,
        driver: O,
        frame_duration: Duration,
        state: RenderState,
    ) -> Self {
        Self {
            output: driver,
            renderer,
            state,
            last_frame: None,
            frame_duration,
        }
    }

    /// Create the renderer and scheduler from the device configuration
    pub fn from_config(config: &DeviceConfig, rng: R, driver: O) -> Result<Self, PixelBufferError> {
        let renderer = Renderer::new(usize::from(config.led_count), rng)?;
        Ok(Self::new(renderer, driver, config.frame_interval()))
    }

    /// Render and output a frame if one is due
    ///
    /// The frame timestamp is taken before rendering, so render time does
    /// not push later frames back.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        if let Some(last_frame) = self.last_frame {
            let elapsed = now.saturating_duration_since(last_frame);
            if elapsed < self.frame_duration {
                return FrameResult::Idle {
                    remaining: self.frame_duration - elapsed,
                };
            }
        }

        self.last_frame = Some(now);
        let frame = self.renderer.render(&self.state, now);
        self.output.write(frame);

        FrameResult::Rendered {
            next_deadline: now + self.frame_duration,
        }
    }

    /// Apply a state change request
    pub fn update(&mut self, request: &StateRequest<'_>) -> Result<(), StateError> {
        self.state.update(request)
    }

    /// Switch to the next mode
    pub fn cycle_mode(&mut self) {
        self.state.cycle_mode();
    }

    /// Change the number of active LEDs
    pub fn set_led_count(&mut self, led_count: usize) -> Result<(), PixelBufferError> {
        self.renderer.set_led_count(led_count)?;
        #[cfg(feature = "esp32-log")]
        println!("[scheduler] led count set to {}", led_count);
        Ok(())
    }

    /// Current render state
    pub const fn state(&self) -> &RenderState {
        &self.state
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Get a reference to the renderer.
    pub const fn renderer(&self) -> &Renderer<R, MAX_LEDS> {
        &self.renderer
    }

    /// Get a reference to the output driver.
    pub const fn output(&self) -> &O {
        &self.output
    }
}
