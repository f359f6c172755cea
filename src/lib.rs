#![no_std]

pub mod color;
pub mod config;
pub mod effect;
pub mod frame_scheduler;
pub mod math8;
pub mod pixel_buffer;
pub mod random;
pub mod renderer;
pub mod request;
pub mod state;

pub use config::{
    ConfigError, ConfigStore, DeviceConfig, load_or_default, parse_config, write_config,
};
pub use effect::{Effect, FireEffect, HeatMap};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use pixel_buffer::{PixelBuffer, PixelBufferError};
pub use random::{RandomSource, SplitMixRandom};
pub use renderer::Renderer;
pub use request::{RequestError, StateRequest, StatusReport, parse_request, write_status};
pub use state::{Mode, RenderState, StateError};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
