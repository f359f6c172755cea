//! Device configuration
//!
//! The persisted record the rest of the firmware reads at boot: device
//! name, network credentials and strip geometry. Storage itself is behind
//! [`ConfigStore`].

use core::fmt;

use embassy_time::Duration;
use heapless::String;
use serde::{Deserialize, Serialize};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::frame_scheduler::{DEFAULT_FPS, frame_interval};

pub const NAME_CAPACITY: usize = 32;
pub const SSID_CAPACITY: usize = 32;
pub const PASSPHRASE_CAPACITY: usize = 64;

const DEFAULT_NAME: &str = "ohm-led";
const DEFAULT_LED_COUNT: u16 = 30;

const _: () = assert!(DEFAULT_NAME.len() < NAME_CAPACITY);

/// Reason a configuration was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NameTooLong,
    SsidTooLong,
    PassphraseTooLong,
    InvalidLedCount,
    InvalidFrameRate,
    /// Payload is not a configuration record
    Malformed,
    /// Output buffer cannot hold the serialized record
    BufferTooSmall,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NameTooLong => "Name is too big.",
            Self::SsidTooLong => "SSID is too big.",
            Self::PassphraseTooLong => "Passphrase is too big.",
            Self::InvalidLedCount => "Invalid number of LEDs.",
            Self::InvalidFrameRate => "Invalid frame rate.",
            Self::Malformed => "Malformed configuration.",
            Self::BufferTooSmall => "Configuration does not fit the buffer.",
        })
    }
}

/// Persisted device configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub name: String<NAME_CAPACITY>,
    pub ssid: String<SSID_CAPACITY>,
    pub passphrase: String<PASSPHRASE_CAPACITY>,
    pub led_count: u16,
    pub fps: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: copy_bounded(DEFAULT_NAME, ConfigError::NameTooLong).unwrap_or_default(),
            ssid: String::new(),
            passphrase: String::new(),
            led_count: DEFAULT_LED_COUNT,
            fps: DEFAULT_FPS,
        }
    }
}

/// Strings keep one byte of their capacity free, matching the
/// NUL-terminated layout of the stored record.
fn copy_bounded<const N: usize>(value: &str, error: ConfigError) -> Result<String<N>, ConfigError> {
    if value.len() >= N {
        return Err(error);
    }
    let mut out = String::new();
    out.push_str(value).map_err(|()| error)?;
    Ok(out)
}

impl DeviceConfig {
    /// Build a validated configuration for a strip of at most `max_leds`
    pub fn new(
        name: &str,
        ssid: &str,
        passphrase: &str,
        led_count: u16,
        max_leds: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            name: copy_bounded(name, ConfigError::NameTooLong)?,
            ssid: copy_bounded(ssid, ConfigError::SsidTooLong)?,
            passphrase: copy_bounded(passphrase, ConfigError::PassphraseTooLong)?,
            led_count,
            fps: DEFAULT_FPS,
        };
        config.validate(max_leds)?;
        Ok(config)
    }

    /// Check every field against its limits
    pub fn validate(&self, max_leds: usize) -> Result<(), ConfigError> {
        if self.name.len() >= NAME_CAPACITY {
            return Err(ConfigError::NameTooLong);
        }
        if self.ssid.len() >= SSID_CAPACITY {
            return Err(ConfigError::SsidTooLong);
        }
        if self.passphrase.len() >= PASSPHRASE_CAPACITY {
            return Err(ConfigError::PassphraseTooLong);
        }
        if self.led_count == 0 || usize::from(self.led_count) > max_leds {
            return Err(ConfigError::InvalidLedCount);
        }
        if self.fps == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        Ok(())
    }

    /// Number of active LEDs
    pub const fn led_count(&self) -> usize {
        self.led_count as usize
    }

    /// Minimum time between frames
    pub const fn frame_interval(&self) -> Duration {
        frame_interval(self.fps)
    }
}

/// Parse and validate a JSON configuration record
///
/// Strings longer than their field capacity fail to parse and are
/// reported as [`ConfigError::Malformed`].
pub fn parse_config(body: &[u8], max_leds: usize) -> Result<DeviceConfig, ConfigError> {
    let (config, _) =
        serde_json_core::from_slice::<DeviceConfig>(body).map_err(|_| ConfigError::Malformed)?;
    config.validate(max_leds)?;
    Ok(config)
}

/// Serialize the configuration as JSON into `buf`, returning the length
pub fn write_config(config: &DeviceConfig, buf: &mut [u8]) -> Result<usize, ConfigError> {
    serde_json_core::to_slice(config, buf).map_err(|_| ConfigError::BufferTooSmall)
}

/// Non-volatile storage for the device configuration
pub trait ConfigStore {
    type Error;

    /// Read the stored record, `None` when nothing valid is stored
    fn load(&mut self) -> Option<DeviceConfig>;

    /// Persist the record
    fn save(&mut self, config: &DeviceConfig) -> Result<(), Self::Error>;
}

/// Load the stored configuration, falling back to defaults
///
/// Records that fail validation are treated as missing.
pub fn load_or_default<S: ConfigStore>(store: &mut S, max_leds: usize) -> DeviceConfig {
    match store.load() {
        Some(config) if config.validate(max_leds).is_ok() => config,
        _ => {
            #[cfg(feature = "esp32-log")]
            println!("[config] no valid configuration stored, using defaults");
            DeviceConfig::default()
        }
    }
}
