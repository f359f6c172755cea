//! Render state: the active mode and its parameters

use core::fmt;

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::request::StateRequest;

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_ON: &str = "on";
const MODE_NAME_PULSE: &str = "pulse";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_KNIGHT_RIDER: &str = "knight-rider";
const MODE_NAME_FIRE: &str = "fire";

const MODE_ID_OFF: u8 = 0;
const MODE_ID_ON: u8 = 1;
const MODE_ID_PULSE: u8 = 2;
const MODE_ID_RAINBOW: u8 = 3;
const MODE_ID_KNIGHT_RIDER: u8 = 4;
const MODE_ID_FIRE: u8 = 5;

/// Default pulse and scan period
pub const DEFAULT_PERIOD_MS: u32 = 5000;
/// Default fire cooling: less cooling gives taller flames
pub const DEFAULT_FIRE_COOLING: u8 = 40;
/// Default chance (out of 255) of a new spark per frame
pub const DEFAULT_FIRE_SPARKING: u8 = 80;

/// Visual modes, in cycling order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    #[default]
    Off = MODE_ID_OFF,
    On = MODE_ID_ON,
    Pulse = MODE_ID_PULSE,
    Rainbow = MODE_ID_RAINBOW,
    KnightRider = MODE_ID_KNIGHT_RIDER,
    Fire = MODE_ID_FIRE,
}

impl Mode {
    /// Every mode in declaration order
    pub const ALL: [Self; 6] = [
        Self::Off,
        Self::On,
        Self::Pulse,
        Self::Rainbow,
        Self::KnightRider,
        Self::Fire,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_OFF => Self::Off,
            MODE_ID_ON => Self::On,
            MODE_ID_PULSE => Self::Pulse,
            MODE_ID_RAINBOW => Self::Rainbow,
            MODE_ID_KNIGHT_RIDER => Self::KnightRider,
            MODE_ID_FIRE => Self::Fire,
            _ => return None,
        })
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::On => MODE_NAME_ON,
            Self::Pulse => MODE_NAME_PULSE,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::KnightRider => MODE_NAME_KNIGHT_RIDER,
            Self::Fire => MODE_NAME_FIRE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_OFF => Some(Self::Off),
            MODE_NAME_ON => Some(Self::On),
            MODE_NAME_PULSE => Some(Self::Pulse),
            MODE_NAME_RAINBOW => Some(Self::Rainbow),
            MODE_NAME_KNIGHT_RIDER => Some(Self::KnightRider),
            MODE_NAME_FIRE => Some(Self::Fire),
            _ => None,
        }
    }

    /// Next mode, wrapping from the last back to the first
    pub const fn next(self) -> Self {
        match Self::from_raw(self.id() + 1) {
            Some(mode) => mode,
            None => Self::Off,
        }
    }

    /// Whether the mode renders the hue/saturation/value color
    pub const fn uses_color(self) -> bool {
        matches!(self, Self::On | Self::Pulse | Self::KnightRider)
    }

    /// Whether the mode animates over `period`
    pub const fn uses_period(self) -> bool {
        matches!(self, Self::Pulse | Self::KnightRider)
    }

    /// Whether the mode reads the fire tuning parameters
    pub const fn uses_fire(self) -> bool {
        matches!(self, Self::Fire)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a request cannot be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// The request names a mode that does not exist
    UnknownMode,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMode => f.write_str("unknown mode"),
        }
    }
}

/// Active mode and per-mode parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    pub mode: Mode,
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
    /// Pulse and scan period in milliseconds, never zero
    period_ms: u32,
    pub fire_cooling: u8,
    pub fire_sparking: u8,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            mode: Mode::Off,
            hue: 0,
            saturation: 0,
            value: 255,
            period_ms: DEFAULT_PERIOD_MS,
            fire_cooling: DEFAULT_FIRE_COOLING,
            fire_sparking: DEFAULT_FIRE_SPARKING,
        }
    }
}

impl RenderState {
    /// Pulse and scan period in milliseconds
    pub const fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Pulse and scan period
    #[allow(clippy::cast_lossless)]
    pub const fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms as u64)
    }

    /// Set the period, ignoring zero
    pub fn set_period_ms(&mut self, period_ms: u32) {
        if period_ms > 0 {
            self.period_ms = period_ms;
        }
    }

    /// Apply a change request
    ///
    /// Fields the requested mode does not use, and fields the request
    /// omits, keep their current values. An unknown mode name rejects the
    /// whole request and leaves the state untouched.
    pub fn update(&mut self, request: &StateRequest<'_>) -> Result<(), StateError> {
        let Some(mode) = Mode::parse_from_str(request.mode) else {
            #[cfg(feature = "esp32-log")]
            println!("[state] rejected unknown mode: {}", request.mode);
            return Err(StateError::UnknownMode);
        };

        let mut next = *self;
        if mode.uses_color() {
            next.hue = request.hue.unwrap_or(next.hue);
            next.saturation = request.saturation.unwrap_or(next.saturation);
            next.value = request.value.unwrap_or(next.value);
        }
        if mode.uses_period() {
            if let Some(period_ms) = request.period {
                next.set_period_ms(period_ms);
            }
        }
        if mode.uses_fire() {
            next.fire_cooling = request.fire_cooling.unwrap_or(next.fire_cooling);
            next.fire_sparking = request.fire_sparking.unwrap_or(next.fire_sparking);
        }
        next.mode = mode;

        *self = next;
        #[cfg(feature = "esp32-log")]
        println!("[state] {}", self.describe());
        Ok(())
    }

    /// Advance to the next mode, keeping all parameters
    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
        #[cfg(feature = "esp32-log")]
        println!("[state] cycled to {}", self.describe());
    }

    /// Human readable summary of the active mode
    pub const fn describe(&self) -> Description<'_> {
        Description { state: self }
    }
}

/// Mode-specific summary of a [`RenderState`]
pub struct Description<'a> {
    state: &'a RenderState,
}

impl Description<'_> {
    fn write_hsv(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        write!(
            f,
            "hsv #{:02x}{:02x}{:02x}",
            state.hue, state.saturation, state.value
        )
    }
}

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        f.write_str(state.mode.as_str())?;
        match state.mode {
            Mode::Off | Mode::Rainbow => Ok(()),
            Mode::On => {
                f.write_str(" (")?;
                self.write_hsv(f)?;
                f.write_str(")")
            }
            Mode::Pulse | Mode::KnightRider => {
                f.write_str(" (")?;
                self.write_hsv(f)?;
                write!(f, ", period {} ms)", state.period_ms)
            }
            Mode::Fire => write!(
                f,
                " (cooling {}, sparking {})",
                state.fire_cooling, state.fire_sparking
            ),
        }
    }
}
