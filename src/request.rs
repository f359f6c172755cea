//! JSON request and status payloads
//!
//! The transport hands over raw request bodies and expects a serialized
//! status back. Both directions go through fixed buffers.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::state::RenderState;

/// Error raised while decoding or encoding a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// The body is not a valid request object (bad JSON, missing `mode`,
    /// or a number out of range for its field)
    Malformed,
    /// The output buffer is too small for the status payload
    BufferTooSmall,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => f.write_str("malformed request body"),
            Self::BufferTooSmall => f.write_str("status buffer too small"),
        }
    }
}

/// Requested change to the render state
///
/// Every field except `mode` is optional; omitted fields keep their
/// current values when the request is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StateRequest<'a> {
    pub mode: &'a str,
    #[serde(default)]
    pub hue: Option<u8>,
    #[serde(default)]
    pub saturation: Option<u8>,
    #[serde(default)]
    pub value: Option<u8>,
    #[serde(default)]
    pub period: Option<u32>,
    #[serde(default, rename = "fire-cooling")]
    pub fire_cooling: Option<u8>,
    #[serde(default, rename = "fire-sparking")]
    pub fire_sparking: Option<u8>,
}

impl<'a> StateRequest<'a> {
    /// Request that only switches the mode
    pub const fn mode(mode: &'a str) -> Self {
        Self {
            mode,
            hue: None,
            saturation: None,
            value: None,
            period: None,
            fire_cooling: None,
            fire_sparking: None,
        }
    }

    #[must_use]
    pub const fn with_hsv(mut self, hue: u8, saturation: u8, value: u8) -> Self {
        self.hue = Some(hue);
        self.saturation = Some(saturation);
        self.value = Some(value);
        self
    }

    #[must_use]
    pub const fn with_hue(mut self, hue: u8) -> Self {
        self.hue = Some(hue);
        self
    }

    #[must_use]
    pub const fn with_period(mut self, period_ms: u32) -> Self {
        self.period = Some(period_ms);
        self
    }

    #[must_use]
    pub const fn with_fire_cooling(mut self, cooling: u8) -> Self {
        self.fire_cooling = Some(cooling);
        self
    }

    #[must_use]
    pub const fn with_fire_sparking(mut self, sparking: u8) -> Self {
        self.fire_sparking = Some(sparking);
        self
    }
}

/// Full snapshot of the render state, shaped like a [`StateRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub mode: &'static str,
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
    pub period: u32,
    #[serde(rename = "fire-cooling")]
    pub fire_cooling: u8,
    #[serde(rename = "fire-sparking")]
    pub fire_sparking: u8,
}

impl From<&RenderState> for StatusReport {
    fn from(state: &RenderState) -> Self {
        Self {
            mode: state.mode.as_str(),
            hue: state.hue,
            saturation: state.saturation,
            value: state.value,
            period: state.period_ms(),
            fire_cooling: state.fire_cooling,
            fire_sparking: state.fire_sparking,
        }
    }
}

impl RenderState {
    /// Snapshot for status queries
    pub fn serialize(&self) -> StatusReport {
        StatusReport::from(self)
    }
}

/// Decode a JSON request body
///
/// The returned request borrows the mode name from `body`.
pub fn parse_request(body: &[u8]) -> Result<StateRequest<'_>, RequestError> {
    let (request, _) =
        serde_json_core::from_slice::<StateRequest<'_>>(body).map_err(|_| RequestError::Malformed)?;
    Ok(request)
}

/// Encode the current state as JSON into `buf`
///
/// Returns the number of bytes written.
pub fn write_status(state: &RenderState, buf: &mut [u8]) -> Result<usize, RequestError> {
    serde_json_core::to_slice(&state.serialize(), buf).map_err(|_| RequestError::BufferTooSmall)
}
