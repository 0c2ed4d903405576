//! Battery status codes
//!
//! The 3-bit health code carried in bits 4-6 of the descriptive bit field.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{BatteryError, Result};

/// Battery health as reported by the device
///
/// Code 6 is reserved by the protocol and has no variant. Decoding it (or
/// any value wider than 3 bits) yields [`StatusCode::Invalid`], so
/// `decode(6).encode() == 7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StatusCode {
    #[cfg_attr(feature = "serde", serde(alias = "reserved"))]
    Reserved,
    #[cfg_attr(feature = "serde", serde(alias = "new"))]
    New,
    #[cfg_attr(feature = "serde", serde(alias = "good"))]
    Good,
    #[cfg_attr(feature = "serde", serde(alias = "ok", alias = "OK"))]
    Ok,
    #[cfg_attr(feature = "serde", serde(alias = "low"))]
    Low,
    #[cfg_attr(feature = "serde", serde(alias = "critical"))]
    Critical,
    #[cfg_attr(feature = "serde", serde(alias = "invalid"))]
    Invalid,
}

impl StatusCode {
    /// Width of the status field in bits
    pub const BITS: u8 = 3;

    /// Every named status, in code order
    pub const ALL: [StatusCode; 7] = [
        StatusCode::Reserved,
        StatusCode::New,
        StatusCode::Good,
        StatusCode::Ok,
        StatusCode::Low,
        StatusCode::Critical,
        StatusCode::Invalid,
    ];

    /// Decode a raw status code, falling back to `Invalid` for unmapped codes
    ///
    /// # Examples
    /// ```
    /// # use ant_battery::StatusCode;
    /// assert_eq!(StatusCode::decode(2), StatusCode::Good);
    /// assert_eq!(StatusCode::decode(6), StatusCode::Invalid);
    /// ```
    pub fn decode(raw: u8) -> Self {
        match raw {
            0 => StatusCode::Reserved,
            1 => StatusCode::New,
            2 => StatusCode::Good,
            3 => StatusCode::Ok,
            4 => StatusCode::Low,
            5 => StatusCode::Critical,
            7 => StatusCode::Invalid,
            _ => {
                trace!(code = raw, "Unassigned battery status code, using Invalid");
                StatusCode::Invalid
            },
        }
    }

    /// Numeric code placed on the wire
    pub fn encode(self) -> u8 {
        match self {
            StatusCode::Reserved => 0,
            StatusCode::New => 1,
            StatusCode::Good => 2,
            StatusCode::Ok => 3,
            StatusCode::Low => 4,
            StatusCode::Critical => 5,
            StatusCode::Invalid => 7,
        }
    }

    /// Whether `raw` names a status without going through the fallback
    pub fn is_assigned_code(raw: u8) -> bool {
        matches!(raw, 0..=5 | 7)
    }

    /// Human-readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Reserved => "Reserved",
            StatusCode::New => "New",
            StatusCode::Good => "Good",
            StatusCode::Ok => "Ok",
            StatusCode::Low => "Low",
            StatusCode::Critical => "Critical",
            StatusCode::Invalid => "Invalid",
        }
    }
}

impl Default for StatusCode {
    fn default() -> Self {
        Self::Invalid
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StatusCode {
    type Err = BatteryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| BatteryError::unknown_name("status", s))
    }
}

/// Strict conversion: rejects code 6 and anything wider than 3 bits
impl TryFrom<u8> for StatusCode {
    type Error = BatteryError;

    fn try_from(raw: u8) -> Result<Self> {
        if Self::is_assigned_code(raw) {
            Ok(Self::decode(raw))
        } else {
            Err(BatteryError::UnassignedStatusCode(raw))
        }
    }
}

impl From<StatusCode> for u8 {
    fn from(status: StatusCode) -> Self {
        status.encode()
    }
}
