//! Cumulative operating time resolution
//!
//! Bit 7 of the descriptive bit field selects how many seconds one tick of
//! the accompanying cumulative operating time counter represents.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{BatteryError, Result};

/// Tick granularity of the cumulative operating time counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResolutionCode {
    /// 16 seconds per tick (code 0)
    #[cfg_attr(feature = "serde", serde(alias = "sixteen_second", alias = "16s"))]
    SixteenSecond,
    /// 2 seconds per tick (code 1)
    #[cfg_attr(feature = "serde", serde(alias = "two_second", alias = "2s"))]
    TwoSecond,
}

impl ResolutionCode {
    /// Width of the resolution field in bits
    pub const BITS: u8 = 1;

    pub const ALL: [ResolutionCode; 2] =
        [ResolutionCode::SixteenSecond, ResolutionCode::TwoSecond];

    /// Decode a raw resolution bit; anything but 0 is `TwoSecond`
    pub fn decode(raw: u8) -> Self {
        match raw {
            0 => ResolutionCode::SixteenSecond,
            1 => ResolutionCode::TwoSecond,
            _ => {
                trace!(code = raw, "Out-of-range resolution code, using TwoSecond");
                ResolutionCode::TwoSecond
            },
        }
    }

    pub fn encode(self) -> u8 {
        match self {
            ResolutionCode::SixteenSecond => 0,
            ResolutionCode::TwoSecond => 1,
        }
    }

    /// Seconds represented by one counter tick
    ///
    /// # Examples
    /// ```
    /// # use ant_battery::ResolutionCode;
    /// assert_eq!(ResolutionCode::SixteenSecond.multiplier(), 16);
    /// assert_eq!(ResolutionCode::TwoSecond.multiplier(), 2);
    /// ```
    pub fn multiplier(self) -> u8 {
        match self {
            ResolutionCode::SixteenSecond => 16,
            ResolutionCode::TwoSecond => 2,
        }
    }

    /// Convert a cumulative operating time counter to seconds (saturating)
    pub fn to_seconds(self, ticks: u32) -> u32 {
        ticks.saturating_mul(u32::from(self.multiplier()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionCode::SixteenSecond => "SixteenSecond",
            ResolutionCode::TwoSecond => "TwoSecond",
        }
    }
}

impl Default for ResolutionCode {
    fn default() -> Self {
        Self::TwoSecond
    }
}

impl fmt::Display for ResolutionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResolutionCode {
    type Err = BatteryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|resolution| resolution.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| BatteryError::unknown_name("resolution", s))
    }
}

/// Strict conversion: only 0 and 1 are accepted
impl TryFrom<u8> for ResolutionCode {
    type Error = BatteryError;

    fn try_from(raw: u8) -> Result<Self> {
        match raw {
            0 | 1 => Ok(Self::decode(raw)),
            _ => Err(BatteryError::InvalidResolutionCode(raw)),
        }
    }
}

impl From<ResolutionCode> for u8 {
    fn from(resolution: ResolutionCode) -> Self {
        resolution.encode()
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_resolution_codes() {
        assert_eq!(ResolutionCode::decode(0), ResolutionCode::SixteenSecond);
        assert_eq!(ResolutionCode::decode(1), ResolutionCode::TwoSecond);
        assert_eq!(ResolutionCode::SixteenSecond.encode(), 0);
        assert_eq!(ResolutionCode::TwoSecond.encode(), 1);
    }

    #[test]
    #[traced_test]
    fn test_out_of_range_falls_back_to_two_second() {
        assert_eq!(ResolutionCode::decode(2), ResolutionCode::TwoSecond);
        assert_eq!(ResolutionCode::decode(0xFF), ResolutionCode::TwoSecond);
        assert!(logs_contain("Out-of-range resolution code"));
    }

    #[test]
    fn test_to_seconds() {
        assert_eq!(ResolutionCode::SixteenSecond.to_seconds(10), 160);
        assert_eq!(ResolutionCode::TwoSecond.to_seconds(10), 20);
        // 24-bit counter maximum
        assert_eq!(ResolutionCode::SixteenSecond.to_seconds(0xFF_FFFF), 268_435_440);
        assert_eq!(ResolutionCode::TwoSecond.to_seconds(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(
            "twosecond".parse::<ResolutionCode>().unwrap(),
            ResolutionCode::TwoSecond
        );
        assert_eq!(ResolutionCode::SixteenSecond.to_string(), "SixteenSecond");
        assert!("OneSecond".parse::<ResolutionCode>().is_err());
    }

    #[test]
    fn test_try_from_strict() {
        assert_eq!(
            ResolutionCode::try_from(0).unwrap(),
            ResolutionCode::SixteenSecond
        );
        assert_eq!(
            ResolutionCode::try_from(2),
            Err(BatteryError::InvalidResolutionCode(2))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_resolution_serde() {
        assert_eq!(
            serde_json::to_string(&ResolutionCode::TwoSecond).unwrap(),
            "\"TwoSecond\""
        );
        assert_eq!(
            serde_json::from_str::<ResolutionCode>("\"16s\"").unwrap(),
            ResolutionCode::SixteenSecond
        );
    }
}
