//! Battery descriptive bit field
//!
//! # Layout
//! - bits 0-3: coarse battery voltage
//! - bits 4-6: battery status code
//! - bit 7: cumulative operating time resolution

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bit_ops::{extract_field, insert_field, low_nibble, NIBBLE_MAX};
use crate::error::{BatteryError, Result};
use crate::resolution::ResolutionCode;
use crate::status::StatusCode;

const VOLTAGE_SHIFT: u8 = 0;
const VOLTAGE_BITS: u8 = 4;
const STATUS_SHIFT: u8 = 4;
const RESOLUTION_SHIFT: u8 = 7;

/// Coarse voltage, health status and operating time resolution of one battery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "DescriptiveFields", into = "DescriptiveFields")
)]
pub struct BatteryDescriptiveField {
    coarse_voltage: u8,
    status: StatusCode,
    resolution: ResolutionCode,
}

impl BatteryDescriptiveField {
    pub const MAX_COARSE_VOLTAGE: u8 = NIBBLE_MAX;

    /// Build from semantic values, clamping `coarse_voltage` to 15
    pub fn new(coarse_voltage: u8, status: StatusCode, resolution: ResolutionCode) -> Self {
        if coarse_voltage > Self::MAX_COARSE_VOLTAGE {
            debug!(
                coarse_voltage,
                "Coarse voltage exceeds {}, clamped",
                Self::MAX_COARSE_VOLTAGE
            );
        }
        Self {
            coarse_voltage: coarse_voltage.min(Self::MAX_COARSE_VOLTAGE),
            status,
            resolution,
        }
    }

    /// Like [`new`](Self::new) but rejects a coarse voltage above 15
    pub fn try_new(
        coarse_voltage: u8,
        status: StatusCode,
        resolution: ResolutionCode,
    ) -> Result<Self> {
        if coarse_voltage > Self::MAX_COARSE_VOLTAGE {
            return Err(BatteryError::out_of_range(
                "coarse_voltage",
                coarse_voltage,
                Self::MAX_COARSE_VOLTAGE,
            ));
        }
        Ok(Self {
            coarse_voltage,
            status,
            resolution,
        })
    }

    /// Unpack a raw descriptive byte
    ///
    /// # Examples
    /// ```
    /// # use ant_battery::{BatteryDescriptiveField, ResolutionCode, StatusCode};
    /// let field = BatteryDescriptiveField::decode(0x32);
    /// assert_eq!(field.coarse_voltage(), 2);
    /// assert_eq!(field.status(), StatusCode::Ok);
    /// assert_eq!(field.resolution(), ResolutionCode::SixteenSecond);
    /// ```
    pub fn decode(raw: u8) -> Self {
        Self {
            coarse_voltage: low_nibble(raw),
            status: StatusCode::decode(extract_field(raw, STATUS_SHIFT, StatusCode::BITS)),
            resolution: ResolutionCode::decode(extract_field(
                raw,
                RESOLUTION_SHIFT,
                ResolutionCode::BITS,
            )),
        }
    }

    /// Pack into a raw descriptive byte
    pub fn encode(&self) -> u8 {
        let raw = insert_field(0, VOLTAGE_SHIFT, VOLTAGE_BITS, self.coarse_voltage);
        let raw = insert_field(raw, STATUS_SHIFT, StatusCode::BITS, self.status.encode());
        insert_field(
            raw,
            RESOLUTION_SHIFT,
            ResolutionCode::BITS,
            self.resolution.encode(),
        )
    }

    pub fn coarse_voltage(&self) -> u8 {
        self.coarse_voltage
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn resolution(&self) -> ResolutionCode {
        self.resolution
    }
}

impl From<u8> for BatteryDescriptiveField {
    fn from(raw: u8) -> Self {
        Self::decode(raw)
    }
}

impl From<BatteryDescriptiveField> for u8 {
    fn from(field: BatteryDescriptiveField) -> Self {
        field.encode()
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct DescriptiveFields {
    coarse_voltage: u8,
    status: StatusCode,
    resolution: ResolutionCode,
}

#[cfg(feature = "serde")]
impl From<DescriptiveFields> for BatteryDescriptiveField {
    fn from(fields: DescriptiveFields) -> Self {
        Self::new(fields.coarse_voltage, fields.status, fields.resolution)
    }
}

#[cfg(feature = "serde")]
impl From<BatteryDescriptiveField> for DescriptiveFields {
    fn from(field: BatteryDescriptiveField) -> Self {
        Self {
            coarse_voltage: field.coarse_voltage,
            status: field.status,
            resolution: field.resolution,
        }
    }
}
