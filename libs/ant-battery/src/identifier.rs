//! Battery identifier byte
//!
//! Names the battery a status record refers to and how many batteries the
//! device has.
//!
//! # Layout
//! - bits 0-3: number of batteries (`count`)
//! - bits 4-7: battery identifier (0-based slot index)

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bit_ops::{high_nibble, insert_field, low_nibble, NIBBLE_MAX};
use crate::error::{BatteryError, Result};

const COUNT_SHIFT: u8 = 0;
const IDENTIFIER_SHIFT: u8 = 4;
const NIBBLE_BITS: u8 = 4;

/// Battery count and slot index packed into one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "IdentifierFields", into = "IdentifierFields")
)]
pub struct BatteryIdentifier {
    count: u8,
    identifier: u8,
}

impl BatteryIdentifier {
    /// Maximum number of batteries a device can report
    pub const MAX_COUNT: u8 = NIBBLE_MAX;

    /// Build from semantic values, clamping `count` to 15
    ///
    /// `identifier` is kept as given; values above 15 are masked to 4 bits
    /// by [`encode`](Self::encode).
    ///
    /// # Examples
    /// ```
    /// # use ant_battery::BatteryIdentifier;
    /// let id = BatteryIdentifier::new(20, 3);
    /// assert_eq!(id.count(), 15);
    /// assert_eq!(id.identifier(), 3);
    /// ```
    pub fn new(count: u8, identifier: u8) -> Self {
        if count > Self::MAX_COUNT {
            debug!(count, "Battery count exceeds {}, clamped", Self::MAX_COUNT);
        }
        Self {
            count: count.min(Self::MAX_COUNT),
            identifier,
        }
    }

    /// Build from semantic values, rejecting anything that does not fit a nibble
    pub fn try_new(count: u8, identifier: u8) -> Result<Self> {
        if count > Self::MAX_COUNT {
            return Err(BatteryError::out_of_range("count", count, Self::MAX_COUNT));
        }
        if identifier > NIBBLE_MAX {
            return Err(BatteryError::out_of_range(
                "identifier",
                identifier,
                NIBBLE_MAX,
            ));
        }
        Ok(Self { count, identifier })
    }

    /// Unpack a raw identifier byte
    pub fn decode(raw: u8) -> Self {
        Self {
            count: low_nibble(raw),
            identifier: high_nibble(raw),
        }
    }

    /// Pack into a raw identifier byte
    pub fn encode(&self) -> u8 {
        if self.identifier > NIBBLE_MAX {
            debug!(
                identifier = self.identifier,
                "Battery identifier wider than 4 bits, masked on encode"
            );
        }
        let raw = insert_field(0, COUNT_SHIFT, NIBBLE_BITS, self.count);
        insert_field(raw, IDENTIFIER_SHIFT, NIBBLE_BITS, self.identifier)
    }

    /// Number of batteries in the system
    pub fn count(&self) -> u8 {
        self.count
    }

    /// 0-based slot index of this battery
    pub fn identifier(&self) -> u8 {
        self.identifier
    }
}

impl From<u8> for BatteryIdentifier {
    fn from(raw: u8) -> Self {
        Self::decode(raw)
    }
}

impl From<BatteryIdentifier> for u8 {
    fn from(id: BatteryIdentifier) -> Self {
        id.encode()
    }
}

/// Serialized shape; deserializing goes through `new` so clamping applies
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct IdentifierFields {
    count: u8,
    identifier: u8,
}

#[cfg(feature = "serde")]
impl From<IdentifierFields> for BatteryIdentifier {
    fn from(fields: IdentifierFields) -> Self {
        Self::new(fields.count, fields.identifier)
    }
}

#[cfg(feature = "serde")]
impl From<BatteryIdentifier> for IdentifierFields {
    fn from(id: BatteryIdentifier) -> Self {
        Self {
            count: id.count,
            identifier: id.identifier,
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_known_vector() {
        let id = BatteryIdentifier::decode(0x23);
        assert_eq!(id.count(), 3);
        assert_eq!(id.identifier(), 2);
        assert_eq!(BatteryIdentifier::new(3, 2).encode(), 0x23);
    }

    #[test]
    fn test_roundtrip_all_nibbles() {
        for count in 0..=15 {
            for identifier in 0..=15 {
                let id = BatteryIdentifier::new(count, identifier);
                assert_eq!(
                    BatteryIdentifier::decode(id.encode()),
                    id,
                    "count={} identifier={}",
                    count,
                    identifier
                );
            }
        }
    }

    #[test]
    #[traced_test]
    fn test_count_clamped() {
        let id = BatteryIdentifier::new(20, 3);
        assert_eq!(id.count(), 15);
        assert_eq!(id.identifier(), 3);
        assert!(logs_contain("clamped"));

        assert_eq!(BatteryIdentifier::new(u8::MAX, 0).count(), 15);
    }

    #[test]
    #[traced_test]
    fn test_oversized_identifier_masked() {
        let id = BatteryIdentifier::new(1, 0x1A);
        assert_eq!(id.identifier(), 0x1A);
        assert_eq!(id.encode(), 0xA1);
        assert!(logs_contain("masked on encode"));

        // Re-decoding the masked byte is stable
        let decoded = BatteryIdentifier::decode(id.encode());
        assert_eq!(decoded, BatteryIdentifier::new(1, 0xA));
        assert_eq!(BatteryIdentifier::decode(decoded.encode()), decoded);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(
            BatteryIdentifier::try_new(4, 1).unwrap(),
            BatteryIdentifier::new(4, 1)
        );
        assert_eq!(
            BatteryIdentifier::try_new(16, 1),
            Err(BatteryError::out_of_range("count", 16, 15))
        );
        assert_eq!(
            BatteryIdentifier::try_new(1, 16),
            Err(BatteryError::out_of_range("identifier", 16, 15))
        );
    }

    #[test]
    fn test_conversions() {
        let id: BatteryIdentifier = 0xA1.into();
        assert_eq!(id.count(), 1);
        assert_eq!(id.identifier(), 0xA);
        assert_eq!(u8::from(id), 0xA1);
        assert_eq!(BatteryIdentifier::default().encode(), 0x00);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_identifier_serde() {
        let json = serde_json::to_string(&BatteryIdentifier::new(3, 2)).unwrap();
        assert_eq!(json, r#"{"count":3,"identifier":2}"#);

        let id: BatteryIdentifier =
            serde_json::from_str(r#"{"count":40,"identifier":1}"#).unwrap();
        assert_eq!(id.count(), 15);
        assert_eq!(id.identifier(), 1);
    }
}
