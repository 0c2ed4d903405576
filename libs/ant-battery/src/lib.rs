//! ANT+ Battery Status Field Codec
//!
//! Bit-exact encoding and decoding of the two packed bytes carried by the
//! ANT+ battery status common page: the battery identifier and the battery
//! descriptive bit field. Every operation is a pure function of its input.
//!
//! # Modules
//!
//! - `status`: `StatusCode`, the 3-bit battery health code
//! - `resolution`: `ResolutionCode`, the operating time counter resolution
//! - `identifier`: `BatteryIdentifier` (count + slot index)
//! - `descriptive`: `BatteryDescriptiveField` (coarse voltage + status + resolution)
//! - `bit_ops`: single-byte field extraction and insertion
//! - `error`: strict conversion errors
//!
//! # Features
//!
//! - `serde` - Serialize/Deserialize for all field types (default)
//!
//! # Example
//!
//! ```
//! use ant_battery::{BatteryDescriptiveField, BatteryIdentifier, StatusCode};
//!
//! let id = BatteryIdentifier::decode(0x23);
//! assert_eq!((id.count(), id.identifier()), (3, 2));
//!
//! let field = BatteryDescriptiveField::decode(0x32);
//! assert_eq!(field.status(), StatusCode::Ok);
//! assert_eq!(field.resolution().to_seconds(100), 1600);
//! ```

pub mod bit_ops;
pub mod descriptive;
pub mod error;
pub mod identifier;
pub mod resolution;
pub mod status;

// Re-exports for convenience
pub use descriptive::BatteryDescriptiveField;
pub use error::{BatteryError, Result};
pub use identifier::BatteryIdentifier;
pub use resolution::ResolutionCode;
pub use status::StatusCode;
