//! Battery Field Error Types
//!
//! Only the strict conversions return these. The wire paths (`decode`,
//! `encode`, `new`) are total and never fail.

use thiserror::Error;

/// Result type for ant-battery operations
pub type Result<T> = std::result::Result<T, BatteryError>;

/// Battery status field errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BatteryError {
    /// Raw status code with no named variant (6, or anything wider than 3 bits)
    #[error("Unassigned battery status code: {0}")]
    UnassignedStatusCode(u8),

    /// Raw resolution code wider than 1 bit
    #[error("Invalid operating time resolution code: {0}")]
    InvalidResolutionCode(u8),

    /// Name that matches no variant
    #[error("Unknown {kind} name: '{name}'")]
    UnknownName { kind: &'static str, name: String },

    /// Semantic value that does not fit its bit field
    #[error("Out of range: {field} = {value}, max {max}")]
    OutOfRange {
        field: &'static str,
        value: u8,
        max: u8,
    },
}

// Helper methods
impl BatteryError {
    pub fn unknown_name(kind: &'static str, name: impl Into<String>) -> Self {
        BatteryError::UnknownName {
            kind,
            name: name.into(),
        }
    }

    pub fn out_of_range(field: &'static str, value: u8, max: u8) -> Self {
        BatteryError::OutOfRange { field, value, max }
    }
}
