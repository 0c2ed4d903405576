//! Bit-level operations for single-byte packed fields
//!
//! Every packed battery type shares one byte between several narrow
//! sub-fields. Bit numbering is LSB-first: bit 0 is the least significant
//! bit of the byte.

/// Largest value a 4-bit field (nibble) can hold
pub const NIBBLE_MAX: u8 = 0x0F;

/// Mask covering the low `bit_length` bits (1-8)
#[inline]
pub fn field_mask(bit_length: u8) -> u8 {
    debug_assert!(
        (1..=8).contains(&bit_length),
        "Bit length out of range: {}",
        bit_length
    );
    ((1u16 << bit_length) - 1) as u8
}

/// Extract a multi-bit field from a byte
///
/// # Arguments
/// * `value` - Source byte
/// * `start_bit` - Position of the field's least significant bit (0-7)
/// * `bit_length` - Field width in bits (1-8)
///
/// # Returns
/// The field right-aligned, always `<= field_mask(bit_length)`
#[inline]
pub fn extract_field(value: u8, start_bit: u8, bit_length: u8) -> u8 {
    debug_assert!(
        start_bit + bit_length <= 8,
        "Field exceeds byte: start {} length {}",
        start_bit,
        bit_length
    );
    (value >> start_bit) & field_mask(bit_length)
}

/// Insert a multi-bit field into a byte
///
/// The target bits are cleared first and `field` is masked to `bit_length`
/// bits, so neighbouring fields are never disturbed by an oversized value.
#[inline]
pub fn insert_field(value: u8, start_bit: u8, bit_length: u8, field: u8) -> u8 {
    debug_assert!(
        start_bit + bit_length <= 8,
        "Field exceeds byte: start {} length {}",
        start_bit,
        bit_length
    );
    let mask = field_mask(bit_length) << start_bit;
    (value & !mask) | ((field << start_bit) & mask)
}

/// Low nibble (bits 0-3)
#[inline]
pub fn low_nibble(value: u8) -> u8 {
    extract_field(value, 0, 4)
}

/// High nibble (bits 4-7)
#[inline]
pub fn high_nibble(value: u8) -> u8 {
    extract_field(value, 4, 4)
}
