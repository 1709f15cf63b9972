//! Channel math — bit extraction and normalization.
//! Channels are normalized f64 in 0.0–1.0; packed forms are big-endian.

use crate::constants::{BYTE_MAX, NIBBLE_MAX};

/// Split a 16-bit value into its four nibbles, most significant first.
pub(crate) fn nibbles(value: u16) -> [u8; 4] {
    [
        ((value >> 12) & 0xF) as u8,
        ((value >> 8) & 0xF) as u8,
        ((value >> 4) & 0xF) as u8,
        (value & 0xF) as u8,
    ]
}

/// Nibble (0–15) → 0.0–1.0.
pub(crate) fn nibble_to_unit(n: u8) -> f64 {
    n as f64 / NIBBLE_MAX
}

/// Byte (0–255) → 0.0–1.0.
pub(crate) fn byte_to_unit(b: u8) -> f64 {
    b as f64 / BYTE_MAX
}

/// 0.0–1.0 → byte, truncating toward zero.
///
/// Callers check the range first; the cast saturates anything that slips past.
pub(crate) fn unit_to_byte(c: f64) -> u8 {
    (c * BYTE_MAX) as u8
}

/// Whether a channel value can be written as a hex byte.
pub(crate) fn in_unit_range(c: f64) -> bool {
    (0.0..=1.0).contains(&c)
}
