//! Notation and scaling constants for hex color text.

/// Leading character of every hex color string
pub const HEX_PREFIX: char = '#';

/// Largest value of a single hex digit
pub const NIBBLE_MAX: f64 = 15.0;

/// Largest value of a two-digit hex byte
pub const BYTE_MAX: f64 = 255.0;

/// `#RGB`
pub const SHORT_RGB_LEN: usize = 3;

/// `#RGBA`
pub const SHORT_RGBA_LEN: usize = 4;

/// `#RRGGBB`
pub const RGB_LEN: usize = 6;

/// `#RRGGBBAA`
pub const RGBA_LEN: usize = 8;
