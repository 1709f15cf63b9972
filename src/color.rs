//! SolidColor type — the color value behind every hex conversion.
//!
//! Stores RGBA as f64 values in 0.0–1.0 range. Parsing accepts `#RGB`,
//! `#RGBA`, `#RRGGBB` and `#RRGGBBAA`; formatting always produces the long
//! uppercase forms.

use std::fmt;
use std::str::FromStr;

use crate::constants::{RGBA_LEN, RGB_LEN, SHORT_RGBA_LEN, SHORT_RGB_LEN};
use crate::error::{HexColorError, Result};
use crate::{hex, math};

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

/// One of the four channels of a [`SolidColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        })
    }
}

impl SolidColor {
    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
}

impl Default for SolidColor {
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

impl SolidColor {
    /// Create from f64 RGBA (all 0.0–1.0).
    ///
    /// Channels are stored as given; out-of-range values are only rejected
    /// when formatting.
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// `0xRGB` with full opacity. Bits above the low 12 are ignored.
    pub fn from_hex3(value: u16) -> Self {
        Self::from_hex3_with_alpha(value, 1.0)
    }

    /// `0xRGB` with an explicit alpha.
    pub fn from_hex3_with_alpha(value: u16, alpha: f64) -> Self {
        let [_, r, g, b] = math::nibbles(value);
        Self {
            r: math::nibble_to_unit(r),
            g: math::nibble_to_unit(g),
            b: math::nibble_to_unit(b),
            a: alpha,
        }
    }

    /// `0xRGBA`.
    pub fn from_hex4(value: u16) -> Self {
        let [r, g, b, a] = math::nibbles(value);
        Self {
            r: math::nibble_to_unit(r),
            g: math::nibble_to_unit(g),
            b: math::nibble_to_unit(b),
            a: math::nibble_to_unit(a),
        }
    }

    /// `0xRRGGBB` with full opacity. Bits above the low 24 are ignored.
    pub fn from_hex6(value: u32) -> Self {
        Self::from_hex6_with_alpha(value, 1.0)
    }

    /// `0xRRGGBB` with an explicit alpha.
    pub fn from_hex6_with_alpha(value: u32, alpha: f64) -> Self {
        let [_, r, g, b] = value.to_be_bytes();
        Self {
            r: math::byte_to_unit(r),
            g: math::byte_to_unit(g),
            b: math::byte_to_unit(b),
            a: alpha,
        }
    }

    /// `0xRRGGBBAA`.
    pub fn from_hex8(value: u32) -> Self {
        let [r, g, b, a] = value.to_be_bytes();
        Self {
            r: math::byte_to_unit(r),
            g: math::byte_to_unit(g),
            b: math::byte_to_unit(b),
            a: math::byte_to_unit(a),
        }
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (case-insensitive).
    ///
    /// Shorthand digits are normalized by /15, full bytes by /255. Colors
    /// without an alpha digit are fully opaque.
    pub fn from_hex_str(text: &str) -> Result<Self> {
        let digits = hex::scan(text)?;
        match digits.len() {
            SHORT_RGB_LEN => Ok(Self::from_hex3(hex::value(digits)? as u16)),
            SHORT_RGBA_LEN => Ok(Self::from_hex4(hex::value(digits)? as u16)),
            RGB_LEN => Ok(Self::from_hex6(hex::value(digits)?)),
            RGBA_LEN => Ok(Self::from_hex8(hex::value(digits)?)),
            other => Err(HexColorError::MismatchedLength(other)),
        }
    }

    /// Like [`from_hex_str`](Self::from_hex_str), falling back to `default`
    /// on any parse error.
    pub fn from_hex_str_or(text: &str, default: SolidColor) -> Self {
        Self::from_hex_str(text).unwrap_or_else(|err| {
            tracing::debug!(text, %err, "invalid hex color, using default");
            default
        })
    }

    /// Format as `#RRGGBBAA`.
    pub fn to_hex_string(&self) -> Result<String> {
        self.to_hex_string_with(true)
    }

    /// Format as `#RRGGBBAA`, or `#RRGGBB` when `include_alpha` is false.
    ///
    /// Every written channel must be within 0.0–1.0; each is scaled by 255
    /// and truncated.
    pub fn to_hex_string_with(&self, include_alpha: bool) -> Result<String> {
        let channels = self.channels();
        let written = if include_alpha {
            &channels[..]
        } else {
            &channels[..3]
        };
        let bytes = written
            .iter()
            .map(|&(channel, value)| quantize(channel, value))
            .collect::<Result<Vec<u8>>>()?;
        Ok(hex::format_bytes(&bytes))
    }

    /// Like [`to_hex_string_with`](Self::to_hex_string_with), returning an
    /// empty string when a channel is out of range.
    pub fn to_hex_string_or_empty(&self, include_alpha: bool) -> String {
        self.to_hex_string_with(include_alpha).unwrap_or_else(|err| {
            tracing::debug!(color = ?self, %err, "color has no hex form");
            String::new()
        })
    }

    /// All four channels as 0–255 bytes, quantized like hex output.
    #[cfg(feature = "floem")]
    pub(crate) fn to_rgba8(self) -> Result<[u8; 4]> {
        let [r, g, b, a] = self.channels().map(|(channel, value)| quantize(channel, value));
        Ok([r?, g?, b?, a?])
    }

    fn channels(&self) -> [(Channel, f64); 4] {
        [
            (Channel::Red, self.r),
            (Channel::Green, self.g),
            (Channel::Blue, self.b),
            (Channel::Alpha, self.a),
        ]
    }
}

fn quantize(channel: Channel, value: f64) -> Result<u8> {
    if !math::in_unit_range(value) {
        return Err(HexColorError::ChannelOutOfRange { channel, value });
    }
    Ok(math::unit_to_byte(value))
}

impl FromStr for SolidColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex_str(s)
    }
}
