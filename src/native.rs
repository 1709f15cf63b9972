//! Hex conversions on Floem's own color type.

use floem::peniko::Color;

use crate::error::{HexColorError, Result};
use crate::SolidColor;

impl From<Color> for SolidColor {
    fn from(c: Color) -> Self {
        SolidColor::from_hex8(u32::from_be_bytes([c.r, c.g, c.b, c.a]))
    }
}

/// Quantizes the same way as hex output, so `#RRGGBBAA` text and the
/// resulting [`Color`] always agree.
impl TryFrom<SolidColor> for Color {
    type Error = HexColorError;

    fn try_from(c: SolidColor) -> Result<Self> {
        let [r, g, b, a] = c.to_rgba8()?;
        Ok(Color::rgba8(r, g, b, a))
    }
}

/// Hex parsing and formatting for [`floem::peniko::Color`].
///
/// ```rust,no_run
/// use floem::peniko::Color;
/// use floem_hex::ColorHexExt;
///
/// let accent = Color::from_hex_str_or("#3B82F6", Color::BLACK);
/// assert_eq!(accent.to_hex_string_with(false).unwrap(), "#3B82F6");
/// ```
pub trait ColorHexExt: Sized {
    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    fn from_hex_str(text: &str) -> Result<Self>;

    /// Parse, falling back to `default` on any error.
    fn from_hex_str_or(text: &str, default: Self) -> Self;

    /// Format as `#RRGGBBAA`.
    fn to_hex_string(&self) -> Result<String> {
        self.to_hex_string_with(true)
    }

    /// Format as `#RRGGBBAA`, or `#RRGGBB` without alpha.
    fn to_hex_string_with(&self, include_alpha: bool) -> Result<String>;

    /// Format, or an empty string on failure.
    fn to_hex_string_or_empty(&self, include_alpha: bool) -> String;
}

impl ColorHexExt for Color {
    fn from_hex_str(text: &str) -> Result<Self> {
        SolidColor::from_hex_str(text).and_then(Color::try_from)
    }

    fn from_hex_str_or(text: &str, default: Self) -> Self {
        Self::from_hex_str(text).unwrap_or_else(|err| {
            tracing::debug!(text, %err, "invalid hex color, using default");
            default
        })
    }

    // A peniko color is stored as bytes, so it always has a hex form.
    fn to_hex_string_with(&self, include_alpha: bool) -> Result<String> {
        SolidColor::from(*self).to_hex_string_with(include_alpha)
    }

    fn to_hex_string_or_empty(&self, include_alpha: bool) -> String {
        SolidColor::from(*self).to_hex_string_or_empty(include_alpha)
    }
}
