//! Hex color text — digit scanning, formatting, and ARGB reordering.

use crate::constants::{HEX_PREFIX, RGBA_LEN, SHORT_RGBA_LEN};
use crate::error::{HexColorError, Result};

/// Strip the `#` and check that what follows is hex digits.
///
/// Digit count is left to the caller, so `#GG0000` fails here while `#ABCDE`
/// passes.
pub(crate) fn scan(text: &str) -> Result<&str> {
    let digits = text
        .strip_prefix(HEX_PREFIX)
        .ok_or(HexColorError::MissingHashPrefix)?;

    // from_str_radix would also take a leading '+'
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexColorError::UnableToScanHex);
    }
    Ok(digits)
}

/// Value of at most eight scanned digits.
pub(crate) fn value(digits: &str) -> Result<u32> {
    u32::from_str_radix(digits, 16).map_err(|_| HexColorError::UnableToScanHex)
}

/// `#` followed by two uppercase digits per byte.
pub(crate) fn format_bytes(bytes: &[u8]) -> String {
    std::iter::once(HEX_PREFIX.to_string())
        .chain(bytes.iter().map(|b| format!("{:02X}", b)))
        .collect()
}

/// Reorder `#ARGB` / `#AARRGGBB` text into `#RGBA` / `#RRGGBBAA`.
///
/// Returns `None` without the `#` prefix or for any other digit count.
/// Only positions are moved; the digits themselves are not checked.
pub fn argb_to_rgba(text: &str) -> Option<String> {
    let Some(digits) = text.strip_prefix(HEX_PREFIX) else {
        tracing::trace!(text, "argb_to_rgba: missing '#' prefix");
        return None;
    };

    let alpha_len = match digits.chars().count() {
        SHORT_RGBA_LEN => 1,
        RGBA_LEN => 2,
        other => {
            tracing::trace!(text, len = other, "argb_to_rgba: not an ARGB length");
            return None;
        }
    };

    let split = digits
        .char_indices()
        .nth(alpha_len)
        .map_or(digits.len(), |(i, _)| i);
    let (alpha, rgb) = digits.split_at(split);

    let mut out = String::with_capacity(text.len());
    out.push(HEX_PREFIX);
    out.push_str(rgb);
    out.push_str(alpha);
    Some(out)
}
