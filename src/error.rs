//! Error type shared by parsing and formatting.

use crate::color::Channel;

/// Failure converting between hex text and [`SolidColor`](crate::SolidColor).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum HexColorError {
    #[error("hex color must start with '#'")]
    MissingHashPrefix,

    #[error("unable to scan hex digits")]
    UnableToScanHex,

    #[error("expected 3, 4, 6 or 8 hex digits, got {0}")]
    MismatchedLength(usize),

    #[error("{channel} channel {value} is outside 0.0..=1.0")]
    ChannelOutOfRange { channel: Channel, value: f64 },
}

pub type Result<T> = std::result::Result<T, HexColorError>;
