//! # floem-hex
//!
//! Hex color text for [Floem](https://github.com/lapce/floem).
//!
//! Parses `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA` into a normalized RGBA
//! [`SolidColor`], formats colors back to uppercase `#RRGGBB[AA]`, and
//! reorders ARGB text into RGBA. With the `floem` feature the same operations
//! are available on `floem::peniko::Color` through [`ColorHexExt`].
//!
//! ## Usage
//!
//! ```rust
//! use floem_hex::{argb_to_rgba, SolidColor};
//!
//! let color = SolidColor::from_hex_str("#3B82F6").unwrap();
//! assert_eq!(color.to_hex_string().unwrap(), "#3B82F6FF");
//! assert_eq!(argb_to_rgba("#FF3B82F6").as_deref(), Some("#3B82F6FF"));
//! ```

mod color;
mod constants;
mod error;
mod hex;
mod math;
#[cfg(feature = "floem")]
mod native;
#[cfg(feature = "serde")]
mod serde_impl;

pub use color::{Channel, SolidColor};
pub use error::{HexColorError, Result};
pub use hex::argb_to_rgba;
#[cfg(feature = "floem")]
pub use native::ColorHexExt;
