//! `SolidColor` as `#RRGGBBAA` text in serialized data.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{self, Serialize, Serializer};
use std::fmt;

use crate::SolidColor;

impl Serialize for SolidColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let hex = self.to_hex_string().map_err(ser::Error::custom)?;
        serializer.serialize_str(&hex)
    }
}

struct HexVisitor;

impl Visitor<'_> for HexVisitor {
    type Value = SolidColor;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex color string such as \"#RRGGBB\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<SolidColor, E> {
        SolidColor::from_hex_str(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for SolidColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexVisitor)
    }
}
