//! Hex colors used for bed fill and stroke.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An opaque RGB color, written and parsed as `#rrggbb` (or the `#rgb` short form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Default fill for new beds.
    pub const GRASS: Color = Color::rgb(0x22, 0xc5, 0x5e);
    /// Default outline for new beds.
    pub const SLATE: Color = Color::rgb(0x37, 0x41, 0x51);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHex(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Color::rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let c: Color = "#22c55e".parse().unwrap();
        assert_eq!(c, Color::GRASS);
        assert_eq!(c.to_string(), "#22c55e");
    }

    #[test]
    fn test_parse_short_form() {
        let c: Color = "#fa0".parse().unwrap();
        assert_eq!(c, Color::rgb(0xff, 0xaa, 0x00));
    }

    #[test]
    fn test_parse_uppercase() {
        let c: Color = "#374151".to_uppercase().parse().unwrap();
        assert_eq!(c, Color::SLATE);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("22c55e".parse::<Color>().is_err());
        assert!("#22c55".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
        assert!("#ééé".parse::<Color>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::SLATE).unwrap();
        assert_eq!(json, "\"#374151\"");
        let back: Color = serde_json::from_str("\"#000\"").unwrap();
        assert_eq!(back, Color::BLACK);
        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }
}
