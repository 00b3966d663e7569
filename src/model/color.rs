//! Color and palette models.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A 24-bit RGB color.
///
/// Serializes as a 6-digit uppercase hex string (the form PresentationML
/// uses in `a:srgbClr` values).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a 6-digit uppercase hex string, e.g. `"1A0B2E"`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a 6-digit hex string (with or without a leading `#`).
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

struct ColorVisitor;

impl Visitor<'_> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a 6-digit hex color string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Color, E> {
        Color::from_hex(v).ok_or_else(|| E::custom(format!("invalid hex color: {v}")))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        deserializer.deserialize_str(ColorVisitor)
    }
}

/// The four fixed colors applied across a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Slide background fill
    pub background: Color,
    /// Title/highlight color
    pub accent: Color,
    /// Primary body text color
    pub text_primary: Color,
    /// Secondary body text color
    pub text_secondary: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Color::new(0x1A, 0x0B, 0x2E).hex(), "1A0B2E");
        assert_eq!(Color::new(0xFF, 0xFF, 0xFF).hex(), "FFFFFF");
        assert_eq!(Color::new(0, 0, 0).hex(), "000000");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("F59E0B"), Some(Color::new(0xF5, 0x9E, 0x0B)));
        assert_eq!(Color::from_hex("#F59E0B"), Some(Color::new(0xF5, 0x9E, 0x0B)));
        assert_eq!(Color::from_hex("xyzxyz"), None);
        assert_eq!(Color::from_hex("FFF"), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let color = Color::new(0xE9, 0xD5, 0xFF);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"E9D5FF\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }
}
