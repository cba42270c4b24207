//! RGBA color values with hex-string serialization.
//!
//! Emotion records persist colors as `#RRGGBB` strings (the format the chat app
//! has always written), so `Color` serializes to and from that form rather than
//! a struct of channels.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A color with linear `f32` channels in the 0.0–1.0 range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse a `#RRGGBB` string. Returns `None` for any other shape.
    pub fn from_hex_str(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let packed = u32::from_str_radix(digits, 16).ok()?;
        Some(Self::from_hex(packed))
    }

    /// Format as a `#RRGGBB` string. Alpha is not represented; emotion colors
    /// are opaque.
    pub fn to_hex_string(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            channel_byte(self.r),
            channel_byte(self.g),
            channel_byte(self.b)
        )
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

fn channel_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex_str(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid hex color: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_str() {
        let gold = Color::from_hex_str("#FFD700").unwrap();
        assert_eq!(channel_byte(gold.r), 0xFF);
        assert_eq!(channel_byte(gold.g), 0xD7);
        assert_eq!(channel_byte(gold.b), 0x00);
        assert_eq!(gold.a, 1.0);
    }

    #[test]
    fn test_from_hex_str_rejects_bad_input() {
        assert!(Color::from_hex_str("FFD700").is_none());
        assert!(Color::from_hex_str("#FFD7").is_none());
        assert!(Color::from_hex_str("#GGGGGG").is_none());
    }

    #[test]
    fn test_hex_roundtrip() {
        for hex in ["#FFD700", "#1E90FF", "#000000", "#FFFFFF"] {
            let color = Color::from_hex_str(hex).unwrap();
            assert_eq!(color.to_hex_string(), hex);
        }
    }

    #[test]
    fn test_serde_as_hex_string() {
        let color = Color::from_hex(0xFF4500);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#FF4500\"");

        let parsed: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, color);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }
}
