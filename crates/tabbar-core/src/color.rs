// ABOUTME: Color representation and hex parsing.
// ABOUTME: Malformed hex strings resolve to black instead of failing.

use serde::{Deserialize, Serialize};

/// Opaque RGB color with channels in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "red")]
    pub r: f32,
    #[serde(rename = "green")]
    pub g: f32,
    #[serde(rename = "blue")]
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Parse `#RRGGBB` or `RRGGBB` (case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| -> Option<f32> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Parse a hex color, falling back to black when it is malformed
    pub fn from_hex_or_black(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or_else(|| {
            tracing::warn!("Malformed color {:?}, using black", hex);
            Self::BLACK
        })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Color::from_hex("#FFFFFF"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("000000"), Some(Color::BLACK));
    }

    #[test]
    fn parses_mixed_case() {
        let c = Color::from_hex("#88aAcC").unwrap();
        assert!((c.r - 136.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 170.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 204.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn malformed_falls_back_to_black() {
        assert_eq!(Color::from_hex_or_black("#FFF"), Color::BLACK);
        assert_eq!(Color::from_hex_or_black("#GGGGGG"), Color::BLACK);
        assert_eq!(Color::from_hex_or_black(""), Color::BLACK);
        assert_eq!(Color::from_hex_or_black("#ＦＦＦ"), Color::BLACK);
    }
}
