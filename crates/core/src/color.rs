//! Chart display colors.
//!
//! Colors cross the boundary to the renderer as plain 8-bit sRGB
//! triples; `#RRGGBB` hex is the interchange form used in config and
//! logs. The [`palette`] module pins the chart's role colors.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// An opaque sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Construct from raw channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string.
    pub fn from_hex(hex: &str) -> Result<Self, CoreError> {
        if hex.len() != 7 || !hex.starts_with('#') {
            return Err(CoreError::Validation(format!(
                "Invalid color '{hex}'. Must be in #RRGGBB hex format"
            )));
        }

        if !hex[1..].chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::Validation(format!(
                "Invalid color '{hex}'. Must contain only hex digits after '#'"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| {
                CoreError::Validation(format!("Invalid color '{hex}'"))
            })
        };

        Ok(Self {
            r: channel(1..3)?,
            g: channel(3..5)?,
            b: channel(5..7)?,
        })
    }

    /// Format as a `#RRGGBB` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Chart palette
// ---------------------------------------------------------------------------

/// Role colors for the tooth chart.
///
/// Finding colors match the visit-log badge families (yellow for
/// cavities, green for fillings, red for extractions, gray otherwise);
/// the interaction colors are the 3D view's orange selection highlight
/// and sky-blue hover.
pub mod palette {
    use super::Color;

    /// Cavity findings (yellow family).
    pub const CAVITY: Color = Color::rgb(0xFF, 0xC1, 0x07);

    /// Filling findings (green family).
    pub const FILLING: Color = Color::rgb(0x4C, 0xAF, 0x50);

    /// Extraction findings (red family).
    pub const EXTRACTION: Color = Color::rgb(0xE5, 0x39, 0x35);

    /// Findings without a dedicated family (neutral gray).
    pub const NEUTRAL: Color = Color::rgb(0x9E, 0x9E, 0x9E);

    /// Selected tooth highlight (orange).
    pub const SELECTION: Color = Color::rgb(0xFF, 0xA5, 0x00);

    /// Hovered tooth (sky blue).
    pub const HOVER: Color = Color::rgb(0x87, 0xCE, 0xEB);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let color = Color::from_hex("#FFC107").unwrap();
        assert_eq!(color, Color::rgb(0xFF, 0xC1, 0x07));
        assert_eq!(color.to_hex(), "#FFC107");
    }

    #[test]
    fn lowercase_hex_accepted() {
        assert_eq!(Color::from_hex("#aabbcc").unwrap(), Color::rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn missing_hash_rejected() {
        assert!(Color::from_hex("FFC107").is_err());
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("#FFC10700").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn non_hex_digits_rejected() {
        let err = Color::from_hex("#GGGGGG").unwrap_err();
        assert!(err.to_string().contains("hex digits"));
    }

    #[test]
    fn multibyte_input_rejected_without_panic() {
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn display_formats_as_hex() {
        assert_eq!(palette::SELECTION.to_string(), "#FFA500");
    }

    #[test]
    fn palette_colors_are_distinct() {
        let all = [
            palette::CAVITY,
            palette::FILLING,
            palette::EXTRACTION,
            palette::NEUTRAL,
            palette::SELECTION,
            palette::HOVER,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
