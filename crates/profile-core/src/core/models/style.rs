use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a color's textual representation cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unrecognized color '{0}'; expected a named color or '#rrggbb'")]
pub struct ParseColorError(pub String);

/// An RGB display color attached to a mechanism and all of its primitives.
///
/// Colors are represented textually either by a small set of well-known names
/// (the ones reaction diagrams conventionally use) or by a `#rrggbb` hex
/// triplet. Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel, 0-255.
    pub r: u8,
    /// Green channel, 0-255.
    pub g: u8,
    /// Blue channel, 0-255.
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const GRAY: Color = Color::new(128, 128, 128);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Creates a color from its RGB channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::BLACK => write!(f, "black"),
            Color::GRAY => write!(f, "gray"),
            Color::WHITE => write!(f, "white"),
            Color { r, g, b } => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses a color from a named color or a `#rrggbb` hex triplet.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if the input is neither a known color name
    /// nor a well-formed hex triplet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Color::BLACK),
            "gray" | "grey" => Ok(Color::GRAY),
            "white" => Ok(Color::WHITE),
            hex => {
                let digits = hex
                    .strip_prefix('#')
                    .filter(|d| d.len() == 6)
                    .ok_or_else(|| ParseColorError(s.to_string()))?;
                let channel = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&digits[range], 16)
                        .map_err(|_| ParseColorError(s.to_string()))
                };
                Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
            }
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_parses_named_colors() {
        assert_eq!(Color::from_str("black"), Ok(Color::BLACK));
        assert_eq!(Color::from_str("gray"), Ok(Color::GRAY));
        assert_eq!(Color::from_str("grey"), Ok(Color::GRAY));
        assert_eq!(Color::from_str("white"), Ok(Color::WHITE));
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(Color::from_str("BLACK"), Ok(Color::BLACK));
        assert_eq!(Color::from_str("GrAy"), Ok(Color::GRAY));
        assert_eq!(Color::from_str("#FF00Aa"), Ok(Color::new(255, 0, 170)));
    }

    #[test]
    fn from_str_parses_hex_triplets() {
        assert_eq!(Color::from_str("#000000"), Ok(Color::BLACK));
        assert_eq!(Color::from_str("#808080"), Ok(Color::GRAY));
        assert_eq!(Color::from_str("#123456"), Ok(Color::new(0x12, 0x34, 0x56)));
    }

    #[test]
    fn from_str_rejects_malformed_input() {
        assert!(Color::from_str("blk").is_err());
        assert!(Color::from_str("#12345").is_err());
        assert!(Color::from_str("#1234567").is_err());
        assert!(Color::from_str("#12345g").is_err());
        assert!(Color::from_str("").is_err());
        assert!(Color::from_str("123456").is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for color in [Color::BLACK, Color::GRAY, Color::new(18, 52, 86)] {
            assert_eq!(Color::from_str(&color.to_string()), Ok(color));
        }
    }

    #[test]
    fn serde_round_trips_as_string() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            color: Color,
        }

        let parsed: Wrapper = toml::from_str("color = \"#123456\"").unwrap();
        assert_eq!(parsed.color, Color::new(0x12, 0x34, 0x56));

        let named: Wrapper = toml::from_str("color = \"gray\"").unwrap();
        assert_eq!(named.color, Color::GRAY);

        let serialized = toml::to_string(&Wrapper { color: Color::GRAY }).unwrap();
        assert_eq!(serialized.trim(), "color = \"gray\"");
    }

    #[test]
    fn deserialize_rejects_unknown_color() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[allow(dead_code)]
            color: Color,
        }

        assert!(toml::from_str::<Wrapper>("color = \"mauve-ish\"").is_err());
    }
}
