//! Color Specification
//!
//! Normalized 8-bit RGBA color with parsing from the forms a style
//! resolver hands us: hex, CSS named colors, rgb()/rgba() notation.

use serde::Serialize;

/// Color parse error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Unrecognized color specification: {0}")]
    Unparsable(String),

    #[error("Transparent color cannot participate in a contrast check")]
    Transparent,
}

/// Normalized color (8 bits per channel plus alpha)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self::BLACK
    }
}

impl ColorSpec {
    pub const TRANSPARENT: ColorSpec = ColorSpec { r: 0, g: 0, b: 0, a: 0 };
    pub const BLACK: ColorSpec = ColorSpec { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: ColorSpec = ColorSpec { r: 255, g: 255, b: 255, a: 255 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent colors are not valid contrast partners
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse a color specification string.
    ///
    /// Accepts `#RGB`, `#RRGGBB`, `#RRGGBBAA`, CSS named colors, and
    /// `rgb(r, g, b)` / `rgba(r, g, b, a)` functional notation.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let s = input.trim();

        if s.starts_with('#') {
            return Self::from_hex(s).ok_or_else(|| ColorParseError::Unparsable(input.to_string()));
        }

        let lower = s.to_ascii_lowercase();
        if lower.starts_with("rgb(") || lower.starts_with("rgba(") {
            return Self::from_functional(&lower)
                .ok_or_else(|| ColorParseError::Unparsable(input.to_string()));
        }

        Self::from_name(&lower).ok_or_else(|| ColorParseError::Unparsable(input.to_string()))
    }

    /// Parse a hex color (#RGB, #RRGGBB, #RRGGBBAA)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        // Length match below slices by byte offset; non-ASCII input
        // would split a char boundary.
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::rgba(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Parse rgb(r, g, b) / rgba(r, g, b, a) functional notation
    fn from_functional(s: &str) -> Option<Self> {
        let inner = s.strip_prefix("rgba(").or_else(|| s.strip_prefix("rgb("))?;
        let inner = inner.strip_suffix(')')?;
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();

        match parts.len() {
            3 => {
                let r = parts[0].parse::<u8>().ok()?;
                let g = parts[1].parse::<u8>().ok()?;
                let b = parts[2].parse::<u8>().ok()?;
                Some(Self::rgb(r, g, b))
            }
            4 => {
                let r = parts[0].parse::<u8>().ok()?;
                let g = parts[1].parse::<u8>().ok()?;
                let b = parts[2].parse::<u8>().ok()?;
                // Alpha is a 0.0-1.0 float in CSS notation
                let a = parts[3].parse::<f64>().ok()?;
                if !(0.0..=1.0).contains(&a) {
                    return None;
                }
                Some(Self::rgba(r, g, b, (a * 255.0).round() as u8))
            }
            _ => None,
        }
    }

    /// Parse a named color
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "transparent" | "none" => Self::TRANSPARENT,
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "cyan" | "aqua" => Self::rgb(0, 255, 255),
            "magenta" | "fuchsia" => Self::rgb(255, 0, 255),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "silver" => Self::rgb(192, 192, 192),
            "maroon" => Self::rgb(128, 0, 0),
            "olive" => Self::rgb(128, 128, 0),
            "lime" => Self::rgb(0, 255, 0),
            "navy" => Self::rgb(0, 0, 128),
            "purple" => Self::rgb(128, 0, 128),
            "teal" => Self::rgb(0, 128, 128),
            "orange" => Self::rgb(255, 165, 0),
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(ColorSpec::parse("#fff").unwrap(), ColorSpec::WHITE);
        assert_eq!(ColorSpec::parse("#000000").unwrap(), ColorSpec::BLACK);
        assert_eq!(ColorSpec::parse("#ff0000").unwrap(), ColorSpec::rgb(255, 0, 0));
        assert_eq!(ColorSpec::parse("#ff000080").unwrap(), ColorSpec::rgba(255, 0, 0, 0x80));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(ColorSpec::parse("White").unwrap(), ColorSpec::WHITE);
        assert_eq!(ColorSpec::parse("teal").unwrap(), ColorSpec::rgb(0, 128, 128));
        assert!(ColorSpec::parse("transparent").unwrap().is_transparent());
    }

    #[test]
    fn test_parse_functional() {
        assert_eq!(ColorSpec::parse("rgb(255, 255, 255)").unwrap(), ColorSpec::WHITE);
        assert_eq!(
            ColorSpec::parse("rgba(0, 0, 0, 0.5)").unwrap(),
            ColorSpec::rgba(0, 0, 0, 128)
        );
        assert!(ColorSpec::parse("rgba(0, 0, 0, 0)").unwrap().is_transparent());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            ColorSpec::parse("not-a-color"),
            Err(ColorParseError::Unparsable(_))
        ));
        assert!(ColorSpec::parse("#12345").is_err());
        assert!(ColorSpec::parse("rgb(300, 0, 0)").is_err());
    }

    #[test]
    fn test_parse_non_ascii_hex_is_error() {
        // Multibyte chars land on byte lengths 3/6/8 too; this must
        // come back as an error, not a slice panic.
        assert!(ColorSpec::parse("#aé").is_err());
        assert!(ColorSpec::parse("#ééé").is_err());
        assert!(ColorSpec::parse("#ffﬀff").is_err());
    }
}
