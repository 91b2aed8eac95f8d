//! Token colors
//!
//! Colors travel as hex strings at every boundary (host config, YAML,
//! serialized tokens) and are normalized on parse, so two spellings of the
//! same swatch compare equal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Used when a palette has no colors to pick from
    pub const FALLBACK: Color = Color::rgb(0xFF, 0x00, 0x00);

    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Parse from "#RGB", "#RRGGBB" or "#AARRGGBB"
    ///
    /// The leading `#` is optional and surrounding whitespace is ignored.
    /// Eight-digit strings carry alpha first.
    pub fn from_hex(s: &str) -> Result<Self, TokenError> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || TokenError::InvalidColor(s.to_string());

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        match hex.len() {
            3 => {
                // 12-bit shorthand, each nibble doubled
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Ok(Color::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
                channel(0..2)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Normalized lowercase hex: `#rrggbb`, or `#aarrggbb` when translucent
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.a, self.r, self.g, self.b
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::FALLBACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
