//! RGB color handling with CSS parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// RGB color value with CSS `rgb(r, g, b)` string representation.
///
/// Open Board Format documents carry button colors as CSS color strings,
/// so this type serializes to and from that form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

fn css_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
            .unwrap_or_else(|e| unreachable!("static color pattern is valid: {e}"))
    })
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a CSS string.
    ///
    /// Supports `rgb(r, g, b)` (any spacing) and hex forms `#RRGGBB` / `RRGGBB`.
    ///
    /// # Examples
    ///
    /// ```
    /// use coreboard::models::RgbColor;
    ///
    /// let color = RgbColor::from_css("rgb(255, 192, 203)").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 192, 203));
    ///
    /// let color = RgbColor::from_css("#00FF00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    pub fn from_css(value: &str) -> Result<Self> {
        let value = value.trim();

        if let Some(caps) = css_pattern().captures(value) {
            let channel = |idx: usize, name: &str| -> Result<u8> {
                caps[idx]
                    .parse::<u8>()
                    .context(format!("Invalid {name} channel in color '{value}'"))
            };
            return Ok(Self::new(
                channel(1, "red")?,
                channel(2, "green")?,
                channel(3, "blue")?,
            ));
        }

        Self::from_hex(value)
    }

    /// Parses an `RgbColor` from a hex string ("#RRGGBB" or "RRGGBB").
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid color '{hex}'. Expected rgb(r, g, b) or 6 hex digits");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to the CSS form used in board documents.
    ///
    /// ```
    /// use coreboard::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_css(), "rgb(0, 128, 255)");
    /// ```
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Average of the three channels, used to pick readable text colors.
    #[must_use]
    pub const fn brightness(&self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }

    /// Whether dark text should be drawn on top of this color.
    #[must_use]
    pub const fn is_light(&self) -> bool {
        self.brightness() >= 128
    }

    /// Converts the color to a crossterm color for terminal rendering.
    #[must_use]
    pub const fn to_terminal_color(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

impl FromStr for RgbColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_css(s)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_css(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_css()
    }
}

impl Default for RgbColor {
    /// Default color is white, the OBF default button background.
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}
