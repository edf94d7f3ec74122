//! RGB color handling with hex parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow float comparisons in HSL conversion (standard algorithm)
#![allow(clippy::float_cmp)]

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::lab::{Lab, Lch};
use crate::error::PaletteError;

/// Chroma/lightness change applied per adjustment step.
///
/// One "step" of darkening, brightening, or saturating moves the color by
/// 18 units on the relevant LAB/LCH axis, the conventional step size in
/// design tooling.
const STEP: f64 = 18.0;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Parses from hex strings (#RRGGBB) and serializes as the uppercase hex
/// form, which is the on-wire representation for shares and saved
/// palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use huebench::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00FF00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidColor`] if the string is not a valid
    /// 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Self, PaletteError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(PaletteError::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| PaletteError::InvalidColor(hex.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use huebench::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#FF0000");
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns the color darkened by `amount` steps (LAB lightness).
    #[must_use]
    pub fn darken(&self, amount: f64) -> Self {
        let mut lab = Lab::from_rgb(*self);
        lab.l = (lab.l - STEP * amount).max(0.0);
        lab.to_rgb()
    }

    /// Returns the color brightened by `amount` steps (LAB lightness).
    #[must_use]
    pub fn brighten(&self, amount: f64) -> Self {
        let mut lab = Lab::from_rgb(*self);
        lab.l = (lab.l + STEP * amount).min(100.0);
        lab.to_rgb()
    }

    /// Returns the color with chroma increased by `amount` steps (LCH).
    ///
    /// Negative amounts desaturate; chroma never drops below zero.
    #[must_use]
    pub fn saturate(&self, amount: f64) -> Self {
        let mut lch = Lch::from_rgb(*self);
        lch.c = (lch.c + STEP * amount).max(0.0);
        lch.to_rgb()
    }

    /// Converts to HSL (hue 0-360 degrees, saturation and lightness 0-1).
    ///
    /// Hue is 0.0 for grayscale colors.
    #[must_use]
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        (h, s, l)
    }

    /// CSS functional notation, e.g. `rgb(51, 102, 204)`.
    #[must_use]
    pub fn to_css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// CSS functional notation, e.g. `hsl(220, 60%, 50%)`.
    #[must_use]
    pub fn to_css_hsl(&self) -> String {
        let (h, s, l) = self.to_hsl();
        format!(
            "hsl({}, {}%, {}%)",
            h.round() as i64,
            (s * 100.0).round() as i64,
            (l * 100.0).round() as i64
        )
    }
}

impl Serialize for RgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(D::Error::custom)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for RgbColor {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}
