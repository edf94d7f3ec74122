//! Palette generation from a seed color.
//!
//! Every mode derives an ordered set of exactly [`PALETTE_SIZE`] colors
//! from a seed without mutating it. Hue rotation and chroma stepping are
//! done in LCH so the derived colors keep the seed's perceived lightness;
//! the monochromatic ramp interpolates in LCH for the same reason.

pub mod sampling;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::models::{Lch, RgbColor};

/// Number of colors every generation mode produces.
pub const PALETTE_SIZE: usize = 5;

/// Name of the group that receives generated colors.
pub const GENERATED_GROUP_NAME: &str = "Main";

/// A generation mode tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateMode {
    /// Five-step lightness ramp around the seed
    Monochromatic,
    /// Seed plus hue neighbors at ±30 and ±60 degrees
    Analogous,
    /// Seed, its complement, and split-complement flanks
    Complementary,
    /// Seed plus the two 120-degree rotations
    Triadic,
    /// Seed plus 90/180/270-degree rotations
    Tetradic,
    /// Five uniformly random colors; not reproducible
    Random,
}

impl GenerateMode {
    /// All modes, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Monochromatic,
        Self::Analogous,
        Self::Complementary,
        Self::Triadic,
        Self::Tetradic,
        Self::Random,
    ];

    /// Capitalized display label, e.g. "Monochromatic".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monochromatic => "Monochromatic",
            Self::Analogous => "Analogous",
            Self::Complementary => "Complementary",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
            Self::Random => "Random",
        }
    }
}

impl fmt::Display for GenerateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lower = self.label().to_string();
        lower.make_ascii_lowercase();
        write!(f, "{lower}")
    }
}

impl FromStr for GenerateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monochromatic" => Ok(Self::Monochromatic),
            "analogous" => Ok(Self::Analogous),
            "complementary" => Ok(Self::Complementary),
            "triadic" => Ok(Self::Triadic),
            "tetradic" => Ok(Self::Tetradic),
            "random" => Ok(Self::Random),
            other => Err(format!(
                "unknown generation mode '{other}' (expected one of: monochromatic, analogous, complementary, triadic, tetradic, random)"
            )),
        }
    }
}

/// The outcome of a generation call: derived colors plus a default
/// document name for the workspace to adopt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSet {
    /// Human-readable default name, e.g. "Triadic Palette"
    pub name: String,
    /// Derived colors, order-significant
    pub colors: Vec<RgbColor>,
}

/// Derives a palette from a seed color.
///
/// Deterministic for every mode except [`GenerateMode::Random`]: repeated
/// calls with identical inputs yield identical output sequences.
#[must_use]
pub fn generate(seed: RgbColor, mode: GenerateMode) -> GeneratedSet {
    let colors = match mode {
        GenerateMode::Monochromatic => monochromatic_ramp(seed),
        GenerateMode::Analogous => {
            hue_fan(seed, &[30.0, -30.0, 60.0, -60.0])
        }
        GenerateMode::Complementary => {
            let mut colors = hue_fan(seed, &[180.0, 150.0, -150.0]);
            colors.push(seed.saturate(2.0));
            colors
        }
        GenerateMode::Triadic => {
            let mut colors = hue_fan(seed, &[120.0, -120.0]);
            colors.push(rotate(seed, 120.0).saturate(1.0));
            colors.push(rotate(seed, -120.0).saturate(1.0));
            colors
        }
        GenerateMode::Tetradic => {
            let mut colors = hue_fan(seed, &[90.0, 180.0, 270.0]);
            colors.push(seed.saturate(2.0));
            colors
        }
        GenerateMode::Random => random_colors(),
    };

    debug_assert_eq!(colors.len(), PALETTE_SIZE);

    GeneratedSet {
        name: format!("{} Palette", mode.label()),
        colors,
    }
}

/// The seed followed by hue rotations, preserving lightness and chroma.
fn hue_fan(seed: RgbColor, shifts: &[f64]) -> Vec<RgbColor> {
    let mut colors = Vec::with_capacity(PALETTE_SIZE);
    colors.push(seed);
    colors.extend(shifts.iter().map(|&deg| rotate(seed, deg)));
    colors
}

/// Rotates a color's hue by `degrees` in LCH.
fn rotate(color: RgbColor, degrees: f64) -> RgbColor {
    Lch::from_rgb(color).rotate_hue(degrees).to_rgb()
}

/// Five evenly spaced samples of the LCH path darkened-seed → seed →
/// brightened-seed (two steps of lightness on each side).
///
/// The anchor positions (ends and center) emit the anchor colors
/// themselves, so the seed appears verbatim in the middle of the ramp.
fn monochromatic_ramp(seed: RgbColor) -> Vec<RgbColor> {
    let dark_rgb = seed.darken(2.0);
    let bright_rgb = seed.brighten(2.0);
    let dark = Lch::from_rgb(dark_rgb);
    let mid = Lch::from_rgb(seed);
    let bright = Lch::from_rgb(bright_rgb);

    vec![
        dark_rgb,
        dark.lerp(mid, 0.5).to_rgb(),
        seed,
        mid.lerp(bright, 0.5).to_rgb(),
        bright_rgb,
    ]
}

/// Five independently drawn uniformly random colors.
fn random_colors() -> Vec<RgbColor> {
    let mut rng = rand::rng();
    (0..PALETTE_SIZE)
        .map(|_| RgbColor::new(rng.random(), rng.random(), rng.random()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Lab;

    fn seed() -> RgbColor {
        RgbColor::from_hex("#3366CC").unwrap()
    }

    #[test]
    fn test_every_mode_yields_five_colors() {
        for mode in GenerateMode::ALL {
            let set = generate(seed(), mode);
            assert_eq!(set.colors.len(), PALETTE_SIZE, "mode {mode}");
        }
    }

    #[test]
    fn test_non_random_modes_are_deterministic() {
        for mode in GenerateMode::ALL {
            if mode == GenerateMode::Random {
                continue;
            }
            let a = generate(seed(), mode);
            let b = generate(seed(), mode);
            assert_eq!(a, b, "mode {mode} not deterministic");
        }
    }

    #[test]
    fn test_seed_leads_every_derived_set() {
        for mode in [
            GenerateMode::Analogous,
            GenerateMode::Complementary,
            GenerateMode::Triadic,
            GenerateMode::Tetradic,
        ] {
            let set = generate(seed(), mode);
            assert_eq!(set.colors[0], seed(), "mode {mode}");
        }
    }

    #[test]
    fn test_monochromatic_varies_lightness_only() {
        let set = generate(seed(), GenerateMode::Monochromatic);
        let seed_lab = Lab::from_rgb(seed());

        // Endpoints are the lightness-stepped seed, distinguishable from
        // it by lightness
        assert_eq!(set.colors[0], seed().darken(2.0));
        assert_eq!(set.colors[PALETTE_SIZE - 1], seed().brighten(2.0));
        assert!(Lab::from_rgb(set.colors[0]).l < seed_lab.l - 10.0);
        assert!(Lab::from_rgb(set.colors[PALETTE_SIZE - 1]).l > seed_lab.l + 10.0);

        // Center of the ramp is the seed itself
        assert_eq!(set.colors[2], seed());
    }

    #[test]
    fn test_monochromatic_lightness_is_monotonic() {
        let set = generate(seed(), GenerateMode::Monochromatic);
        let lightness: Vec<f64> = set
            .colors
            .iter()
            .map(|&c| Lab::from_rgb(c).l)
            .collect();
        for pair in lightness.windows(2) {
            assert!(pair[0] < pair[1], "ramp not monotonic: {lightness:?}");
        }
    }

    #[test]
    fn test_analogous_hue_offsets() {
        let set = generate(seed(), GenerateMode::Analogous);
        let base_hue = Lch::from_rgb(seed()).h;

        let expected = [0.0, 30.0, -30.0, 60.0, -60.0];
        for (color, offset) in set.colors.iter().zip(expected) {
            let hue = Lch::from_rgb(*color).h;
            let mut diff = (hue - base_hue - offset).rem_euclid(360.0);
            if diff > 180.0 {
                diff -= 360.0;
            }
            // Gamut clamping can nudge the realized hue slightly
            assert!(diff.abs() < 12.0, "offset {offset}: hue {hue} vs base {base_hue}");
        }
    }

    #[test]
    fn test_complementary_ends_with_saturated_seed() {
        let set = generate(seed(), GenerateMode::Complementary);
        assert_eq!(set.colors[4], seed().saturate(2.0));
    }

    #[test]
    fn test_default_names() {
        assert_eq!(
            generate(seed(), GenerateMode::Triadic).name,
            "Triadic Palette"
        );
        assert_eq!(
            generate(seed(), GenerateMode::Random).name,
            "Random Palette"
        );
    }

    #[test]
    fn test_mode_parsing_roundtrip() {
        for mode in GenerateMode::ALL {
            let parsed: GenerateMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
        assert!("pastel".parse::<GenerateMode>().is_err());
    }
}
