//! WCAG luminance-contrast computation.
//!
//! Accessibility judgments downstream depend on these exact formulas:
//! relative luminance is `0.2126*R + 0.7152*G + 0.0722*B` on linearized
//! sRGB channels, and the contrast ratio is `(L1 + 0.05) / (L2 + 0.05)`
//! with the lighter luminance on top, giving a value in [1, 21].

use crate::models::lab::srgb_to_linear;
use crate::models::RgbColor;

/// WCAG AA threshold for normal-size text.
pub const WCAG_AA_NORMAL: f64 = 4.5;

/// Reference colors used when judging a swatch's legibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    /// Pure white (#FFFFFF)
    White,
    /// Pure black (#000000)
    Black,
}

impl Reference {
    /// The concrete color for this reference.
    #[must_use]
    pub const fn color(self) -> RgbColor {
        match self {
            Self::White => RgbColor::new(255, 255, 255),
            Self::Black => RgbColor::new(0, 0, 0),
        }
    }
}

/// WCAG relative luminance of a color (0.0 for black, 1.0 for white).
#[must_use]
pub fn relative_luminance(color: RgbColor) -> f64 {
    0.2126 * srgb_to_linear(color.r) + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// WCAG contrast ratio between two colors, in [1, 21].
#[must_use]
pub fn contrast_ratio(a: RgbColor, b: RgbColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio of a color against a white or black reference.
#[must_use]
pub fn contrast_with_reference(color: RgbColor, reference: Reference) -> f64 {
    contrast_ratio(color, reference.color())
}

/// The reference color that reads best on the given background.
///
/// Picks whichever of white or black contrasts more, ties going to black.
#[must_use]
pub fn ideal_text_color(background: RgbColor) -> Reference {
    let vs_white = contrast_with_reference(background, Reference::White);
    let vs_black = contrast_with_reference(background, Reference::Black);
    if vs_white > vs_black {
        Reference::White
    } else {
        Reference::Black
    }
}
