//! Error taxonomy for palette operations.
//!
//! Every variant is recoverable: a failed operation is rejected at its
//! boundary with the prior document state intact.

use thiserror::Error;

/// Errors surfaced by the palette core.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The input does not parse as a `#RRGGBB` color.
    #[error("'{0}' is not a valid hex color (expected #RRGGBB)")]
    InvalidColor(String),

    /// A color was added while the palette has no group to receive it.
    #[error("no group available to receive the color")]
    NoGroupAvailable,

    /// Image sampling produced no usable (sufficiently opaque) pixels.
    #[error("could not extract any colors from the image")]
    NoColorsExtracted,

    /// A share token failed to decode or did not contain a palette.
    #[error("invalid share token: {0}")]
    InvalidShareToken(String),

    /// Export was attempted on a palette with nothing to export.
    #[error("cannot export an empty palette")]
    EmptyPaletteExport,

    /// Sharing was attempted on a palette with no groups.
    #[error("cannot share an empty palette")]
    EmptyPaletteShare,
}
