//! Palette export to developer-facing formats.
//!
//! Text export emits the same slot names across CSS custom properties,
//! SCSS variables, and a flat JSON map, so a palette drops into any of
//! the three ecosystems with identical naming. Image export renders the
//! flattened palette as a swatch strip (see [`swatch`]).

pub mod swatch;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::PaletteError;
use crate::models::Palette;

pub use swatch::SwatchStrip;

/// Fallback slug when the palette has no usable name.
const DEFAULT_SLUG: &str = "palette";

/// Lower-cases a display name and collapses whitespace runs to hyphens.
#[must_use]
pub fn slug(name: &str) -> String {
    name.trim()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// The three text renditions of one palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    /// `:root { --slot: #hex; ... }`
    pub css: String,
    /// `$slot: #hex;` lines
    pub scss: String,
    /// `{ "colors": { "slot": "#hex", ... } }`, slot order preserved
    pub json: String,
}

#[derive(Serialize)]
struct JsonExport {
    colors: IndexMap<String, String>,
}

/// Composes CSS, SCSS, and JSON exports with shared slot names.
///
/// Slot names are `"{palette-slug}-{group-slug}-{i}"` with `i` counting
/// 1-based within each group.
///
/// # Errors
///
/// Returns [`PaletteError::EmptyPaletteExport`] when the palette has no
/// groups.
pub fn compose_text(palette: &Palette) -> Result<ExportBundle, PaletteError> {
    if palette.is_empty() {
        return Err(PaletteError::EmptyPaletteExport);
    }

    let palette_slug = match slug(&palette.name) {
        s if s.is_empty() => DEFAULT_SLUG.to_string(),
        s => s,
    };

    let mut css = String::from(":root {\n");
    let mut scss = String::new();
    let mut colors = IndexMap::new();

    for group in &palette.groups {
        let group_slug = slug(&group.name);
        for (i, color) in group.colors.iter().enumerate() {
            let hex = color.hex.to_hex();
            let slot = format!("{palette_slug}-{group_slug}-{}", i + 1);
            css.push_str(&format!("  --{slot}: {hex};\n"));
            scss.push_str(&format!("${slot}: {hex};\n"));
            colors.insert(slot, hex);
        }
    }
    css.push('}');

    let json = serde_json::to_string_pretty(&JsonExport { colors })
        .expect("string map serializes");

    Ok(ExportBundle { css, scss, json })
}
