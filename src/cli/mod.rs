//! CLI command handlers for Huebench.
//!
//! This module provides headless, scriptable access to the palette
//! workspace for automation, testing, and CI integration.

pub mod export;
pub mod generate;
pub mod palettes;
pub mod share;

// Re-export types used by main.rs and tests
pub use export::ExportArgs;
pub use generate::GenerateArgs;
pub use palettes::PalettesArgs;
pub use share::ShareArgs;

use std::path::PathBuf;

use anyhow::Result;

use crate::contrast::{contrast_with_reference, Reference};
use crate::models::Palette;
use crate::persistence::{FileStore, PaletteArchive};

/// Opens the saved-palette archive, honoring an optional path override.
///
/// Commands expose the override as `--store` so tests and scripts can
/// work against a throwaway file instead of the user's data directory.
pub(crate) fn open_archive(store: Option<&PathBuf>) -> Result<PaletteArchive<FileStore>> {
    let file_store = match store {
        Some(path) => FileStore::new(path),
        None => FileStore::default_location()?,
    };
    Ok(PaletteArchive::new(file_store))
}

/// Prints a palette with per-color contrast readings.
pub(crate) fn print_palette(palette: &Palette) {
    let name = if palette.name.is_empty() {
        "(unnamed)"
    } else {
        &palette.name
    };
    println!("{name}");

    if palette.is_empty() {
        println!("  (no groups)");
        return;
    }

    for group in &palette.groups {
        println!("  [{}]", group.name);
        for color in &group.colors {
            println!(
                "    {}  {}  vs white {:.2}  vs black {:.2}",
                color.hex.to_hex(),
                color.hex.to_css_rgb(),
                contrast_with_reference(color.hex, Reference::White),
                contrast_with_reference(color.hex, Reference::Black),
            );
        }
    }
}
