//! Export command: render a palette as CSS, SCSS, JSON, SVG, or PNG.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::cli::open_archive;
use crate::export::{self, SwatchStrip};
use crate::models::Palette;
use crate::share;

/// Output format for the export command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSS custom properties in a :root block
    Css,
    /// SCSS variable declarations
    Scss,
    /// Flat JSON name→hex mapping
    Json,
    /// Swatch strip as an SVG document
    Svg,
    /// Swatch strip rasterized to PNG
    Png,
}

/// Export a palette to developer-facing formats
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Share token holding the palette to export
    #[arg(long, value_name = "TOKEN", conflicts_with = "saved")]
    pub token: Option<String>,

    /// Index into the saved-palette archive
    #[arg(long, value_name = "INDEX")]
    pub saved: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "css")]
    pub format: ExportFormat,

    /// Output path (defaults to stdout for text formats, and to
    /// "<palette-name>.png" for PNG)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Use this storage file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> Result<()> {
        let palette = self.load_palette()?;

        match self.format {
            ExportFormat::Css => self.emit_text(&export::compose_text(&palette)?.css),
            ExportFormat::Scss => self.emit_text(&export::compose_text(&palette)?.scss),
            ExportFormat::Json => self.emit_text(&export::compose_text(&palette)?.json),
            ExportFormat::Svg => self.emit_text(&SwatchStrip::from_palette(&palette)?.to_svg()),
            ExportFormat::Png => {
                let png = SwatchStrip::from_palette(&palette)?.to_png()?;
                let path = self.output.clone().unwrap_or_else(|| {
                    let stem = match export::slug(&palette.name) {
                        s if s.is_empty() => "palette".to_string(),
                        s => s,
                    };
                    PathBuf::from(format!("{stem}.png"))
                });
                fs::write(&path, png)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("✓ Exported swatch strip to: {}", path.display());
                Ok(())
            }
        }
    }

    /// Resolves the palette to export from the token or the archive.
    fn load_palette(&self) -> Result<Palette> {
        if let Some(token) = &self.token {
            return Ok(share::decode(token)?);
        }
        let index = self
            .saved
            .context("Provide a palette with --token or --saved")?;
        let palettes = open_archive(self.store.as_ref())?.list()?;
        palettes
            .into_iter()
            .nth(index)
            .with_context(|| format!("No saved palette at index {index}"))
    }

    fn emit_text(&self, content: &str) -> Result<()> {
        match &self.output {
            Some(path) => {
                fs::write(path, content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("✓ Exported to: {}", path.display());
            }
            None => println!("{content}"),
        }
        Ok(())
    }
}
