//! Generate command: derive a palette from a seed color or an image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::{open_archive, print_palette};
use crate::generator::{self, sampling, GenerateMode};
use crate::models::RgbColor;
use crate::share;
use crate::workspace::WorkspaceStore;

/// Generate a palette from a seed color or an image
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Seed color as #RRGGBB (ignored when --image is given)
    #[arg(short, long, value_name = "HEX")]
    pub seed: Option<String>,

    /// Generation mode: monochromatic, analogous, complementary,
    /// triadic, tetradic, or random
    #[arg(short, long, value_name = "MODE", default_value = "monochromatic")]
    pub mode: String,

    /// Extract the palette from an image instead of deriving from a seed
    #[arg(long, value_name = "FILE")]
    pub image: Option<PathBuf>,

    /// Override the generated palette name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Append the result to the saved-palette archive
    #[arg(long)]
    pub save: bool,

    /// Print a share token for the result
    #[arg(long)]
    pub token: bool,

    /// Use this storage file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> Result<()> {
        let set = if let Some(path) = &self.image {
            let decoded = image::open(path)
                .with_context(|| format!("Failed to decode image {}", path.display()))?
                .to_rgba8();
            let source_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());
            sampling::generate_from_image(&decoded, &source_name)?
        } else {
            let seed_hex = self
                .seed
                .as_deref()
                .context("Provide a seed color with --seed or an image with --image")?;
            let seed = RgbColor::from_hex(seed_hex)?;
            let mode: GenerateMode = self.mode.parse().map_err(anyhow::Error::msg)?;
            generator::generate(seed, mode)
        };

        let mut workspace = WorkspaceStore::new();
        workspace.apply_generation(set);
        if let Some(name) = &self.name {
            workspace.rename_palette(name);
        }

        print_palette(workspace.palette());

        if self.token {
            println!();
            println!("share token: {}", share::encode(workspace.palette())?);
        }

        if self.save {
            let mut archive = open_archive(self.store.as_ref())?;
            archive.append(workspace.palette())?;
            workspace.mark_saved();
            println!();
            println!("✓ Saved \"{}\"", workspace.palette().name);
        }

        Ok(())
    }
}
