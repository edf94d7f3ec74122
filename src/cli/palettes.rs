//! Palettes command: manage the saved-palette archive.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::cli::open_archive;
use crate::share;

/// List, save, and delete palettes in the archive
#[derive(Debug, Args)]
pub struct PalettesArgs {
    /// Use this storage file instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: PalettesCommand,
}

/// Archive subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum PalettesCommand {
    /// List saved palettes in insertion order
    List,
    /// Save the palette held in a share token
    Save {
        /// Token holding the palette to save
        #[arg(value_name = "TOKEN")]
        token: String,
    },
    /// Delete the palette at the given index
    Delete {
        /// Zero-based index into the saved list
        #[arg(value_name = "INDEX")]
        index: usize,
    },
}

impl PalettesArgs {
    /// Execute the palettes command
    pub fn execute(&self) -> Result<()> {
        let mut archive = open_archive(self.store.as_ref())?;

        match &self.command {
            PalettesCommand::List => {
                let palettes = archive.list()?;
                if palettes.is_empty() {
                    println!("No palettes saved yet.");
                    return Ok(());
                }
                for (i, palette) in palettes.iter().enumerate() {
                    let name = if palette.name.is_empty() {
                        "(unnamed)"
                    } else {
                        &palette.name
                    };
                    println!(
                        "{i}: {name} ({} groups, {} colors)",
                        palette.groups.len(),
                        palette.color_count()
                    );
                }
                Ok(())
            }
            PalettesCommand::Save { token } => {
                let palette = share::decode(token)?;
                archive.append(&palette)?;
                println!("✓ Saved \"{}\"", palette.name);
                Ok(())
            }
            PalettesCommand::Delete { index } => {
                let removed = archive
                    .delete_at(*index)?
                    .with_context(|| format!("No saved palette at index {index}"))?;
                println!("✓ Deleted \"{}\"", removed.name);
                Ok(())
            }
        }
    }
}
