//! Huebench - headless color palette workspace
//!
//! This binary provides scriptable access to palette generation,
//! contrast analysis, sharing, saved-palette management, and export.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use huebench::cli::{ExportArgs, GenerateArgs, PalettesArgs, ShareArgs};
use huebench::constants::APP_NAME;

/// Huebench - build, analyze, and share color palettes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print verbose progress information
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a palette from a seed color or an image
    Generate(GenerateArgs),
    /// Export a palette to CSS, SCSS, JSON, SVG, or PNG
    Export(ExportArgs),
    /// Encode, decode, and link palettes as share tokens
    Share(ShareArgs),
    /// List, save, and delete palettes in the archive
    Palettes(PalettesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}={default_level}", env!("CARGO_PKG_NAME")))),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Share(args) => args.execute(),
        Commands::Palettes(args) => args.execute(),
    }
}
