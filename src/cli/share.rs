//! Share command: palette ⇄ URL-embeddable token.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tracing::warn;

use crate::cli::{open_archive, print_palette};
use crate::share;

/// Encode, decode, and link palettes as share tokens
#[derive(Debug, Args)]
pub struct ShareArgs {
    #[command(subcommand)]
    pub command: ShareCommand,
}

/// Share subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ShareCommand {
    /// Encode a saved palette as a share token
    Encode {
        /// Index into the saved-palette archive
        #[arg(value_name = "INDEX")]
        saved: usize,

        /// Also print a full link against this base URL
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Copy the token (or link) to the system clipboard
        #[arg(long)]
        copy: bool,

        /// Use this storage file instead of the default location
        #[arg(long, value_name = "FILE")]
        store: Option<PathBuf>,
    },
    /// Decode a share token and print the palette it contains
    Decode {
        /// The token to decode
        #[arg(value_name = "TOKEN")]
        token: String,
    },
    /// Extract and decode the token embedded in a share link
    Url {
        /// The link to inspect
        #[arg(value_name = "URL")]
        url: String,
    },
}

impl ShareArgs {
    /// Execute the share command
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            ShareCommand::Encode {
                saved,
                base_url,
                copy,
                store,
            } => {
                let palettes = open_archive(store.as_ref())?.list()?;
                let palette = palettes
                    .get(*saved)
                    .with_context(|| format!("No saved palette at index {saved}"))?;

                let token = share::encode(palette)?;
                let payload = match base_url {
                    Some(base) => share::share_url(base, &token)?,
                    None => token,
                };
                println!("{payload}");

                if *copy {
                    copy_to_clipboard(&payload);
                }
                Ok(())
            }
            ShareCommand::Decode { token } => {
                let palette = share::decode(token)?;
                print_palette(&palette);
                Ok(())
            }
            ShareCommand::Url { url } => {
                let token = share::token_from_url(url)
                    .context("URL carries no palette parameter")?;
                let palette = share::decode(&token)?;
                print_palette(&palette);
                Ok(())
            }
        }
    }
}

/// Best-effort clipboard write; a headless environment without a
/// clipboard should not fail the share, the payload is already printed.
fn copy_to_clipboard(payload: &str) {
    match arboard::Clipboard::new().and_then(|mut c| c.set_text(payload.to_string())) {
        Ok(()) => println!("✓ Copied to clipboard"),
        Err(e) => warn!("clipboard unavailable: {e}"),
    }
}
