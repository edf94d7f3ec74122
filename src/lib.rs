//! Huebench Library
//!
//! This library provides core functionality for the Huebench palette
//! workspace: the palette document model, algorithmic palette generation,
//! WCAG contrast analysis, structural editing with drag-reorder, share
//! tokens, saved-palette persistence, and CSS/SCSS/JSON/PNG export.

// Module declarations
pub mod cli;
pub mod constants;
pub mod contrast;
pub mod error;
pub mod export;
pub mod generator;
pub mod models;
pub mod persistence;
pub mod share;
pub mod workspace;

pub use error::PaletteError;
