//! Saved-palette persistence over an injected key-value store.
//!
//! The saved list lives as one serialized JSON array under a fixed key,
//! mirroring the browser-storage layout the share format originated
//! from. The store itself is a trait so tests run against
//! [`MemoryStore`] while the CLI uses [`FileStore`], a JSON file in the
//! platform data directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::Palette;

/// Fixed key the saved-palette array is stored under.
pub const STORAGE_KEY: &str = "colorPalettes_v5";

/// Minimal string key-value store the gateway is generic over.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Key-value store backed by a single JSON file.
///
/// Writes go through a temp file + rename so the file is never left in a
/// corrupted state.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens a store at an explicit path (the file need not exist yet).
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the default store in the platform data directory.
    pub fn default_location() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join("huebench");
        Ok(Self::new(data_dir.join("storage.json")))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage file {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Storage file {} is corrupted", self.path.display()))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create storage directory {}", parent.display())
            })?;
        }
        let content =
            serde_json::to_string_pretty(entries).context("Failed to serialize storage")?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

/// Gateway to the saved-palette list.
///
/// The gateway never merges or deduplicates; destructive calls are taken
/// at face value and any confirmation prompting is the caller's concern.
#[derive(Debug)]
pub struct PaletteArchive<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PaletteArchive<S> {
    /// Wraps a key-value store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns all saved palettes in insertion order.
    pub fn list(&self) -> Result<Vec<Palette>> {
        match self.store.get(STORAGE_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).context("Saved palette list is corrupted"),
        }
    }

    /// Appends a snapshot of a palette to the tail of the saved list.
    pub fn append(&mut self, palette: &Palette) -> Result<()> {
        let mut palettes = self.list()?;
        palettes.push(palette.clone());
        self.persist(&palettes)?;
        debug!(name = %palette.name, total = palettes.len(), "saved palette");
        Ok(())
    }

    /// Removes the entry at `index`, returning it. Out-of-range indices
    /// are a no-op.
    pub fn delete_at(&mut self, index: usize) -> Result<Option<Palette>> {
        let mut palettes = self.list()?;
        if index >= palettes.len() {
            return Ok(None);
        }
        let removed = palettes.remove(index);
        self.persist(&palettes)?;
        debug!(name = %removed.name, "deleted palette");
        Ok(Some(removed))
    }

    fn persist(&mut self, palettes: &[Palette]) -> Result<()> {
        let raw = serde_json::to_string(palettes).context("Failed to serialize palette list")?;
        self.store.set(STORAGE_KEY, &raw)
    }
}
