//! Palette document structures.
//!
//! A [`Palette`] owns an ordered list of [`Group`]s, each owning an
//! ordered list of [`Color`]s. Ordering is meaningful everywhere and is
//! preserved across persist/share round-trips. Node ids are opaque and
//! unique within a document; they are never serialized, so every
//! deserialization re-establishes uniqueness by minting fresh ids.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RgbColor;

/// Generates a new unique node id.
fn generate_node_id() -> String {
    Uuid::new_v4().to_string()
}

/// A single color entry in a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Unique identifier (stable across edits, regenerated on load)
    #[serde(skip_serializing, default = "generate_node_id")]
    pub id: String,
    /// The color value, serialized as "#RRGGBB"
    pub hex: RgbColor,
}

impl Color {
    /// Creates a new color entry with a fresh id.
    #[must_use]
    pub fn new(hex: RgbColor) -> Self {
        Self {
            id: generate_node_id(),
            hex,
        }
    }
}

/// A named, ordered collection of colors within a palette.
///
/// A group exclusively owns its colors; moving a color between groups
/// detaches it from the source before inserting it into the destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier (stable across renames/reorders, regenerated on load)
    #[serde(skip_serializing, default = "generate_node_id")]
    pub id: String,
    /// Display name. The workspace refuses to create groups with
    /// whitespace-only names; renames are direct field mutations.
    pub name: String,
    /// Ordered colors owned by this group
    pub colors: Vec<Color>,
}

impl Group {
    /// Creates a new empty group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_node_id(),
            name: name.into(),
            colors: Vec::new(),
        }
    }

    /// Creates a group pre-populated with colors.
    #[must_use]
    pub fn with_colors(name: impl Into<String>, colors: impl IntoIterator<Item = RgbColor>) -> Self {
        let mut group = Self::new(name);
        group.colors = colors.into_iter().map(Color::new).collect();
        group
    }

    /// Appends a new color and returns its id.
    pub fn push_color(&mut self, hex: RgbColor) -> String {
        let color = Color::new(hex);
        let id = color.id.clone();
        self.colors.push(color);
        id
    }

    /// Removes the color with the given id, returning it if present.
    pub fn remove_color(&mut self, color_id: &str) -> Option<Color> {
        let index = self.colors.iter().position(|c| c.id == color_id)?;
        Some(self.colors.remove(index))
    }

    /// Index of the color with the given id.
    #[must_use]
    pub fn color_position(&self, color_id: &str) -> Option<usize> {
        self.colors.iter().position(|c| c.id == color_id)
    }

    /// Whether a color with the given id exists in this group.
    #[must_use]
    pub fn contains_color(&self, color_id: &str) -> bool {
        self.color_position(color_id).is_some()
    }
}

/// The top-level palette document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Palette {
    /// Display name; may be empty until the palette is saved
    pub name: String,
    /// Ordered groups owned by this palette
    pub groups: Vec<Group>,
}

impl Palette {
    /// Creates a new empty palette with no name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a palette containing a single pre-populated group.
    ///
    /// This is the shape every generation result takes: one group holding
    /// the derived colors.
    #[must_use]
    pub fn single_group(
        name: impl Into<String>,
        group_name: impl Into<String>,
        colors: impl IntoIterator<Item = RgbColor>,
    ) -> Self {
        Self {
            name: name.into(),
            groups: vec![Group::with_colors(group_name, colors)],
        }
    }

    /// Whether the palette has no groups.
    ///
    /// An empty palette is a valid, renderable (placeholder) state, not an
    /// error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of colors across all groups.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.groups.iter().map(|g| g.colors.len()).sum()
    }

    /// Gets a group by id.
    #[must_use]
    pub fn find_group(&self, group_id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    /// Gets a mutable group by id.
    pub fn find_group_mut(&mut self, group_id: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id == group_id)
    }

    /// All colors in group order, flattened.
    pub fn flattened_colors(&self) -> impl Iterator<Item = &Color> {
        self.groups.iter().flat_map(|g| g.colors.iter())
    }
}
