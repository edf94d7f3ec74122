//! The mutable palette workspace.
//!
//! [`WorkspaceStore`] owns the current document and the transient
//! selection/drag state, and is the only component that mutates the
//! document. Every operation is synchronous and runs to completion, so
//! the document is never observable in a partially mutated state; in
//! particular [`WorkspaceStore::move_color`] validates everything it
//! needs before detaching, so the detach and the insert commit together
//! or not at all.

pub mod drag;
pub mod events;

use crossbeam_channel::Receiver;
use tracing::{debug, warn};

pub use drag::DragState;
pub use events::{Signal, SignalBus};

use crate::error::PaletteError;
use crate::generator::{GeneratedSet, GENERATED_GROUP_NAME};
use crate::models::{Palette, RgbColor};

/// Transient pointers into the document; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Group that receives newly added colors
    pub active_group_id: Option<String>,
    /// Color highlighted in the UI
    pub selected_color_id: Option<String>,
}

/// The workspace: one document, one selection, one drag at a time.
#[derive(Debug, Default)]
pub struct WorkspaceStore {
    palette: Palette,
    selection: Selection,
    drag: DragState,
    bus: SignalBus,
}

impl WorkspaceStore {
    /// Creates a workspace holding an empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current document.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current drag state.
    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Whether the document has no groups (placeholder state for
    /// renderers). Pure projection, recomputed on demand.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }

    /// Subscribes to workspace signals.
    pub fn subscribe(&mut self) -> Receiver<Signal> {
        self.bus.subscribe()
    }

    /// Appends a new empty group and makes it active.
    ///
    /// A name that is empty after trimming is silently ignored; supplying
    /// a usable name is the caller's job.
    pub fn create_group(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            warn!("ignoring group creation with empty name");
            return;
        }

        let group = crate::models::Group::new(name);
        debug!(group = name, id = %group.id, "created group");
        self.selection.active_group_id = Some(group.id.clone());
        self.palette.groups.push(group);
        self.document_changed();
    }

    /// Appends a color to the active group's tail, returning the new
    /// color's id.
    ///
    /// If no group is active but groups exist, the first group becomes
    /// active first.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::NoGroupAvailable`] (and mutates nothing)
    /// when the palette has no groups at all.
    pub fn add_color_to_active_group(&mut self, hex: RgbColor) -> Result<String, PaletteError> {
        if self.selection.active_group_id.is_none() {
            self.selection.active_group_id = self.palette.groups.first().map(|g| g.id.clone());
        }

        let Some(group) = self
            .selection
            .active_group_id
            .as_ref()
            .and_then(|id| self.palette.find_group_mut(id))
        else {
            warn!("no group available to receive {hex}");
            return Err(PaletteError::NoGroupAvailable);
        };

        let color_id = group.push_color(hex);
        debug!(color = %hex, group = %group.name, "added color");
        self.document_changed();
        Ok(color_id)
    }

    /// Removes a color from a group. Absent ids are a no-op, not an error.
    pub fn remove_color(&mut self, group_id: &str, color_id: &str) {
        let Some(removed) = self
            .palette
            .find_group_mut(group_id)
            .and_then(|g| g.remove_color(color_id))
        else {
            return;
        };
        debug!(color = %removed.hex, "removed color");
        self.document_changed();
    }

    /// Removes a group and all its colors. Absent ids are a no-op.
    pub fn remove_group(&mut self, group_id: &str) {
        let before = self.palette.groups.len();
        self.palette.groups.retain(|g| g.id != group_id);
        if self.palette.groups.len() == before {
            return;
        }
        debug!(group_id, "removed group");
        self.document_changed();
    }

    /// Renames a group. Absent ids are a no-op.
    pub fn rename_group(&mut self, group_id: &str, name: &str) {
        let Some(group) = self.palette.find_group_mut(group_id) else {
            return;
        };
        group.name = name.to_string();
        self.document_changed();
    }

    /// Renames the palette.
    pub fn rename_palette(&mut self, name: &str) {
        self.palette.name = name.to_string();
        self.document_changed();
    }

    /// Replaces a color's value in place. Absent ids are a no-op.
    pub fn set_color(&mut self, group_id: &str, color_id: &str, hex: RgbColor) {
        let Some(color) = self
            .palette
            .find_group_mut(group_id)
            .and_then(|g| g.colors.iter_mut().find(|c| c.id == color_id))
        else {
            return;
        };
        color.hex = hex;
        self.document_changed();
    }

    /// Selects a color and activates its group. No-op if either id does
    /// not resolve.
    pub fn select_color(&mut self, group_id: &str, color_id: &str) {
        let exists = self
            .palette
            .find_group(group_id)
            .is_some_and(|g| g.contains_color(color_id));
        if !exists {
            return;
        }
        self.selection.active_group_id = Some(group_id.to_string());
        self.selection.selected_color_id = Some(color_id.to_string());
    }

    /// Atomically relocates a color between (or within) groups.
    ///
    /// The color is detached from the source and inserted into the
    /// destination at `dest_index` when given and within bounds,
    /// otherwise appended. If either group id does not resolve, or the
    /// color is not in the source group, the whole operation is a no-op:
    /// detach and insert only commit together, so a color can never be
    /// lost mid-move.
    pub fn move_color(
        &mut self,
        source_group_id: &str,
        color_id: &str,
        dest_group_id: &str,
        dest_index: Option<usize>,
    ) {
        let groups = &self.palette.groups;
        let (Some(source_pos), Some(dest_pos)) = (
            groups.iter().position(|g| g.id == source_group_id),
            groups.iter().position(|g| g.id == dest_group_id),
        ) else {
            warn!(source_group_id, dest_group_id, color_id, "move rejected");
            return;
        };
        let Some(color_pos) = groups[source_pos].color_position(color_id) else {
            return;
        };

        // Everything resolved; detach and insert commit back to back with
        // no fallible step in between.
        let color = self.palette.groups[source_pos].colors.remove(color_pos);
        let dest = &mut self.palette.groups[dest_pos];
        let index = match dest_index {
            Some(i) if i <= dest.colors.len() => i,
            _ => dest.colors.len(),
        };
        dest.colors.insert(index, color);

        debug!(source_group_id, dest_group_id, index, "moved color");
        self.document_changed();
    }

    /// Wholesale document substitution (generation results, loaded
    /// shares, loaded saves). Selection is reset: the first group becomes
    /// active, nothing is selected.
    pub fn replace(&mut self, palette: Palette) {
        self.palette = palette;
        self.selection = Selection {
            active_group_id: self.palette.groups.first().map(|g| g.id.clone()),
            selected_color_id: None,
        };
        self.drag = DragState::Idle;
        self.document_changed();
    }

    /// Accepts a generation result, replacing the document with a palette
    /// holding one group of the generated colors.
    pub fn apply_generation(&mut self, set: GeneratedSet) {
        debug!(name = %set.name, count = set.colors.len(), "applying generation");
        self.bus.publish(&Signal::GenerationProduced(set.clone()));
        self.replace(Palette::single_group(
            set.name,
            GENERATED_GROUP_NAME,
            set.colors,
        ));
    }

    /// Replaces the document with a fresh empty palette and clears the
    /// selection.
    pub fn clear(&mut self) {
        self.replace(Palette::new());
    }

    /// Announces a successful persistence append to subscribers.
    pub fn mark_saved(&mut self) {
        self.bus.publish(&Signal::PaletteSaved);
    }

    /// Starts a drag if the color exists; returns whether it started.
    pub fn begin_drag(&mut self, group_id: &str, color_id: &str) -> bool {
        let exists = self
            .palette
            .find_group(group_id)
            .is_some_and(|g| g.contains_color(color_id));
        if !exists {
            return false;
        }
        self.drag.begin(group_id, color_id);
        true
    }

    /// Completes a drag by dropping onto a destination.
    ///
    /// The drag always terminates, whether or not the drop lands: an
    /// invalid destination simply leaves the document unchanged.
    pub fn drop_drag(&mut self, dest_group_id: &str, dest_index: Option<usize>) {
        let Some((source_group_id, source_color_id)) = self.drag.take() else {
            return;
        };
        self.move_color(&source_group_id, &source_color_id, dest_group_id, dest_index);
    }

    /// Abandons any drag in progress, leaving the document unchanged.
    pub fn cancel_drag(&mut self) {
        self.drag.take();
    }

    /// Post-mutation bookkeeping: drop dangling selection pointers and
    /// publish the change.
    fn document_changed(&mut self) {
        self.revalidate_selection();
        self.bus.publish(&Signal::DocumentChanged);
    }

    /// Drops selection pointers whose targets no longer exist. The active
    /// group falls back to the first group (or none if the palette is
    /// empty); a vanished color is simply deselected.
    fn revalidate_selection(&mut self) {
        let active_exists = self
            .selection
            .active_group_id
            .as_ref()
            .is_some_and(|id| self.palette.find_group(id).is_some());
        if !active_exists {
            self.selection.active_group_id = self.palette.groups.first().map(|g| g.id.clone());
        }

        let selected_exists = self
            .selection
            .selected_color_id
            .as_ref()
            .is_some_and(|id| self.palette.groups.iter().any(|g| g.contains_color(id)));
        if !selected_exists {
            self.selection.selected_color_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate, GenerateMode};

    fn rgb(hex: &str) -> RgbColor {
        RgbColor::from_hex(hex).unwrap()
    }

    /// Workspace seeded with one generated "Main" group of 5 colors.
    fn seeded_store() -> WorkspaceStore {
        let mut store = WorkspaceStore::new();
        store.apply_generation(generate(rgb("#3366CC"), GenerateMode::Monochromatic));
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = WorkspaceStore::new();
        assert!(store.is_empty());
        assert_eq!(store.selection().active_group_id, None);
    }

    #[test]
    fn test_create_group_becomes_active() {
        let mut store = WorkspaceStore::new();
        store.create_group("Accent");

        assert_eq!(store.palette().groups.len(), 1);
        assert_eq!(store.palette().groups[0].name, "Accent");
        assert_eq!(
            store.selection().active_group_id.as_deref(),
            Some(store.palette().groups[0].id.as_str())
        );
    }

    #[test]
    fn test_create_group_trims_and_ignores_empty() {
        let mut store = WorkspaceStore::new();
        store.create_group("   ");
        assert!(store.is_empty());

        store.create_group("  Accent  ");
        assert_eq!(store.palette().groups[0].name, "Accent");
    }

    #[test]
    fn test_add_color_without_group_fails() {
        let mut store = WorkspaceStore::new();
        let result = store.add_color_to_active_group(rgb("#112233"));
        assert!(matches!(result, Err(PaletteError::NoGroupAvailable)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_color_falls_back_to_first_group() {
        let mut store = WorkspaceStore::new();
        store.create_group("One");
        store.create_group("Two");
        // Deactivate, as if nothing had been touched yet
        store.selection.active_group_id = None;

        store.add_color_to_active_group(rgb("#112233")).unwrap();

        assert_eq!(store.palette().groups[0].colors.len(), 1);
        assert_eq!(
            store.selection().active_group_id.as_deref(),
            Some(store.palette().groups[0].id.as_str())
        );
    }

    #[test]
    fn test_add_color_appends_at_tail() {
        let mut store = WorkspaceStore::new();
        store.create_group("Main");
        store.add_color_to_active_group(rgb("#111111")).unwrap();
        store.add_color_to_active_group(rgb("#222222")).unwrap();

        let hexes: Vec<String> = store.palette().groups[0]
            .colors
            .iter()
            .map(|c| c.hex.to_hex())
            .collect();
        assert_eq!(hexes, vec!["#111111", "#222222"]);
    }

    #[test]
    fn test_remove_color_and_silent_noop() {
        let mut store = WorkspaceStore::new();
        store.create_group("Main");
        let id = store.add_color_to_active_group(rgb("#112233")).unwrap();
        let group_id = store.palette().groups[0].id.clone();

        store.remove_color(&group_id, "missing");
        assert_eq!(store.palette().color_count(), 1);

        store.remove_color(&group_id, &id);
        assert_eq!(store.palette().color_count(), 0);
    }

    #[test]
    fn test_remove_last_group_yields_valid_empty_state() {
        let mut store = WorkspaceStore::new();
        store.create_group("Only");
        let group_id = store.palette().groups[0].id.clone();

        store.remove_group(&group_id);

        assert!(store.is_empty());
        assert_eq!(store.selection().active_group_id, None);
        assert_eq!(store.selection().selected_color_id, None);
    }

    #[test]
    fn test_remove_active_group_falls_back_to_first() {
        let mut store = WorkspaceStore::new();
        store.create_group("First");
        store.create_group("Second");
        let first_id = store.palette().groups[0].id.clone();
        let second_id = store.palette().groups[1].id.clone();
        assert_eq!(store.selection().active_group_id.as_deref(), Some(second_id.as_str()));

        store.remove_group(&second_id);

        assert_eq!(
            store.selection().active_group_id.as_deref(),
            Some(first_id.as_str())
        );
    }

    #[test]
    fn test_removing_selected_color_clears_selection() {
        let mut store = WorkspaceStore::new();
        store.create_group("Main");
        let color_id = store.add_color_to_active_group(rgb("#112233")).unwrap();
        let group_id = store.palette().groups[0].id.clone();
        store.select_color(&group_id, &color_id);
        assert!(store.selection().selected_color_id.is_some());

        store.remove_color(&group_id, &color_id);
        assert_eq!(store.selection().selected_color_id, None);
    }

    #[test]
    fn test_rename_operations() {
        let mut store = WorkspaceStore::new();
        store.create_group("Old");
        let group_id = store.palette().groups[0].id.clone();

        store.rename_group(&group_id, "New");
        store.rename_palette("Ocean");

        assert_eq!(store.palette().groups[0].name, "New");
        assert_eq!(store.palette().name, "Ocean");

        // Unknown group id: silent no-op
        store.rename_group("missing", "X");
        assert_eq!(store.palette().groups[0].name, "New");
    }

    #[test]
    fn test_set_color_replaces_in_place() {
        let mut store = WorkspaceStore::new();
        store.create_group("Main");
        let color_id = store.add_color_to_active_group(rgb("#112233")).unwrap();
        let group_id = store.palette().groups[0].id.clone();

        store.set_color(&group_id, &color_id, rgb("#AABBCC"));

        assert_eq!(store.palette().groups[0].colors[0].hex, rgb("#AABBCC"));
        assert_eq!(store.palette().groups[0].colors[0].id, color_id);
    }

    #[test]
    fn test_move_color_preserves_total_count() {
        let mut store = seeded_store();
        store.create_group("Accent");

        let main_id = store.palette().groups[0].id.clone();
        let accent_id = store.palette().groups[1].id.clone();
        let color_id = store.palette().groups[0].colors[0].id.clone();

        let before = store.palette().color_count();
        store.move_color(&main_id, &color_id, &accent_id, Some(0));

        assert_eq!(store.palette().color_count(), before);
        assert_eq!(store.palette().groups[0].colors.len(), 4);
        assert_eq!(store.palette().groups[1].colors.len(), 1);
        assert_eq!(store.palette().groups[1].colors[0].id, color_id);
    }

    #[test]
    fn test_move_color_with_missing_group_is_complete_noop() {
        let mut store = seeded_store();
        let main_id = store.palette().groups[0].id.clone();
        let color_id = store.palette().groups[0].colors[0].id.clone();
        let before = store.palette().clone();

        store.move_color(&main_id, &color_id, "no-such-group", None);
        assert_eq!(*store.palette(), before);

        store.move_color("no-such-group", &color_id, &main_id, None);
        assert_eq!(*store.palette(), before);

        store.move_color(&main_id, "no-such-color", &main_id, Some(0));
        assert_eq!(*store.palette(), before);
    }

    #[test]
    fn test_move_color_without_index_appends() {
        let mut store = seeded_store();
        store.create_group("Accent");
        let main_id = store.palette().groups[0].id.clone();
        let accent_id = store.palette().groups[1].id.clone();

        let first = store.palette().groups[0].colors[0].id.clone();
        let second = store.palette().groups[0].colors[1].id.clone();
        store.move_color(&main_id, &first, &accent_id, None);
        store.move_color(&main_id, &second, &accent_id, None);

        let accent = &store.palette().groups[1];
        assert_eq!(accent.colors[0].id, first);
        assert_eq!(accent.colors[1].id, second);
    }

    #[test]
    fn test_move_color_out_of_range_index_appends() {
        let mut store = seeded_store();
        store.create_group("Accent");
        let main_id = store.palette().groups[0].id.clone();
        let accent_id = store.palette().groups[1].id.clone();
        let color_id = store.palette().groups[0].colors[0].id.clone();

        store.move_color(&main_id, &color_id, &accent_id, Some(99));
        assert_eq!(store.palette().groups[1].colors[0].id, color_id);
    }

    #[test]
    fn test_move_color_within_group() {
        let mut store = seeded_store();
        let main_id = store.palette().groups[0].id.clone();
        let last = store.palette().groups[0].colors[4].id.clone();

        store.move_color(&main_id, &last, &main_id, Some(0));

        assert_eq!(store.palette().groups[0].colors[0].id, last);
        assert_eq!(store.palette().groups[0].colors.len(), 5);
    }

    #[test]
    fn test_apply_generation_builds_main_group() {
        let store = seeded_store();
        assert_eq!(store.palette().groups.len(), 1);
        assert_eq!(store.palette().groups[0].name, "Main");
        assert_eq!(store.palette().groups[0].colors.len(), 5);
        assert_eq!(store.palette().name, "Monochromatic Palette");
        assert_eq!(
            store.selection().active_group_id.as_deref(),
            Some(store.palette().groups[0].id.as_str())
        );
        assert_eq!(store.selection().selected_color_id, None);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut store = seeded_store();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.palette().name, "");
        assert_eq!(store.selection(), &Selection::default());
    }

    #[test]
    fn test_generation_scenario_from_seed_3366cc() {
        // Generate monochromatic, add "Accent", move Main[0] to Accent[0]
        let mut store = seeded_store();
        store.create_group("Accent");

        let main_id = store.palette().groups[0].id.clone();
        let accent_id = store.palette().groups[1].id.clone();
        let color_id = store.palette().groups[0].colors[0].id.clone();
        store.move_color(&main_id, &color_id, &accent_id, Some(0));

        assert_eq!(store.palette().groups[0].colors.len(), 4);
        assert_eq!(store.palette().groups[1].colors.len(), 1);
        assert_eq!(store.palette().color_count(), 5);
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut store = seeded_store();
        store.create_group("Accent");
        let main_id = store.palette().groups[0].id.clone();
        let accent_id = store.palette().groups[1].id.clone();
        let color_id = store.palette().groups[0].colors[0].id.clone();

        assert!(store.begin_drag(&main_id, &color_id));
        assert!(store.drag_state().is_dragging());

        store.drop_drag(&accent_id, None);
        assert!(!store.drag_state().is_dragging());
        assert_eq!(store.palette().groups[1].colors.len(), 1);
    }

    #[test]
    fn test_drag_from_nonexistent_color_does_not_start() {
        let mut store = seeded_store();
        let main_id = store.palette().groups[0].id.clone();
        assert!(!store.begin_drag(&main_id, "missing"));
        assert!(!store.drag_state().is_dragging());
    }

    #[test]
    fn test_cancelled_drag_leaves_document_unchanged() {
        let mut store = seeded_store();
        let main_id = store.palette().groups[0].id.clone();
        let color_id = store.palette().groups[0].colors[0].id.clone();
        let before = store.palette().clone();

        store.begin_drag(&main_id, &color_id);
        store.cancel_drag();

        assert!(!store.drag_state().is_dragging());
        assert_eq!(*store.palette(), before);
    }

    #[test]
    fn test_off_target_drop_returns_to_idle_unchanged() {
        let mut store = seeded_store();
        let main_id = store.palette().groups[0].id.clone();
        let color_id = store.palette().groups[0].colors[0].id.clone();
        let before = store.palette().clone();

        store.begin_drag(&main_id, &color_id);
        store.drop_drag("no-such-group", None);

        assert!(!store.drag_state().is_dragging());
        assert_eq!(*store.palette(), before);
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut store = seeded_store();
        let before = store.palette().clone();
        store.drop_drag("anything", None);
        assert_eq!(*store.palette(), before);
    }

    #[test]
    fn test_signals_emitted_on_mutation() {
        let mut store = WorkspaceStore::new();
        let rx = store.subscribe();

        store.create_group("Main");
        assert_eq!(rx.try_recv().unwrap(), Signal::DocumentChanged);

        store.add_color_to_active_group(rgb("#112233")).unwrap();
        assert_eq!(rx.try_recv().unwrap(), Signal::DocumentChanged);

        store.mark_saved();
        assert_eq!(rx.try_recv().unwrap(), Signal::PaletteSaved);
    }

    #[test]
    fn test_generation_signal_precedes_document_change() {
        let mut store = WorkspaceStore::new();
        let rx = store.subscribe();

        let set = generate(rgb("#3366CC"), GenerateMode::Triadic);
        store.apply_generation(set.clone());

        assert_eq!(rx.try_recv().unwrap(), Signal::GenerationProduced(set));
        assert_eq!(rx.try_recv().unwrap(), Signal::DocumentChanged);
    }

    #[test]
    fn test_rejected_operations_emit_nothing() {
        let mut store = WorkspaceStore::new();
        let rx = store.subscribe();

        store.create_group("  ");
        let _ = store.add_color_to_active_group(rgb("#112233"));
        store.remove_group("missing");
        store.drop_drag("missing", None);

        assert_eq!(rx.try_iter().count(), 0);
    }
}
