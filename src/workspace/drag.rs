//! Drag-reorder state machine.
//!
//! Two states, two transitions: `Idle → Dragging` when a drag starts on
//! an existing color, and `Dragging → Idle` unconditionally when the drag
//! terminates (drop or cancel). A failed or off-target drop can never
//! leave the workspace holding stale drag state, because the only exit
//! path ([`DragState::take`]) resets to idle as it hands out the source.

/// Transient drag state; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A color is being dragged.
    Dragging {
        /// Group the color is being dragged out of
        source_group_id: String,
        /// The color being dragged
        source_color_id: String,
    },
}

impl DragState {
    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Enters the dragging state.
    ///
    /// Callers must have verified that the color exists; the machine
    /// itself only records the source.
    pub fn begin(&mut self, source_group_id: impl Into<String>, source_color_id: impl Into<String>) {
        *self = Self::Dragging {
            source_group_id: source_group_id.into(),
            source_color_id: source_color_id.into(),
        };
    }

    /// Terminates the drag, returning the source if one was active.
    ///
    /// This is the single exit transition shared by drop and cancel: the
    /// state is reset to [`DragState::Idle`] no matter what the caller
    /// does with the returned source.
    pub fn take(&mut self) -> Option<(String, String)> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging {
                source_group_id,
                source_color_id,
            } => Some((source_group_id, source_color_id)),
        }
    }
}
