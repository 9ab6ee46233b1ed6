// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning through images. The
//! machine has two states, Idle and Dragging; pointer-up and capture loss
//! both end a drag unconditionally.

use crate::domain::{Offset, Point};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Position where the drag started
    anchor: Option<Point>,

    /// Viewport offset when the drag started
    base_offset: Offset,
}

impl DragState {
    /// Whether a drag operation is currently active
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Starts a drag operation
    pub fn start(&mut self, anchor: Point, base_offset: Offset) {
        tracing::trace!(?anchor, ?base_offset, "drag started");
        self.anchor = Some(anchor);
        self.base_offset = base_offset;
    }

    /// Ends the drag session. Called on pointer-up and on capture loss; both
    /// discard the session unconditionally.
    pub fn stop(&mut self) {
        if self.anchor.take().is_some() {
            tracing::trace!("drag ended");
        }
    }

    /// The viewport offset for the current pointer position, or `None` when
    /// no drag is active: base offset + (anchor - position).
    #[must_use]
    pub fn offset_for(&self, position: Point) -> Option<Offset> {
        let anchor = self.anchor?;
        Some(self.base_offset + (anchor - position))
    }
}
