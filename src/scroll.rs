// SPDX-License-Identifier: MPL-2.0
//! Basic pannable scrolled-image view.
//!
//! The simple sibling of the comparison view: one image, grab-and-drag
//! panning, nothing else. Lives entirely on the UI thread.

use crate::domain::{Offset, Point};
use crate::interaction::DragState;
use crate::store::SharedImage;

/// A single pannable image.
#[derive(Default)]
pub struct ScrollView {
    bitmap: Option<SharedImage>,
    view_offset: Offset,
    drag: DragState,
}

impl ScrollView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the displayed image. The pan offset is kept; the host clamps
    /// scrolling to the new content size.
    pub fn set_image(&mut self, image: SharedImage) {
        self.bitmap = Some(image);
    }

    /// Begins a pan. Returns true so the host captures the pointer.
    pub fn on_pointer_down(&mut self, position: Point) -> bool {
        self.drag.start(position, self.view_offset);
        true
    }

    pub fn on_pointer_move(&mut self, position: Point) {
        if let Some(offset) = self.drag.offset_for(position) {
            self.view_offset = offset;
        }
    }

    /// Applies the final pan position and ends the drag.
    pub fn on_pointer_up(&mut self, position: Point) {
        self.on_pointer_move(position);
        self.drag.stop();
    }

    /// Capture loss discards the drag session unconditionally.
    pub fn on_capture_lost(&mut self) {
        self.drag.stop();
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The bitmap to draw (absent until the first `set_image`) and the
    /// offset to draw it at.
    #[must_use]
    pub fn render(&self) -> (Option<SharedImage>, Offset) {
        (self.bitmap.clone(), self.view_offset)
    }
}
