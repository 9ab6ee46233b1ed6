// SPDX-License-Identifier: MPL-2.0
//! Derived display state for the comparison view.
//!
//! [`DisplayState`] holds what a repaint needs: the scaled primary bitmap,
//! the thumbnail bitmap, the viewport size, and the two per-role view
//! offsets. It is recomputed wholesale on resize, image replacement, or role
//! swap — never partially updated, so no stale bitmap is ever shown.

pub mod scale;
pub mod thumbnail;

use crate::domain::{Offset, Size};
use crate::store::SharedImage;

/// Bitmaps and offsets the renderer reads on every repaint.
///
/// Owned by the UI thread; producer threads reach it only through the
/// dispatcher queue. `None` bitmaps mean "nothing to draw for that role yet",
/// which is the normal not-yet-loaded state, not an error.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    /// Primary image scaled to the viewport, or `None` before the first
    /// image/resize arrives.
    pub primary: Option<SharedImage>,

    /// Thumbnail of the secondary image, or `None` while that slot is empty.
    pub thumbnail: Option<SharedImage>,

    /// Current viewport size.
    pub viewport: Size,

    /// Scroll offset of the primary view.
    pub view_offset: Offset,

    /// Scroll offset remembered for the slot currently playing secondary,
    /// restored when roles swap.
    pub secondary_view_offset: Offset,

    /// Bumped by every wholesale recomputation (resize, role swap). A queued
    /// install carrying an older generation derived its bitmap for a viewport
    /// or role assignment that no longer holds and must not land.
    generation: u64,
}

impl DisplayState {
    /// Dimensions of the current thumbnail bitmap, zero if absent.
    #[must_use]
    pub fn thumbnail_size(&self) -> Size {
        self.thumbnail
            .as_ref()
            .map_or(Size::ZERO, |t| Size::new(t.width(), t.height()))
    }

    /// Exchanges the primary and remembered secondary offsets. Part of a
    /// role swap: the viewport scrolls to the offset previously associated
    /// with the image now shown as primary.
    pub fn exchange_offsets(&mut self) {
        std::mem::swap(&mut self.view_offset, &mut self.secondary_view_offset);
    }

    /// The current install generation. Captured when a derived bitmap is
    /// computed and compared again when its install drains.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Marks every queued install captured before this point as stale. Called
    /// whenever both derived bitmaps are recomputed in place.
    pub fn invalidate_pending(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}
