// SPDX-License-Identifier: MPL-2.0
//! Pointer interaction state
//!
//! This module contains the drag state machine and the thumbnail hit-region
//! logic, separated from the viewer facade.

pub mod drag;
pub mod hit;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use hit::{thumbnail_anchor, thumbnail_hit_region};
