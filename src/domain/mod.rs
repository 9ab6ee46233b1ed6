// SPDX-License-Identifier: MPL-2.0
//! Domain types shared across the viewer cores.
//!
//! Everything here is toolkit-agnostic: hosts convert their own point/size
//! types at the boundary.

pub mod geometry;

pub use geometry::{Offset, Point, Rect, Size};
