// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the viewer configuration.
//!
//! This module serves as the single source of truth for default values
//! used across the crate.

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default width of the picture-in-picture thumbnail box, in pixels.
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 340;

/// Default height of the picture-in-picture thumbnail box, in pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: u32 = 220;

/// Border drawn around the thumbnail frame, in pixels. Inflates the drawn
/// frame only; hit testing uses the uninflated box.
pub const DEFAULT_THUMBNAIL_BORDER: u32 = 2;

// ==========================================================================
// Hit-Region Anchor Defaults
// ==========================================================================

/// Horizontal anchor of the thumbnail, as a fraction of viewport width
/// right of the current scroll offset.
pub const DEFAULT_ANCHOR_X_FRACTION: f32 = 0.03;

/// Vertical anchor of the thumbnail, as a fraction of viewport height
/// below the current scroll offset.
pub const DEFAULT_ANCHOR_Y_FRACTION: f32 = 0.75;
