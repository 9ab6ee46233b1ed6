// SPDX-License-Identifier: MPL-2.0
//! Thumbnail hit-region
//!
//! The thumbnail sits at a fixed fraction of the viewport (3% in from the
//! left, 75% down from the top, by default), riding along with the scroll
//! offset. The configured border inflates the drawn frame only; hit testing
//! uses the uninflated box with exclusive boundary compares.

use crate::config::Config;
use crate::domain::{Offset, Point, Rect, Size};

/// The thumbnail anchor within the viewport, in viewport-relative pixels.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn thumbnail_anchor(viewport: Size, config: &Config) -> Offset {
    Offset::new(
        (config.anchor_x_fraction * viewport.width as f32) as i32,
        (config.anchor_y_fraction * viewport.height as f32) as i32,
    )
}

/// The double-click hit region in viewport-relative coordinates.
///
/// Pointer events arrive viewport-relative, so the scroll offset cancels
/// out of the test: the region is the anchor plus the current thumbnail
/// dimensions.
#[must_use]
pub fn thumbnail_hit_region(viewport: Size, thumbnail: Size, config: &Config) -> Rect {
    let anchor = thumbnail_anchor(viewport, config);
    Rect::new(Point::ZERO + anchor, thumbnail)
}
