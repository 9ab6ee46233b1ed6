// SPDX-License-Identifier: MPL-2.0
//! Integer pixel geometry.
//!
//! Pointer positions and scroll offsets are whole pixels in this core, so
//! geometry is integer-based: `Point` and `Offset` are signed (a pan can
//! momentarily go negative before the host clamps scrolling), `Size` is
//! unsigned.

use std::ops::{Add, Sub};

/// A position in pixels, relative to either the viewport or the content
/// origin depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A pan/scroll displacement in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, other: Point) -> Offset {
        Offset::new(self.x - other.x, self.y - other.y)
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, offset: Offset) -> Point {
        Point::new(self.x + offset.x, self.y + offset.y)
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, other: Offset) -> Offset {
        Offset::new(self.x + other.x, self.y + other.y)
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if either dimension is zero (degenerate geometry).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An axis-aligned rectangle: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[must_use]
    pub fn right(self) -> i32 {
        self.origin.x + self.size.width as i32
    }

    #[must_use]
    pub fn bottom(self) -> i32 {
        self.origin.y + self.size.height as i32
    }

    /// Exclusive containment: a point exactly on any edge is *not* inside.
    #[must_use]
    pub fn contains_exclusive(self, point: Point) -> bool {
        point.x > self.origin.x
            && point.x < self.right()
            && point.y > self.origin.y
            && point.y < self.bottom()
    }

    /// Whether this rectangle lies entirely within an image of the given
    /// size, with no clamping needed. A partially overlapping or empty
    /// rectangle does not qualify.
    #[must_use]
    pub fn contained_in(self, bounds: Size) -> bool {
        !self.size.is_empty()
            && self.origin.x >= 0
            && self.origin.y >= 0
            && self.right() <= bounds.width as i32
            && self.bottom() <= bounds.height as i32
    }
}
