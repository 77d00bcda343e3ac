//! Axis-aligned rectangle geometry
//!
//! Screen-space convention: origin at top-left, x grows right, y grows down.
//! Rects are small `Copy` values; every "mutation" returns a new rect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (always positive)
    pub size: Vec2,
}

impl Rect {
    /// Create a rect from its top-left corner and size.
    ///
    /// Panics if width or height is not positive.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "rect size must be positive, got {width}x{height}"
        );
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Create a rect of the given size centered on `center`
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point of the rect
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Same rect moved by (dx, dy)
    #[inline]
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self {
            pos: self.pos + Vec2::new(dx, dy),
            ..self
        }
    }

    /// Same rect with its left edge placed at `left`
    #[inline]
    pub fn with_left(self, left: f32) -> Self {
        Self {
            pos: Vec2::new(left, self.pos.y),
            ..self
        }
    }

    /// Same rect with its right edge placed at `right`
    #[inline]
    pub fn with_right(self, right: f32) -> Self {
        self.with_left(right - self.size.x)
    }

    /// Same rect with its bottom edge placed at `bottom`
    #[inline]
    pub fn with_bottom(self, bottom: f32) -> Self {
        Self {
            pos: Vec2::new(self.pos.x, bottom - self.size.y),
            ..self
        }
    }

    /// Check overlap with another rect (see [`intersects`])
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        intersects(self, other)
    }
}

/// AABB overlap test. Rects that only share an edge do not intersect.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.top() < b.bottom() && b.top() < a.bottom()
}
