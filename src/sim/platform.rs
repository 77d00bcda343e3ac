//! Static level terrain
//!
//! The level is a fixed set of rectangles created once per session.

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Level layout as (x, y, width, height): ground first, then the ledges.
/// The ground is twice the screen width so there is floor to scroll over.
pub const LEVEL_LAYOUT: [(f32, f32, f32, f32); 4] = [
    (0.0, 560.0, 1600.0, 40.0),
    (150.0, 450.0, 200.0, 20.0),
    (400.0, 300.0, 200.0, 20.0),
    (800.0, 200.0, 150.0, 20.0),
];

/// An immovable platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    bounds: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Build the platforms of the level, in layout order
pub fn level_platforms() -> Vec<Platform> {
    LEVEL_LAYOUT
        .iter()
        .map(|&(x, y, w, h)| Platform::new(x, y, w, h))
        .collect()
}
