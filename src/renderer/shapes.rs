//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{FrameDescriptor, Rect};

/// Map a pixel position (origin top-left, y down) to clip space
/// (origin center, y up)
#[inline]
pub fn to_clip(p: Vec2, screen: Vec2) -> Vec2 {
    Vec2::new(p.x / screen.x * 2.0 - 1.0, 1.0 - p.y / screen.y * 2.0)
}

/// Two triangles covering `rect`
pub fn rect_quad(rect: &Rect, screen: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let tl = to_clip(rect.pos, screen);
    let br = to_clip(rect.pos + rect.size, screen);

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Vertices for a whole frame: platforms, then bullets, then the player on top
pub fn frame_vertices(frame: &FrameDescriptor, screen: Vec2) -> Vec<Vertex> {
    let quads = frame.platforms.len() + frame.bullets.len() + 1;
    let mut vertices = Vec::with_capacity(quads * 6);

    for rect in &frame.platforms {
        vertices.extend_from_slice(&rect_quad(rect, screen, colors::PLATFORM));
    }
    for rect in &frame.bullets {
        vertices.extend_from_slice(&rect_quad(rect, screen, colors::BULLET));
    }
    vertices.extend_from_slice(&rect_quad(&frame.player, screen, colors::PLAYER));

    vertices
}
