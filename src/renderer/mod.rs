//! Draw-list generation
//!
//! Turns a `FrameDescriptor` into colored clip-space triangles. Uploading and
//! drawing them is up to the host's GPU/window layer.

pub mod shapes;
pub mod vertex;

pub use shapes::{frame_vertices, rect_quad, to_clip};
pub use vertex::{Vertex, colors};
