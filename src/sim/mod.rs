//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (no dt scaling)
//! - Stable iteration order (platforms in layout order, bullets in spawn order)
//! - No rendering or platform dependencies

pub mod bullet;
pub mod platform;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use bullet::{Bullet, Direction};
pub use platform::{LEVEL_LAYOUT, Platform, level_platforms};
pub use player::{MotionState, Player};
pub use rect::{Rect, intersects};
pub use state::World;
pub use tick::{FrameDescriptor, TickInput, tick};
