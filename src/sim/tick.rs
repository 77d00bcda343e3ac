//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use serde::{Deserialize, Serialize};

use super::bullet::Direction;
use super::rect::Rect;
use super::state::World;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Move left
    pub left: bool,
    /// Move right (also aims bullets right)
    pub right: bool,
    /// Jump
    pub up: bool,
    /// A fire press is pending. Spawns exactly one bullet; holding the key
    /// does not keep this set (see `InputTracker::snapshot`).
    pub fire: bool,
}

/// Everything needed to draw one frame, already scroll-offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameDescriptor {
    /// Player bounds at its pinned screen position (never offset)
    pub player: Rect,
    pub platforms: Vec<Rect>,
    pub bullets: Vec<Rect>,
    /// Camera offset that was applied to platforms and bullets
    pub scroll_offset_x: f32,
}

/// Advance the world by one fixed timestep
pub fn tick(world: &mut World, input: &TickInput) -> FrameDescriptor {
    // Fire is resolved before the player moves, from the pre-tick position.
    // Aim follows the right key, not the way the player last walked.
    if input.fire {
        let direction = if input.right {
            Direction::Right
        } else {
            Direction::Left
        };
        world.spawn_bullet(direction);
    }

    world
        .player
        .update(input, &world.platforms, &world.settings);

    world.update_bullets();

    world.time_ticks += 1;
    log::trace!(
        "tick {}: player ({}, {}) {:?}, scroll {}, {} bullets",
        world.time_ticks,
        world.player.bounds.left(),
        world.player.bounds.top(),
        world.player.state,
        world.player.scroll_offset_x,
        world.bullets.len()
    );

    world.frame()
}
