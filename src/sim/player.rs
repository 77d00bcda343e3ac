//! The player: horizontal movement, soft-edge camera, jumping, gravity and
//! landing on platforms.
//!
//! Collision is computed in screen coordinates. The scroll offset only moves
//! what gets drawn, never the collision geometry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::platform::Platform;
use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::{PLAYER_HEIGHT, PLAYER_SPAWN_X, PLAYER_SPAWN_Y, PLAYER_WIDTH};
use crate::settings::Settings;

/// Vertical motion state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionState {
    /// Standing on a platform, may jump
    #[default]
    Grounded,
    /// Jumping or falling
    Airborne,
}

/// The player-controlled actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub bounds: Rect,
    /// Vertical velocity (pixels/tick, positive = down)
    pub velocity_y: f32,
    pub state: MotionState,
    /// Accumulated camera shift, added to world x positions when drawing
    pub scroll_offset_x: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y))
    }
}

impl Player {
    /// Spawn a grounded, motionless player centered on `center`
    pub fn new(center: Vec2) -> Self {
        Self {
            bounds: Rect::from_center(center, PLAYER_WIDTH, PLAYER_HEIGHT),
            velocity_y: 0.0,
            state: MotionState::Grounded,
            scroll_offset_x: 0.0,
        }
    }

    #[inline]
    pub fn is_airborne(&self) -> bool {
        self.state == MotionState::Airborne
    }

    /// Advance the player by one tick
    pub fn update(&mut self, input: &TickInput, platforms: &[Platform], settings: &Settings) {
        self.move_horizontal(input, settings.player_speed);
        self.clamp_to_scroll_zone(settings);
        if input.up {
            self.jump(settings.jump_strength);
        }
        self.apply_gravity(settings.gravity);
        self.resolve_landing(platforms, settings.landing_tolerance);
    }

    /// Instantaneous horizontal movement, no acceleration or friction
    fn move_horizontal(&mut self, input: &TickInput, speed: f32) {
        let mut dx = 0.0;
        if input.left {
            dx -= speed;
        }
        if input.right {
            dx += speed;
        }
        self.bounds = self.bounds.translated(dx, 0.0);
    }

    /// Pin the player inside the scroll zone and scroll the camera instead
    pub fn clamp_to_scroll_zone(&mut self, settings: &Settings) {
        let right_limit = settings.screen_width - settings.scroll_threshold;
        let left_limit = settings.scroll_threshold;

        if self.bounds.right() > right_limit {
            self.scroll_offset_x -= settings.player_speed;
            self.bounds = self.bounds.with_right(right_limit);
        }
        if self.bounds.left() < left_limit {
            self.scroll_offset_x += settings.player_speed;
            self.bounds = self.bounds.with_left(left_limit);
        }
    }

    /// Start a jump. Ignored while airborne.
    pub fn jump(&mut self, jump_strength: f32) {
        if self.is_airborne() {
            return;
        }
        self.velocity_y = jump_strength;
        self.set_state(MotionState::Airborne);
    }

    /// Explicit Euler step with a fixed per-tick gravity
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.velocity_y += gravity;
        self.bounds = self.bounds.translated(0.0, self.velocity_y);
    }

    /// Whether the player, falling, has its feet on top of `platform`.
    ///
    /// The feet may have sunk up to `tolerance` below the platform top.
    /// Hitting a platform from below or the side never counts.
    pub fn lands_on(&self, platform: &Platform, tolerance: f32) -> bool {
        let top = platform.bounds().top();
        self.velocity_y > 0.0
            && self.bounds.intersects(&platform.bounds())
            && self.bounds.bottom() <= top + tolerance
    }

    /// Snap onto the first platform landed on, or become airborne
    pub fn resolve_landing(&mut self, platforms: &[Platform], tolerance: f32) {
        match platforms.iter().find(|p| self.lands_on(p, tolerance)) {
            Some(platform) => {
                self.bounds = self.bounds.with_bottom(platform.bounds().top());
                self.velocity_y = 0.0;
                self.set_state(MotionState::Grounded);
            }
            None => self.set_state(MotionState::Airborne),
        }
    }

    fn set_state(&mut self, state: MotionState) {
        if self.state != state {
            log::debug!(
                "Player {:?} -> {:?} at ({}, {})",
                self.state,
                state,
                self.bounds.left(),
                self.bounds.bottom()
            );
            self.state = state;
        }
    }
}
