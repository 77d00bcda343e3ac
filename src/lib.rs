//! Side Scroller - a small platformer with shooting and a soft-edge camera
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, platforms, bullets)
//! - `input`: Key event tracking, turned into per-tick input snapshots
//! - `session`: Fixed timestep driver around the simulation
//! - `renderer`: Draw-list generation for the host's GPU/window layer
//! - `settings`: Tunable screen and physics configuration
//! - `demo`: Seeded autopilot for headless/attract runs

pub mod demo;
pub mod input;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Fixed simulation rate. Physics is per-tick, never scaled by dt.
    pub const FPS: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Downward acceleration added to vertical velocity every tick
    pub const GRAVITY: f32 = 1.0;
    /// Horizontal player speed (pixels/tick), also the camera scroll speed
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Initial vertical velocity of a jump (negative = up)
    pub const JUMP_STRENGTH: f32 = -15.0;
    /// Bullet speed (pixels/tick)
    pub const BULLET_SPEED: f32 = 7.0;
    /// Distance from either screen edge where the camera starts scrolling
    pub const SCROLL_THRESHOLD: f32 = 300.0;
    /// How far below a platform top the player's feet may sink and still land
    pub const LANDING_TOLERANCE: f32 = 10.0;

    /// Player size and spawn point (center)
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_SPAWN_X: f32 = 400.0;
    pub const PLAYER_SPAWN_Y: f32 = 500.0;

    /// Bullet size
    pub const BULLET_WIDTH: f32 = 10.0;
    pub const BULLET_HEIGHT: f32 = 5.0;
}
