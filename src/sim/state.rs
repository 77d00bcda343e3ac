//! World state
//!
//! Everything the simulation mutates lives in one `World`, owned by the
//! caller and handed to `tick`.

use serde::{Deserialize, Serialize};

use super::bullet::{Bullet, Direction};
use super::platform::{Platform, level_platforms};
use super::player::Player;
use super::tick::FrameDescriptor;
use crate::settings::Settings;

/// Complete simulation state (deterministic)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Screen and physics tuning
    pub settings: Settings,
    /// Static terrain, in layout order
    pub platforms: Vec<Platform>,
    pub player: Player,
    /// Active bullets, in spawn order
    pub bullets: Vec<Bullet>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl Default for World {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl World {
    /// Create the level with the player at its spawn point
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            platforms: level_platforms(),
            player: Player::default(),
            bullets: Vec::new(),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a bullet at the player's center
    pub fn spawn_bullet(&mut self, direction: Direction) {
        let id = self.next_entity_id();
        let bullet = Bullet::new(id, self.player.bounds.center(), direction);
        log::debug!(
            "Bullet {} fired {:?} from ({}, {})",
            id,
            direction,
            bullet.bounds.left(),
            bullet.bounds.top()
        );
        self.bullets.push(bullet);
    }

    /// Advance all bullets and drop the ones that left the screen
    pub(super) fn update_bullets(&mut self) {
        let speed = self.settings.bullet_speed;
        let screen_width = self.settings.screen_width;
        self.bullets.retain_mut(|bullet| {
            let gone = bullet.tick(speed, screen_width);
            if gone {
                log::debug!("Bullet {} despawned", bullet.id);
            }
            !gone
        });
    }

    /// Draw descriptor for the current state
    pub fn frame(&self) -> FrameDescriptor {
        let offset = self.player.scroll_offset_x;
        FrameDescriptor {
            player: self.player.bounds,
            platforms: self
                .platforms
                .iter()
                .map(|p| p.bounds().translated(offset, 0.0))
                .collect(),
            bullets: self
                .bullets
                .iter()
                .map(|b| b.bounds.translated(offset, 0.0))
                .collect(),
            scroll_offset_x: offset,
        }
    }
}
