//! Projectiles fired by the player

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{BULLET_HEIGHT, BULLET_WIDTH};

/// Horizontal travel direction of a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Convert a sign (-1 or +1) to a direction.
    ///
    /// Panics on any other value.
    pub fn from_sign(sign: i32) -> Self {
        match sign {
            -1 => Direction::Left,
            1 => Direction::Right,
            _ => panic!("bullet direction must be -1 or +1, got {sign}"),
        }
    }

    /// -1.0 for left, +1.0 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// A bullet entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub bounds: Rect,
    pub direction: Direction,
}

impl Bullet {
    /// Create a bullet whose top-left corner is at `spawn`
    pub fn new(id: u32, spawn: Vec2, direction: Direction) -> Self {
        Self {
            id,
            bounds: Rect::new(spawn.x, spawn.y, BULLET_WIDTH, BULLET_HEIGHT),
            direction,
        }
    }

    /// Advance one tick. Returns true once the bullet is fully off-screen
    /// (touching the screen edge still counts as visible).
    pub fn tick(&mut self, speed: f32, screen_width: f32) -> bool {
        self.bounds = self.bounds.translated(speed * self.direction.sign(), 0.0);
        self.bounds.right() < 0.0 || self.bounds.left() > screen_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_moves_by_speed() {
        let mut bullet = Bullet::new(1, Vec2::new(100.0, 50.0), Direction::Right);
        assert!(!bullet.tick(7.0, 800.0));
        assert_eq!(bullet.bounds.left(), 107.0);
        assert!(!bullet.tick(7.0, 800.0));
        assert_eq!(bullet.bounds.left(), 114.0);
        assert_eq!(bullet.bounds.top(), 50.0);

        let mut bullet = Bullet::new(2, Vec2::new(100.0, 50.0), Direction::Left);
        bullet.tick(7.0, 800.0);
        assert_eq!(bullet.bounds.left(), 93.0);
    }

    #[test]
    fn test_despawn_only_when_fully_off_screen() {
        // Right edge lands exactly on 0: still visible
        let mut bullet = Bullet::new(1, Vec2::new(-3.0, 0.0), Direction::Left);
        assert!(!bullet.tick(7.0, 800.0));
        assert_eq!(bullet.bounds.right(), 0.0);
        // Next tick it is gone
        assert!(bullet.tick(7.0, 800.0));

        // Left edge lands exactly on the screen width: still visible
        let mut bullet = Bullet::new(2, Vec2::new(793.0, 0.0), Direction::Right);
        assert!(!bullet.tick(7.0, 800.0));
        assert_eq!(bullet.bounds.left(), 800.0);
        assert!(bullet.tick(7.0, 800.0));
    }

    #[test]
    fn test_direction_from_sign() {
        assert_eq!(Direction::from_sign(-1), Direction::Left);
        assert_eq!(Direction::from_sign(1), Direction::Right);
    }

    #[test]
    #[should_panic]
    fn test_direction_from_invalid_sign() {
        let _ = Direction::from_sign(0);
    }
}
