//! Demo autopilot
//!
//! Plays the game with seeded random key presses, for attract mode and
//! headless runs. Same seed, same key sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::input::{InputEvent, Key};

/// Chance per frame of starting a jump while not already holding jump
const JUMP_CHANCE: f64 = 0.03;
/// Chance per frame of tapping fire
const FIRE_CHANCE: f64 = 0.05;
/// Frames the jump key is held
const JUMP_HOLD_FRAMES: u32 = 6;

/// Seeded input generator
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Direction currently walked, if any
    walking: Option<Key>,
    /// Frames left in the current walk (or pause)
    run_frames: u32,
    jump_frames: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            walking: None,
            run_frames: 0,
            jump_frames: 0,
        }
    }

    /// Key events for the next frame
    pub fn next_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        // Walking: runs of 20-90 frames left, right, or standing still.
        // Right is favoured so the camera gets to scroll.
        if self.run_frames == 0 {
            let next = match self.rng.random_range(0..5) {
                0 => None,
                1 => Some(Key::Left),
                _ => Some(Key::Right),
            };
            if next != self.walking {
                if let Some(key) = self.walking {
                    events.push(InputEvent::KeyUp(key));
                }
                if let Some(key) = next {
                    events.push(InputEvent::KeyDown(key));
                }
                self.walking = next;
            }
            self.run_frames = self.rng.random_range(20..90);
        }
        self.run_frames -= 1;

        // Jumping: hold up for a few frames, then let go
        if self.jump_frames > 0 {
            self.jump_frames -= 1;
            if self.jump_frames == 0 {
                events.push(InputEvent::KeyUp(Key::Up));
            }
        } else if self.rng.random_bool(JUMP_CHANCE) {
            events.push(InputEvent::KeyDown(Key::Up));
            self.jump_frames = JUMP_HOLD_FRAMES;
        }

        // Firing: a full tap within one frame
        if self.rng.random_bool(FIRE_CHANCE) {
            events.push(InputEvent::KeyDown(Key::Fire));
            events.push(InputEvent::KeyUp(Key::Fire));
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_events() {
        let mut a = Autopilot::new(42);
        let mut b = Autopilot::new(42);
        for _ in 0..500 {
            assert_eq!(a.next_events(), b.next_events());
        }
    }

    #[test]
    fn test_key_presses_are_balanced() {
        let mut pilot = Autopilot::new(7);
        let mut held = std::collections::HashSet::new();
        for _ in 0..2000 {
            for event in pilot.next_events() {
                match event {
                    InputEvent::KeyDown(key) => assert!(held.insert(key), "{key:?} pressed twice"),
                    InputEvent::KeyUp(key) => assert!(held.remove(&key), "{key:?} released unpressed"),
                    InputEvent::Quit => panic!("autopilot never quits"),
                }
            }
        }
    }

    #[test]
    fn test_autopilot_drives_a_session() {
        use crate::{Session, Settings};

        let mut session = Session::new(Settings::default());
        let mut pilot = Autopilot::new(1234);
        let mut fired = 0;
        let mut scrolled = false;
        for _ in 0..1200 {
            let events = pilot.next_events();
            fired += events
                .iter()
                .filter(|e| **e == InputEvent::KeyDown(Key::Fire))
                .count();
            session.step(&events);
            scrolled |= session.world().player.scroll_offset_x != 0.0;
        }
        assert_eq!(session.ticks(), 1200);
        assert!(fired > 0);
        assert!(scrolled, "camera never moved");
    }
}
