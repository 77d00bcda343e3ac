//! Keyboard tracking for the simulation
//!
//! The host forwards raw key events; the tracker keeps the set of held keys
//! and turns it into a `TickInput` snapshot once per tick.
//!
//! Frame lifecycle: process_events() -> snapshot() (once per tick run)

use std::collections::HashSet;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Fire,
}

/// Normalized events from the host window layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Window closed / quit requested
    Quit,
}

/// Tracks held keys between frames
#[derive(Debug, Default)]
pub struct InputTracker {
    keys_down: HashSet<Key>,
    /// Fire presses not yet handed to a tick
    pending_fire: u32,
    quit: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a batch of events
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(*event);
        }
    }

    fn process_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                // Key repeat arrives as extra KeyDowns; only the first one counts
                if self.keys_down.insert(key) && key == Key::Fire {
                    self.pending_fire += 1;
                }
            }
            InputEvent::KeyUp(key) => {
                self.keys_down.remove(&key);
            }
            InputEvent::Quit => {
                log::info!("Quit requested");
                self.quit = true;
            }
        }
    }

    #[inline]
    pub fn is_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Input for the next tick.
    ///
    /// `fire` is set once per fire KeyDown, whether or not the key is still
    /// held. Several presses between two snapshots fire on successive ticks.
    pub fn snapshot(&mut self) -> TickInput {
        let fire = self.pending_fire > 0;
        self.pending_fire = self.pending_fire.saturating_sub(1);
        TickInput {
            left: self.is_down(Key::Left),
            right: self.is_down(Key::Right),
            up: self.is_down(Key::Up),
            fire,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_in_snapshot() {
        let mut tracker = InputTracker::new();
        tracker.process_events(&[InputEvent::KeyDown(Key::Right), InputEvent::KeyDown(Key::Up)]);

        let input = tracker.snapshot();
        assert!(input.right && input.up);
        assert!(!input.left && !input.fire);

        tracker.process_events(&[InputEvent::KeyUp(Key::Up)]);
        let input = tracker.snapshot();
        assert!(input.right);
        assert!(!input.up);
    }

    #[test]
    fn test_fire_tap_within_one_frame_is_kept() {
        let mut tracker = InputTracker::new();
        tracker.process_events(&[InputEvent::KeyDown(Key::Fire), InputEvent::KeyUp(Key::Fire)]);

        assert!(tracker.snapshot().fire);
        assert!(!tracker.snapshot().fire);
    }

    #[test]
    fn test_fire_held_fires_once() {
        let mut tracker = InputTracker::new();
        tracker.process_events(&[InputEvent::KeyDown(Key::Fire)]);
        assert!(tracker.snapshot().fire);
        // Still held, and key repeat does not count as a new press
        assert!(!tracker.snapshot().fire);
        tracker.process_events(&[InputEvent::KeyDown(Key::Fire)]);
        assert!(!tracker.snapshot().fire);

        tracker.process_events(&[InputEvent::KeyUp(Key::Fire)]);
        assert!(!tracker.snapshot().fire);
    }

    #[test]
    fn test_release_and_repress_fires_again() {
        let mut tracker = InputTracker::new();
        tracker.process_events(&[InputEvent::KeyDown(Key::Fire)]);
        assert!(tracker.snapshot().fire);

        tracker.process_events(&[InputEvent::KeyUp(Key::Fire), InputEvent::KeyDown(Key::Fire)]);
        assert!(tracker.snapshot().fire);
    }

    #[test]
    fn test_two_taps_in_one_frame_fire_on_two_ticks() {
        let mut tracker = InputTracker::new();
        tracker.process_events(&[
            InputEvent::KeyDown(Key::Fire),
            InputEvent::KeyUp(Key::Fire),
            InputEvent::KeyDown(Key::Fire),
            InputEvent::KeyUp(Key::Fire),
        ]);
        assert!(tracker.snapshot().fire);
        assert!(tracker.snapshot().fire);
        assert!(!tracker.snapshot().fire);
    }

    #[test]
    fn test_quit() {
        let mut tracker = InputTracker::new();
        assert!(!tracker.quit_requested());
        tracker.process_events(&[InputEvent::Quit]);
        assert!(tracker.quit_requested());
    }
}
