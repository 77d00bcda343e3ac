//! Fixed timestep driver
//!
//! Owns the world and the input tracker. The host calls `advance` once per
//! rendered frame with the elapsed wall-clock time and the key events it saw.

use crate::consts::MAX_SUBSTEPS;
use crate::input::{InputEvent, InputTracker};
use crate::settings::Settings;
use crate::sim::{FrameDescriptor, World, tick};

/// Longest frame delta accepted, so a stall doesn't fast-forward the game
const MAX_FRAME_DT: f32 = 0.1;

/// A running game session
#[derive(Debug)]
pub struct Session {
    world: World,
    input: InputTracker,
    accumulator: f32,
    dt: f32,
    running: bool,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let dt = settings.tick_dt();
        Self {
            world: World::new(settings),
            input: InputTracker::new(),
            accumulator: 0.0,
            dt,
            running: true,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// False once a quit event has been seen
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks simulated so far
    pub fn ticks(&self) -> u64 {
        self.world.time_ticks
    }

    fn handle_events(&mut self, events: &[InputEvent]) {
        self.input.process_events(events);
        if self.input.quit_requested() {
            self.running = false;
        }
    }

    /// Run exactly one tick, regardless of elapsed time.
    ///
    /// Returns None, without ticking, once quit has been requested.
    pub fn step(&mut self, events: &[InputEvent]) -> Option<FrameDescriptor> {
        self.handle_events(events);
        if !self.running {
            return None;
        }
        let input = self.input.snapshot();
        Some(tick(&mut self.world, &input))
    }

    /// Run as many whole ticks as `dt` seconds cover.
    ///
    /// Returns the frame of the last tick run, or None if no tick ran.
    pub fn advance(&mut self, dt: f32, events: &[InputEvent]) -> Option<FrameDescriptor> {
        self.handle_events(events);
        if !self.running {
            return None;
        }

        // A NaN or infinite delta would poison the accumulator for good
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut frame = None;
        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < MAX_SUBSTEPS {
            let input = self.input.snapshot();
            frame = Some(tick(&mut self.world, &input));
            self.accumulator -= self.dt;
            substeps += 1;
        }

        if self.accumulator >= self.dt {
            log::warn!(
                "Simulation falling behind, dropping {:.3}s",
                self.accumulator
            );
            self.accumulator = 0.0;
        }

        frame
    }
}
