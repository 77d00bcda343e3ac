//! Side Scroller entry point
//!
//! Headless runner: the demo autopilot plays through a session and the
//! resulting frames can be dumped as JSON lines for a separate viewer.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glam::Vec2;

use side_scroller::demo::Autopilot;
use side_scroller::renderer::{Vertex, frame_vertices};
use side_scroller::{Session, Settings};

/// Headless runner: the demo autopilot plays a session
#[derive(Parser, Debug)]
#[command(name = "side-scroller")]
#[command(about = "Run the side scroller headless under the demo autopilot")]
struct Options {
    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 600)]
    ticks: u64,
    /// Autopilot seed
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// JSON settings file (defaults are used when omitted)
    #[arg(long = "settings", value_name = "FILE")]
    settings_path: Option<PathBuf>,
    /// Print every frame as a JSON line on stdout
    #[arg(long = "frames")]
    dump_frames: bool,
}

fn run(options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let settings = match &options.settings_path {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };
    let screen = Vec2::new(settings.screen_width, settings.screen_height);

    let mut session = Session::new(settings);
    let mut pilot = Autopilot::new(options.seed);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    log::info!(
        "Running {} ticks with autopilot seed {}",
        options.ticks,
        options.seed
    );

    let mut vertex_bytes = 0;
    while session.is_running() && session.ticks() < options.ticks {
        let events = pilot.next_events();
        let Some(frame) = session.step(&events) else {
            break;
        };

        vertex_bytes = frame_vertices(&frame, screen).len() * Vertex::STRIDE;
        if options.dump_frames {
            serde_json::to_writer(&mut out, &frame)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    let world = session.world();
    log::info!(
        "Finished after {} ticks: player {:?} at ({}, {}), scroll {}, {} bullets in flight",
        world.time_ticks,
        world.player.state,
        world.player.bounds.left(),
        world.player.bounds.top(),
        world.player.scroll_offset_x,
        world.bullets.len()
    );
    log::debug!("Last frame draw list: {} bytes", vertex_bytes);
    Ok(())
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let options = Options::parse();

    log::info!("Side Scroller (headless) starting...");
    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let options = Options::try_parse_from(["side-scroller"]).unwrap();
        assert_eq!(options.ticks, 600);
        assert_eq!(options.seed, 1);
        assert!(!options.dump_frames);
        assert!(options.settings_path.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let options = Options::try_parse_from([
            "side-scroller",
            "--ticks",
            "10",
            "--seed",
            "99",
            "--settings",
            "s.json",
            "--frames",
        ])
        .unwrap();
        assert_eq!(options.ticks, 10);
        assert_eq!(options.seed, 99);
        assert_eq!(options.settings_path, Some(PathBuf::from("s.json")));
        assert!(options.dump_frames);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Options::try_parse_from(["side-scroller", "--ticks"]).is_err());
        assert!(Options::try_parse_from(["side-scroller", "--ticks", "many"]).is_err());
        assert!(Options::try_parse_from(["side-scroller", "--bogus"]).is_err());
    }
}
