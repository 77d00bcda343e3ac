//! Screen and physics settings
//!
//! Defaults match the shipped game. Loaded from JSON on native builds.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings JSON is malformed
    Parse(serde_json::Error),
    /// A value is out of range
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "failed to parse settings: {e}"),
            SettingsError::Invalid { field, reason } => {
                write!(f, "invalid setting `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game settings. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Simulation ticks per second
    pub fps: u32,

    // === Physics (per tick) ===
    pub gravity: f32,
    pub player_speed: f32,
    /// Must be negative (up)
    pub jump_strength: f32,
    pub bullet_speed: f32,

    // === Camera ===
    /// Distance from either screen edge where scrolling starts
    pub scroll_threshold: f32,

    /// Landing forgiveness below a platform top
    pub landing_tolerance: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: FPS,

            gravity: GRAVITY,
            player_speed: PLAYER_SPEED,
            jump_strength: JUMP_STRENGTH,
            bullet_speed: BULLET_SPEED,

            scroll_threshold: SCROLL_THRESHOLD,

            landing_tolerance: LANDING_TOLERANCE,
        }
    }
}

impl Settings {
    /// Length of one simulation tick in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check every value is usable by the simulation
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn check(ok: bool, field: &'static str, reason: &'static str) -> Result<(), SettingsError> {
            if ok {
                Ok(())
            } else {
                Err(SettingsError::Invalid { field, reason })
            }
        }

        check(self.screen_width > 0.0, "screen_width", "must be positive")?;
        check(self.screen_height > 0.0, "screen_height", "must be positive")?;
        check(self.fps > 0, "fps", "must be positive")?;
        check(self.gravity > 0.0, "gravity", "must be positive")?;
        check(self.player_speed > 0.0, "player_speed", "must be positive")?;
        check(self.jump_strength < 0.0, "jump_strength", "must be negative")?;
        check(self.bullet_speed > 0.0, "bullet_speed", "must be positive")?;
        check(
            self.scroll_threshold >= 0.0
                && self.screen_width - self.scroll_threshold * 2.0 >= PLAYER_WIDTH,
            "scroll_threshold",
            "must leave room for the player between the two scroll zones",
        )?;
        check(
            self.landing_tolerance >= 0.0,
            "landing_tolerance",
            "must not be negative",
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.screen_width, 800.0);
        assert_eq!(settings.jump_strength, -15.0);
        assert!((settings.tick_dt() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "gravity": 2.0 }"#).unwrap();
        assert_eq!(settings.gravity, 2.0);
        assert_eq!(settings.player_speed, PLAYER_SPEED);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            bullet_speed: 9.0,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "jump_strength": 15.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "jump_strength",
                ..
            }
        ));

        let err = Settings::from_json(r#"{ "scroll_threshold": 400.0 }"#).unwrap_err();
        assert!(err.to_string().contains("scroll_threshold"));
    }

    #[test]
    fn test_scroll_zones_must_fit_the_player() {
        // 800 - 2 * 390 = 20px between the zones, narrower than the player
        let err = Settings::from_json(r#"{ "scroll_threshold": 390.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "scroll_threshold",
                ..
            }
        ));

        // Exactly one player width between the zones is fine
        let settings = Settings::from_json(r#"{ "scroll_threshold": 380.0 }"#).unwrap();
        assert_eq!(settings.scroll_threshold, 380.0);
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/nonexistent/side-scroller.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
