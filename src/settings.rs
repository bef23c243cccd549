//! Simulation settings
//!
//! Native builds read `bounce_sim.json` from the working directory; the web
//! build reads LocalStorage. A missing source means defaults, which reproduce
//! the reference scene.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::renderer::Palette;
use crate::sim::{Body, PhysicsParams, World};

/// Initial state of one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl BodyConfig {
    pub fn to_body(&self) -> Body {
        Body::new(self.position, self.velocity, self.radius)
    }
}

impl From<&Body> for BodyConfig {
    fn from(body: &Body) -> Self {
        Self {
            position: body.position,
            velocity: body.velocity,
            radius: body.radius(),
        }
    }
}

/// Run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: PhysicsParams,
    /// Fixed timestep fed to every update
    pub dt: f32,
    /// Sleep between native frames (0 runs as fast as possible)
    pub frame_delay_ms: u64,

    // === Display ===
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub palette: Palette,

    // === Headless run ===
    /// Stop after this many frames (`None` runs until stopped)
    pub max_frames: Option<u64>,
    /// Write the last presented frame here (PNG or PPM, by extension)
    pub snapshot_path: Option<String>,

    /// Bodies in draw order
    pub bodies: Vec<BodyConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: PhysicsParams::default(),
            dt: SIM_DT,
            frame_delay_ms: FRAME_DELAY_MS,

            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            title: WINDOW_TITLE.to_string(),
            palette: Palette::default(),

            max_frames: Some(HEADLESS_FRAME_LIMIT),
            snapshot_path: None,

            bodies: World::demo().iter().map(BodyConfig::from).collect(),
        }
    }
}

impl Settings {
    /// Settings file name (native)
    pub const SETTINGS_FILE: &'static str = "bounce_sim.json";

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bounce_sim_settings";

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the simulation or surfaces cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SettingsError::invalid("dt", "must be a positive number"));
        }
        self.physics.validate()?;
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::invalid("width/height", "must be non-zero"));
        }
        for body in &self.bodies {
            if !(body.radius.is_finite() && body.radius > 0.0) {
                return Err(SettingsError::invalid("bodies.radius", "must be positive"));
            }
            if !(body.position.is_finite() && body.velocity.is_finite()) {
                return Err(SettingsError::invalid(
                    "bodies",
                    "position and velocity must be finite",
                ));
            }
        }
        Ok(())
    }

    /// Build the initial world
    pub fn build_world(&self) -> World {
        World::new(self.bodies.iter().map(BodyConfig::to_body).collect())
    }

    /// Load settings from the working directory (native)
    ///
    /// A missing file is not an error; anything unreadable or invalid is.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, SettingsError> {
        let path = std::path::Path::new(Self::SETTINGS_FILE);
        if !path.exists() {
            log::info!("No {} found, using default settings", Self::SETTINGS_FILE);
            return Ok(Self::default());
        }

        let settings = Self::load_from(path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, SettingsError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from LocalStorage");
                return Ok(settings);
            }
        }

        log::info!("Using default settings");
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.dt, 0.016);
        assert_eq!(settings.frame_delay_ms, 16);
        assert_eq!((settings.width, settings.height), (800, 600));
        assert_eq!(settings.physics, PhysicsParams::default());
        assert_eq!(settings.build_world(), World::demo());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "dt": 0.01, "physics": { "damping": 0.5 } }"#)
            .unwrap();
        assert_eq!(settings.dt, 0.01);
        assert_eq!(settings.physics.damping, 0.5);
        assert_eq!(settings.physics.gravity, GRAVITY);
        assert_eq!(settings.physics.ground_y, GROUND_Y);
        assert_eq!(settings.bodies.len(), 2);
    }

    #[test]
    fn test_custom_bodies() {
        let json = r#"{
            "bodies": [
                { "position": [1.0, 2.0], "velocity": [3.0, 4.0], "radius": 5.0 }
            ],
            "max_frames": null
        }"#;
        let settings = Settings::from_json(json).unwrap();
        let world = settings.build_world();
        assert_eq!(world.len(), 1);
        assert_eq!(world.bodies()[0].position, Vec2::new(1.0, 2.0));
        assert_eq!(world.bodies()[0].radius(), 5.0);
        assert_eq!(settings.max_frames, None);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings::default();
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(matches!(
            Settings::from_json(r#"{ "dt": 0.0 }"#),
            Err(SettingsError::Invalid { field: "dt", .. })
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "physics": { "damping": 1.5 } }"#),
            Err(SettingsError::Invalid { field: "physics.damping", .. })
        ));
        assert!(matches!(
            Settings::from_json(
                r#"{ "bodies": [ { "position": [0, 0], "velocity": [0, 0], "radius": -1 } ] }"#
            ),
            Err(SettingsError::Invalid { field: "bodies.radius", .. })
        ));
        assert!(matches!(
            Settings::from_json("not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load_from("/nonexistent/bounce_sim.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
