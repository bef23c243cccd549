//! Bounce Sim - a fixed-timestep bouncing-ball demo
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, ground bounce)
//! - `renderer`: Drawing surfaces and the world-to-draw-command presenter
//! - `platform`: Frame loop, pacing and termination
//! - `settings`: Data-driven configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GpuError, SettingsError};
pub use renderer::{Color, Palette, Rect, Surface, render, render_with};
pub use settings::Settings;
pub use sim::{Body, PhysicsParams, World, advance, advance_with};

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (~60 Hz)
    pub const SIM_DT: f32 = 0.016;
    /// Delay between frames in the native loop
    pub const FRAME_DELAY_MS: u64 = 16;

    /// Downward acceleration (units/s², +y is down)
    pub const GRAVITY: f32 = 9.8;
    /// Y coordinate of the floor
    pub const GROUND_Y: f32 = 580.0;
    /// Fraction of vertical speed kept after hitting the ground
    pub const BOUNCE_DAMPING: f32 = 0.8;

    /// Demo scene body radius
    pub const DEMO_BODY_RADIUS: f32 = 20.0;

    /// Display dimensions
    pub const SURFACE_WIDTH: u32 = 800;
    pub const SURFACE_HEIGHT: u32 = 600;
    pub const WINDOW_TITLE: &str = "Physics Simulation";

    /// Frames the headless runner plays before stopping (~10 seconds)
    pub const HEADLESS_FRAME_LIMIT: u64 = 600;
}
