//! Fixed timestep simulation step
//!
//! Explicit Euler integration with gravity, followed by a ground bounce test.

use serde::{Deserialize, Serialize};

use super::collision::resolve_ground;
use super::state::World;
use crate::consts::*;
use crate::error::SettingsError;

/// Physical constants used by [`advance_with`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Downward acceleration (units/s², +y is down)
    pub gravity: f32,
    /// Y coordinate of the floor
    pub ground_y: f32,
    /// Fraction of vertical speed kept after a bounce, in (0, 1)
    pub damping: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            ground_y: GROUND_Y,
            damping: BOUNCE_DAMPING,
        }
    }
}

impl PhysicsParams {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.gravity.is_finite() {
            return Err(SettingsError::invalid("physics.gravity", "must be finite"));
        }
        if !self.ground_y.is_finite() {
            return Err(SettingsError::invalid("physics.ground_y", "must be finite"));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(SettingsError::invalid(
                "physics.damping",
                "must be strictly between 0 and 1",
            ));
        }
        Ok(())
    }
}

/// Advance the world by one fixed timestep using the reference constants
pub fn advance(world: &mut World, dt: f32) {
    advance_with(world, &PhysicsParams::default(), dt);
}

/// Advance every body by `dt`. Bodies do not interact.
///
/// Position moves with the velocity from *before* gravity is applied this
/// step. There is no rest threshold, so a body on the ground keeps making
/// ever smaller bounces.
pub fn advance_with(world: &mut World, params: &PhysicsParams, dt: f32) {
    debug_assert!(dt > 0.0, "timestep must be positive");

    for body in world.bodies_mut() {
        body.position = body.position + body.velocity * dt;
        body.velocity.y += params.gravity * dt;

        resolve_ground(body, params.ground_y, params.damping);
    }
}
