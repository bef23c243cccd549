//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (world order)
//! - No rendering, logging or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{GroundContact, reflect_damped, resolve_ground};
pub use state::{Body, World};
pub use tick::{PhysicsParams, advance, advance_with};
