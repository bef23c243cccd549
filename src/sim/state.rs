//! Simulation state: bodies and the world that owns them
//!
//! The world is the only mutable simulation state. Bodies keep a stable order
//! so rendering is deterministic.

use glam::Vec2;

use crate::consts::DEMO_BODY_RADIUS;

/// A simulated circular body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Fixed at construction
    radius: f32,
}

impl Body {
    /// Create a body. `radius` must be positive.
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            position,
            velocity,
            radius,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Side length of the square the body is drawn as
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }
}

/// Ordered collection of bodies
#[derive(Debug, Clone, Default, PartialEq)]
pub struct World {
    bodies: Vec<Body>,
}

impl World {
    /// Build a world from a fixed set of bodies. The set never grows or shrinks.
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    /// The reference two-body scene
    pub fn demo() -> Self {
        Self::new(vec![
            Body::new(
                Vec2::new(100.0, 100.0),
                Vec2::new(50.0, 0.0),
                DEMO_BODY_RADIUS,
            ),
            Body::new(
                Vec2::new(200.0, 200.0),
                Vec2::new(0.0, -50.0),
                DEMO_BODY_RADIUS,
            ),
        ])
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access for the integrator. Length stays fixed.
    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl<'a> IntoIterator for &'a World {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
