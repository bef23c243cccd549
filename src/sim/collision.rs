//! Ground collision response
//!
//! Only the vertical axis takes part: the ground is a horizontal line at
//! `ground_y` and y grows downward.

use super::state::Body;

/// Result of a ground check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    /// Whether the body bounced this step
    pub hit: bool,
    /// How far past the ground the body was before clamping
    pub penetration: f32,
}

impl GroundContact {
    pub fn miss() -> Self {
        Self {
            hit: false,
            penetration: 0.0,
        }
    }
}

/// Clamp a body that sank below the ground and bounce it.
///
/// Uses a strict `>` test, so a body sitting exactly on `ground_y` is left
/// alone. On a hit the vertical velocity is reflected and scaled by `damping`;
/// horizontal velocity is untouched.
pub fn resolve_ground(body: &mut Body, ground_y: f32, damping: f32) -> GroundContact {
    if body.position.y > ground_y {
        let penetration = body.position.y - ground_y;
        body.position.y = ground_y;
        body.velocity.y = reflect_damped(body.velocity.y, damping);
        GroundContact {
            hit: true,
            penetration,
        }
    } else {
        GroundContact::miss()
    }
}

/// Reflect a velocity component and keep `damping` of its magnitude
#[inline]
pub fn reflect_damped(v: f32, damping: f32) -> f32 {
    -v * damping
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_below_ground_bounces() {
        let mut body = Body::new(Vec2::new(10.0, 590.0), Vec2::new(3.0, 100.0), 5.0);
        let contact = resolve_ground(&mut body, 580.0, 0.8);

        assert!(contact.hit);
        assert!((contact.penetration - 10.0).abs() < 1e-4);
        assert_eq!(body.position.y, 580.0);
        assert!((body.velocity.y - (-80.0)).abs() < 1e-4);
        // Horizontal motion untouched
        assert_eq!(body.velocity.x, 3.0);
        assert_eq!(body.position.x, 10.0);
    }

    #[test]
    fn test_exactly_on_ground_does_not_bounce() {
        let mut body = Body::new(Vec2::new(0.0, 580.0), Vec2::new(0.0, 42.0), 5.0);
        let contact = resolve_ground(&mut body, 580.0, 0.8);

        assert_eq!(contact, GroundContact::miss());
        assert_eq!(body.velocity.y, 42.0);
        assert_eq!(body.position.y, 580.0);
    }

    #[test]
    fn test_above_ground_is_untouched() {
        let before = Body::new(Vec2::new(50.0, 100.0), Vec2::new(1.0, -20.0), 5.0);
        let mut body = before;
        let contact = resolve_ground(&mut body, 580.0, 0.8);

        assert!(!contact.hit);
        assert_eq!(body, before);
    }

    #[test]
    fn test_upward_body_below_ground_still_reflects() {
        // Reflection flips whatever sign the velocity has
        let mut body = Body::new(Vec2::new(0.0, 600.0), Vec2::new(0.0, -10.0), 5.0);
        resolve_ground(&mut body, 580.0, 0.5);
        assert!((body.velocity.y - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_damped() {
        assert!((reflect_damped(500.0, 0.8) - (-400.0)).abs() < 1e-4);
        assert!((reflect_damped(-10.0, 0.5) - 5.0).abs() < 1e-6);
    }
}
