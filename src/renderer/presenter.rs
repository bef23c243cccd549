//! World-to-draw-command projection
//!
//! Read-only: the presenter never touches simulation state, so calling it
//! twice on the same world draws the same frame twice.

use serde::{Deserialize, Serialize};

use super::{Color, Rect, Surface};
use crate::sim::{Body, World};

/// Colors used when presenting a world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub body: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            body: Color::RED,
        }
    }
}

/// Screen rectangle for a body: top-left at the floored position, side `2 * radius`
/// truncated toward zero
pub fn body_rect(body: &Body) -> Rect {
    let side = body.diameter() as i32;
    Rect::new(
        body.position.x.floor() as i32,
        body.position.y.floor() as i32,
        side,
        side,
    )
}

/// Draw the world with the default palette
pub fn render<S: Surface + ?Sized>(surface: &mut S, world: &World) {
    render_with(surface, world, &Palette::default());
}

/// Clear, draw one filled square per body in world order, then present
pub fn render_with<S: Surface + ?Sized>(surface: &mut S, world: &World, palette: &Palette) {
    surface.clear(palette.background);

    for body in world {
        surface.fill_rect(body_rect(body), palette.body);
    }

    surface.present();
}
