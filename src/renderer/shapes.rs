//! Shape generation for 2D primitives
//!
//! Surface pixels use a top-left origin with +y down; NDC has +y up.

use super::vertex::Vertex;
use super::{Color, Rect};

/// Map a surface pixel coordinate to normalized device coordinates
#[inline]
pub fn pixel_to_ndc(x: f32, y: f32, size: (u32, u32)) -> (f32, f32) {
    let (w, h) = (size.0 as f32, size.1 as f32);
    (x / w * 2.0 - 1.0, 1.0 - y / h * 2.0)
}

/// Two triangles covering `rect`, or nothing for an empty rect
pub fn rect_quad(rect: Rect, color: Color, size: (u32, u32)) -> Vec<Vertex> {
    if rect.w <= 0 || rect.h <= 0 || size.0 == 0 || size.1 == 0 {
        return Vec::new();
    }

    let color = color.to_f32();
    let (left, top) = pixel_to_ndc(rect.x as f32, rect.y as f32, size);
    // Edges in f32: x + w can exceed i32 for far-away bodies
    let (right, bottom) = pixel_to_ndc(
        rect.x as f32 + rect.w as f32,
        rect.y as f32 + rect.h as f32,
        size,
    );

    vec![
        Vertex::new(left, top, color),
        Vertex::new(left, bottom, color),
        Vertex::new(right, top, color),
        Vertex::new(right, top, color),
        Vertex::new(left, bottom, color),
        Vertex::new(right, bottom, color),
    ]
}
