//! Rendering module
//!
//! The presenter talks to an immediate-mode [`Surface`] (clear, fill-rect,
//! present). Implementations:
//! - [`RecordingSurface`]: records draw commands (tests, inspection)
//! - [`FramebufferSurface`]: software RGBA framebuffer (headless runs)
//! - [`GpuSurface`]: WebGPU colored-quad pipeline (browser)

pub mod framebuffer;
pub mod pipeline;
pub mod presenter;
pub mod recording;
pub mod shapes;
pub mod vertex;

pub use framebuffer::FramebufferSurface;
pub use pipeline::{GpuSurface, RenderState};
pub use presenter::{Palette, body_rect, render, render_with};
pub use recording::{DrawCommand, RecordingSurface};

use serde::{Deserialize, Serialize};

/// An RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalized channels for vertex data
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_f32();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

/// Integer rectangle in surface pixels, top-left origin, +y down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Minimal immediate-mode drawing capability
pub trait Surface {
    /// Fill the whole back buffer with `color`
    fn clear(&mut self, color: Color);
    /// Fill `rect` with `color`; parts outside the surface are clipped
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Show the assembled frame
    fn present(&mut self);
}
