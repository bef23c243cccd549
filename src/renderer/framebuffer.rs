//! Software framebuffer surface
//!
//! Draws into an in-memory RGBA back buffer; `present` copies it to the front
//! buffer. Used by the native runner, which has no window; snapshots of the
//! presented frame go through the `image` crate.

use std::path::Path;

use super::{Color, Rect, Surface};

/// Double-buffered RGBA framebuffer
pub struct FramebufferSurface {
    width: u32,
    height: u32,
    back: Vec<Color>,
    front: Vec<Color>,
    frames_presented: u64,
}

impl FramebufferSurface {
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            back: vec![Color::BLACK; len],
            front: vec![Color::BLACK; len],
            frames_presented: 0,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Pixel of the last presented frame, `None` when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.front[self.index(x, y)])
    }

    /// The last presented frame, row-major
    pub fn front_buffer(&self) -> &[Color] {
        &self.front
    }

    /// Copy the presented frame into an RGBA image
    pub fn to_image(&self) -> image::RgbaImage {
        let raw: Vec<u8> = self
            .front
            .iter()
            .flat_map(|c| [c.r, c.g, c.b, c.a])
            .collect();
        image::RgbaImage::from_raw(self.width, self.height, raw)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    /// Save the presented frame; the format follows the file extension
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        self.to_image().save(path)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Intersect `rect` with the surface, as half-open pixel ranges
    fn clip(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        if rect.w <= 0 || rect.h <= 0 {
            return None;
        }
        let x0 = (rect.x as i64).max(0);
        let y0 = (rect.y as i64).max(0);
        let x1 = (rect.x as i64 + rect.w as i64).min(self.width as i64);
        let y1 = (rect.y as i64 + rect.h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

impl Surface for FramebufferSurface {
    fn clear(&mut self, color: Color) {
        self.back.fill(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        for y in y0..y1 {
            let start = self.index(x0, y);
            let end = self.index(x1, y);
            self.back[start..end].fill(color);
        }
    }

    fn present(&mut self) {
        self.front.copy_from_slice(&self.back);
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_visible_before_present() {
        let mut fb = FramebufferSurface::new(4, 4);
        fb.clear(Color::RED);
        assert_eq!(fb.pixel(0, 0), Some(Color::BLACK));

        fb.present();
        assert_eq!(fb.pixel(0, 0), Some(Color::RED));
        assert_eq!(fb.frames_presented(), 1);
    }

    #[test]
    fn test_fill_rect() {
        let mut fb = FramebufferSurface::new(8, 8);
        fb.clear(Color::BLACK);
        fb.fill_rect(Rect::new(2, 3, 2, 2), Color::RED);
        fb.present();

        assert_eq!(fb.pixel(2, 3), Some(Color::RED));
        assert_eq!(fb.pixel(3, 4), Some(Color::RED));
        assert_eq!(fb.pixel(4, 4), Some(Color::BLACK));
        assert_eq!(fb.pixel(2, 5), Some(Color::BLACK));
        assert_eq!(fb.pixel(1, 3), Some(Color::BLACK));
        let red = fb.front_buffer().iter().filter(|c| **c == Color::RED).count();
        assert_eq!(red, 4);
    }

    #[test]
    fn test_fill_rect_clips_edges() {
        let mut fb = FramebufferSurface::new(10, 10);
        fb.clear(Color::BLACK);
        // Hangs past the bottom-right corner
        fb.fill_rect(Rect::new(8, 8, 40, 40), Color::RED);
        // Starts above-left of the surface
        fb.fill_rect(Rect::new(-5, -5, 6, 6), Color::RED);
        // Fully outside
        fb.fill_rect(Rect::new(20, 20, 5, 5), Color::RED);
        // Degenerate
        fb.fill_rect(Rect::new(5, 5, 0, 3), Color::RED);
        fb.present();

        let red = fb.front_buffer().iter().filter(|c| **c == Color::RED).count();
        assert_eq!(red, 4 + 1);
        assert_eq!(fb.pixel(9, 9), Some(Color::RED));
        assert_eq!(fb.pixel(0, 0), Some(Color::RED));
        assert_eq!(fb.pixel(5, 5), Some(Color::BLACK));
        assert_eq!(fb.pixel(10, 0), None);
    }

    #[test]
    fn test_to_image() {
        let mut fb = FramebufferSurface::new(2, 1);
        fb.clear(Color::BLACK);
        fb.fill_rect(Rect::new(1, 0, 1, 1), Color::RED);
        fb.present();

        let img = fb.to_image();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_save_snapshot_png() {
        let mut fb = FramebufferSurface::new(4, 3);
        fb.clear(Color::BLACK);
        fb.fill_rect(Rect::new(2, 1, 2, 2), Color::RED);
        fb.present();

        let path = std::env::temp_dir().join(format!(
            "bounce_sim_snapshot_{}.png",
            std::process::id()
        ));
        fb.save_snapshot(&path).unwrap();

        let decoded = image::open(&path).unwrap().into_rgba8();
        let _ = std::fs::remove_file(&path);

        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(2, 1).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(3, 2).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(1, 2).0, [0, 0, 0, 255]);
    }
}
