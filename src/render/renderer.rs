//! Owning raster canvas.
//!
//! Provides the [`Renderer`] struct which owns the color buffer, exposes it
//! as ARGB8888 bytes for presentation, and can export it as a PNG.

use std::path::Path;

use super::framebuffer::FrameBuffer;
use super::Canvas;
use crate::colors;
use crate::math::Vec2;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8; the
        // slice covers exactly the buffer's bytes and borrows `self`.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Get a mutable FrameBuffer view into the color buffer.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height)
    }

    /// Writes the current frame to `path` as a PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        let image = image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(colors::to_rgba(
                self.color_buffer[(y * self.width + x) as usize],
            ))
        });
        image.save_with_format(path, image::ImageFormat::Png)
    }
}

impl Canvas for Renderer {
    fn stroke_polygon(&mut self, points: &[Vec2], color: u32, width: u32) {
        self.as_framebuffer().stroke_polygon(points, width, color);
    }

    fn fill_dot(&mut self, center: Vec2, radius: u32, color: u32) {
        self.as_framebuffer().fill_disc(center, radius, color);
    }
}
