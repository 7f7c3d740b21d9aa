//! Drawing surfaces.
//!
//! The painter talks to a [`Canvas`]; two implementations are provided:
//!
//! - [`DrawList`]: records [`DrawCommand`]s for the host to replay.
//! - [`Renderer`]: rasterises straight into an owned ARGB8888 buffer.

mod draw_list;
mod framebuffer;
mod renderer;

pub use draw_list::{DrawCommand, DrawList};
pub use framebuffer::FrameBuffer;
pub use renderer::Renderer;

use crate::math::Vec2;

/// A 2D target the painter can stroke polygons and dots onto.
pub trait Canvas {
    /// Strokes the closed outline through `points`. No fill.
    fn stroke_polygon(&mut self, points: &[Vec2], color: u32, width: u32);

    /// Fills a disc of `radius` pixels around `center`.
    fn fill_dot(&mut self, center: Vec2, radius: u32, color: u32);
}
