//! Pixel-level wireframe primitives.
//!
//! Edges are clipped to the buffer in floating point before they are
//! snapped to pixels, so models far outside the view cost nothing to draw.

use crate::math::Vec2;

/// Pen and disc drawing over a borrowed ARGB row-major buffer.
///
/// Colour only: there is no depth buffer, later strokes overwrite earlier
/// ones.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// `color_buffer` holds `height` rows of `width` pixels.
    pub fn new(color_buffer: &'a mut [u32], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            (width * height) as usize,
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fill(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Set a pixel, silently ignoring out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.color_buffer[(y as u32 * self.width + x as u32) as usize] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Stamps a `width` x `width` square pen with its top-left corner at
    /// (x, y), matching how a 2px AWT stroke sits on integer coordinates.
    #[inline]
    fn stamp(&mut self, x: i32, y: i32, width: u32, color: u32) {
        let width = width.max(1) as i32;
        for dy in 0..width {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// The error term tracks the distance between the ideal line and the
    /// current pixel; each step moves along the major axis and, once the
    /// accumulated error crosses the threshold, along the minor axis too.
    /// Callers are expected to clip first: every step is walked, on screen
    /// or not.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, width: u32, color: u32) {
        let (x1, y1) = (x1 as i64, y1 as i64);
        let dx = (x1 - x0 as i64).abs();
        let dy = (y1 - y0 as i64).abs();
        let x_incr_direction = if (x0 as i64) < x1 { 1 } else { -1 };
        let y_incr_direction = if (y0 as i64) < y1 { 1 } else { -1 };

        let mut err = dx - dy;
        let mut x = x0 as i64;
        let mut y = y0 as i64;

        loop {
            self.stamp(x as i32, y as i32, width, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// Strokes a closed outline through `points`. Each edge is clipped to
    /// the buffer (widened by the pen) and then truncated to whole pixels;
    /// edges entirely off the buffer, or with non-finite ends, are skipped.
    pub fn stroke_polygon(&mut self, points: &[Vec2], width: u32, color: u32) {
        let Some(&last) = points.last() else {
            return;
        };
        let pen = width.max(1) as f64;
        let min = Vec2::new(-pen, -pen);
        let max = Vec2::new(self.width as f64 + pen, self.height as f64 + pen);

        let mut previous = last;
        for &point in points {
            if let Some((a, b)) = clip_segment(previous, point, min, max) {
                let (x0, y0) = a.to_pixel();
                let (x1, y1) = b.to_pixel();
                self.draw_line(x0, y0, x1, y1, width, color);
            }
            previous = point;
        }
    }

    /// Fills the pixels within `radius` of `center`.
    pub fn fill_disc(&mut self, center: Vec2, radius: u32, color: u32) {
        let r = radius as f64;
        if !(center.x + r >= 0.0
            && center.x - r < self.width as f64
            && center.y + r >= 0.0
            && center.y - r < self.height as f64)
        {
            return;
        }
        let (cx, cy) = center.to_pixel();
        let r = radius as i32;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }
}

/// Liang-Barsky clip of the segment `a`-`b` to the rectangle `min`..`max`.
/// Returns `None` when nothing of the segment lies inside, or when either
/// end is not finite.
fn clip_segment(a: Vec2, b: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
        return None;
    }
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    if !(dx.is_finite() && dy.is_finite()) {
        return None;
    }
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [
        (-dx, a.x - min.x),
        (dx, max.x - a.x),
        (-dy, a.y - min.y),
        (dy, max.y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
        }
    }

    if t0 > t1 {
        return None;
    }
    Some((
        Vec2::new(a.x + t0 * dx, a.y + t0 * dy),
        Vec2::new(a.x + t1 * dx, a.y + t1 * dy),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn buffer() -> Vec<u32> {
        vec![0; 16 * 16]
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut data = buffer();
        let mut fb = FrameBuffer::new(&mut data, 16, 16);
        fb.set_pixel(-1, 3, 9);
        fb.set_pixel(16, 3, 9);
        fb.set_pixel(3, 16, 9);
        assert_eq!(fb.get_pixel(-1, 3), None);
        assert!(data.iter().all(|&p| p == 0));
    }

    #[test]
    fn horizontal_line_covers_both_endpoints() {
        let mut data = buffer();
        let mut fb = FrameBuffer::new(&mut data, 16, 16);
        fb.draw_line(2, 5, 9, 5, 1, 7);
        for x in 2..=9 {
            assert_eq!(fb.get_pixel(x, 5), Some(7));
        }
        assert_eq!(fb.get_pixel(1, 5), Some(0));
        assert_eq!(fb.get_pixel(10, 5), Some(0));
        assert_eq!(fb.get_pixel(5, 6), Some(0));
    }

    #[test]
    fn wide_pen_thickens_the_line() {
        let mut data = buffer();
        let mut fb = FrameBuffer::new(&mut data, 16, 16);
        fb.draw_line(2, 5, 9, 5, 2, 7);
        assert_eq!(fb.get_pixel(5, 5), Some(7));
        assert_eq!(fb.get_pixel(5, 6), Some(7));
        assert_eq!(fb.get_pixel(5, 7), Some(0));
    }

    #[test]
    fn polygon_outline_is_closed_and_hollow() {
        let mut data = buffer();
        let mut fb = FrameBuffer::new(&mut data, 16, 16);
        let square = [
            Vec2::new(2.0, 2.0),
            Vec2::new(10.0, 2.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(2.0, 10.0),
        ];
        fb.stroke_polygon(&square, 1, 3);
        // Closing edge from (2, 10) back to (2, 2).
        assert_eq!(fb.get_pixel(2, 6), Some(3));
        assert_eq!(fb.get_pixel(10, 6), Some(3));
        assert_eq!(fb.get_pixel(6, 6), Some(0));
    }

    #[test]
    fn clip_keeps_segments_inside() {
        let min = Vec2::new(0.0, 0.0);
        let max = Vec2::new(10.0, 10.0);
        let (a, b) = (Vec2::new(1.0, 2.0), Vec2::new(8.0, 9.0));
        assert_eq!(clip_segment(a, b, min, max), Some((a, b)));
    }

    #[test]
    fn clip_trims_crossing_segments() {
        let min = Vec2::new(0.0, 0.0);
        let max = Vec2::new(10.0, 10.0);
        let (a, b) = clip_segment(Vec2::new(-1e9, 5.0), Vec2::new(1e9, 5.0), min, max).unwrap();
        assert_relative_eq!(a.x, 0.0);
        assert_relative_eq!(b.x, 10.0, epsilon = 1e-6);
        assert_eq!((a.y, b.y), (5.0, 5.0));
    }

    #[test]
    fn clip_drops_outside_and_non_finite_segments() {
        let min = Vec2::new(0.0, 0.0);
        let max = Vec2::new(10.0, 10.0);
        assert_eq!(clip_segment(Vec2::new(-5.0, -1.0), Vec2::new(20.0, -3.0), min, max), None);
        assert_eq!(clip_segment(Vec2::new(12.0, 1.0), Vec2::new(12.0, 9.0), min, max), None);
        assert_eq!(clip_segment(Vec2::new(f64::NAN, 1.0), Vec2::new(5.0, 5.0), min, max), None);
    }

    #[test]
    fn huge_outline_is_clipped_to_the_buffer() {
        let mut data = buffer();
        let mut fb = FrameBuffer::new(&mut data, 16, 16);
        let sliver = [
            Vec2::new(-1e12, 8.0),
            Vec2::new(1e12, 8.0),
            Vec2::new(0.0, 1e12),
        ];
        fb.stroke_polygon(&sliver, 2, 5);
        assert_eq!(fb.get_pixel(0, 8), Some(5));
        assert_eq!(fb.get_pixel(15, 8), Some(5));
        assert_eq!(fb.get_pixel(8, 2), Some(0));
    }

    #[test]
    fn far_off_disc_draws_nothing() {
        let mut data = buffer();
        let mut fb = FrameBuffer::new(&mut data, 16, 16);
        fb.fill_disc(Vec2::new(1e15, -1e15), 3, 4);
        assert!(data.iter().all(|&p| p == 0));
    }

    #[test]
    fn disc_is_round() {
        let mut data = buffer();
        let mut fb = FrameBuffer::new(&mut data, 16, 16);
        fb.fill_disc(Vec2::new(8.0, 8.0), 3, 4);
        assert_eq!(fb.get_pixel(8, 8), Some(4));
        assert_eq!(fb.get_pixel(11, 8), Some(4));
        assert_eq!(fb.get_pixel(11, 11), Some(0));
    }
}
