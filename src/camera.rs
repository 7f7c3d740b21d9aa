//! View parameters: two rotation angles, a zoom scale and a screen-plane pan.
//!
//! # Angles
//!
//! - `angle_x`: rotation about the horizontal axis, applied first.
//! - `angle_y`: rotation about the vertical axis, applied second.
//!
//! Both are in radians and are not wrapped.

/// Camera parameters consumed by [`crate::projection::project`].
///
/// `scale` is kept at or above `min_scale` by every mutator on this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub angle_x: f64,
    pub angle_y: f64,
    scale: f64,
    min_scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(100.0, 10.0)
    }
}

impl CameraState {
    /// A camera at rest with the given zoom. `default_scale` is raised to
    /// `min_scale` if it is smaller.
    pub fn new(default_scale: f64, min_scale: f64) -> Self {
        Self {
            angle_x: 0.0,
            angle_y: 0.0,
            scale: default_scale.max(min_scale),
            min_scale,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Sets the zoom, clamped to the minimum.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.max(self.min_scale);
    }

    /// Adds `delta` to the zoom, clamped to the minimum. There is no maximum.
    pub fn zoom(&mut self, delta: f64) {
        self.set_scale(self.scale + delta);
    }

    pub fn rotate(&mut self, d_angle_x: f64, d_angle_y: f64) {
        self.angle_x += d_angle_x;
        self.angle_y += d_angle_y;
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.translate_x += dx;
        self.translate_y += dy;
    }

    /// Zeroes both angles and both translations. Zoom is kept.
    pub fn reset(&mut self) {
        self.angle_x = 0.0;
        self.angle_y = 0.0;
        self.translate_x = 0.0;
        self.translate_y = 0.0;
    }
}
