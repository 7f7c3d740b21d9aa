//! Model space to screen space.
//!
//! The view is a fixed, sheared orthographic pipeline rather than a matrix
//! stack:
//!
//! 1. rotate about X by `angle_x` (the (y, z) plane),
//! 2. shift x by `translate_x`, then rotate about Y by `angle_y` (the (x, z)
//!    plane), so a horizontal pan swings with the model as it spins,
//! 3. scale, flip y (model y is up, screen y is down) and move the origin to
//!    the viewport centre, with `translate_y` added in pixels.
//!
//! There is no perspective divide.

use crate::camera::CameraState;
use crate::math::{Vec2, Vec3};

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn half_width(&self) -> f64 {
        self.width as f64 / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height as f64 / 2.0
    }

    /// The literal centre of the surface.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.half_width(), self.half_height())
    }
}

/// Projects a model-space vertex onto the screen. Pure: equal inputs always
/// give equal outputs.
pub fn project(vertex: Vec3, camera: &CameraState, viewport: Viewport) -> Vec2 {
    let tilted = vertex.rotate_x(camera.angle_x);
    let spun = Vec3::new(tilted.x + camera.translate_x, tilted.y, tilted.z)
        .rotate_y(camera.angle_y);

    Vec2::new(
        spun.x * camera.scale() + viewport.half_width(),
        -spun.y * camera.scale() + viewport.half_height() + camera.translate_y,
    )
}
