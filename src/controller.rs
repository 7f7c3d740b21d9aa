//! Pointer and wheel input to camera changes.
//!
//! A small state machine decides what button-held pointer motion means:
//!
//! ```text
//!            double-click press / drag_start
//!     Idle ───────────────────────────────────▶ Dragging
//!      ▲                                           │
//!      └──────────────── release ──────────────────┘
//! ```
//!
//! - **Idle**: motion rotates the view.
//! - **Dragging**: motion pans the view.

use log::debug;

use crate::camera::CameraState;
use crate::config::ViewerConfig;
use crate::math::Vec2;
use crate::projection::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
}

/// Owns the camera and turns raw input events into camera deltas.
#[derive(Debug, Clone)]
pub struct InteractionController {
    camera: CameraState,
    mode: InteractionMode,
    last_pointer: Vec2,
    viewport: Viewport,
    rotate_sensitivity: f64,
    pan_vertical_gain: f64,
    wheel_step: f64,
    auto_rotate: bool,
    auto_rotate_step: f64,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl InteractionController {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            camera: CameraState::new(config.default_scale, config.min_scale),
            mode: InteractionMode::Idle,
            last_pointer: Vec2::ZERO,
            viewport: config.viewport,
            rotate_sensitivity: config.rotate_sensitivity,
            pan_vertical_gain: config.pan_vertical_gain,
            wheel_step: config.wheel_step,
            auto_rotate: false,
            auto_rotate_step: config.auto_rotate_step,
        }
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraState {
        &mut self.camera
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn last_pointer(&self) -> Vec2 {
        self.last_pointer
    }

    /// The viewport pan offsets are measured against.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Button-up motion: remembers where the pointer is so the next drag
    /// starts from there.
    pub fn on_pointer_hover(&mut self, x: f64, y: f64) {
        self.last_pointer = Vec2::new(x, y);
    }

    /// Button-held motion: rotates while idle, pans while dragging.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        match self.mode {
            InteractionMode::Idle => {
                let k = self.rotate_sensitivity;
                self.camera
                    .rotate((y - self.last_pointer.y) * k, (x - self.last_pointer.x) * k);
            }
            InteractionMode::Dragging => {
                let scale = self.camera.scale();
                let half_w = self.viewport.half_width();
                let half_h = self.viewport.half_height();

                let to_camera_x = |px: f64| (px - half_w) / scale;
                let to_camera_y = |py: f64| (py - half_h) / scale;

                let dx = to_camera_x(x) - to_camera_x(self.last_pointer.x);
                let dy = to_camera_y(y) - to_camera_y(self.last_pointer.y);
                self.camera.pan(dx, dy * self.pan_vertical_gain);
            }
        }
        self.last_pointer = Vec2::new(x, y);
    }

    /// A button press. Only a double click begins a pan drag; any press
    /// records the pointer position.
    pub fn on_pointer_press(&mut self, x: f64, y: f64, clicks: u8) {
        if clicks == 2 {
            self.on_pointer_drag_start(x, y);
        } else {
            self.last_pointer = Vec2::new(x, y);
        }
    }

    pub fn on_pointer_drag_start(&mut self, x: f64, y: f64) {
        self.last_pointer = Vec2::new(x, y);
        if self.mode != InteractionMode::Dragging {
            debug!("interaction: idle -> dragging at ({}, {})", x, y);
            self.mode = InteractionMode::Dragging;
        }
    }

    pub fn on_pointer_drag_end(&mut self) {
        if self.mode == InteractionMode::Dragging {
            debug!("interaction: dragging -> idle");
            self.mode = InteractionMode::Idle;
        }
    }

    /// `rotation` is in wheel notches; positive zooms in.
    pub fn on_wheel(&mut self, rotation: f64) {
        self.camera.zoom(rotation * self.wheel_step);
    }

    /// Zeroes angles and pan. Zoom, mode and auto-rotate are untouched.
    pub fn reset(&mut self) {
        self.camera.reset();
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        if self.auto_rotate != enabled {
            debug!("auto-rotate {}", if enabled { "on" } else { "off" });
        }
        self.auto_rotate = enabled;
    }

    /// One timer tick. Returns whether the camera changed.
    pub fn tick(&mut self) -> bool {
        if !self.auto_rotate {
            return false;
        }
        self.camera
            .rotate(self.auto_rotate_step, self.auto_rotate_step);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn controller() -> InteractionController {
        InteractionController::new(&ViewerConfig::default())
    }

    #[test]
    fn idle_motion_rotates() {
        let mut c = controller();
        c.on_pointer_hover(100.0, 100.0);
        c.on_pointer_move(130.0, 80.0);

        assert_relative_eq!(c.camera().angle_y, 0.3);
        assert_relative_eq!(c.camera().angle_x, -0.2);
        assert_eq!(c.camera().translate_x, 0.0);
        assert_eq!(c.last_pointer(), Vec2::new(130.0, 80.0));
    }

    #[test]
    fn hover_does_not_move_the_camera() {
        let mut c = controller();
        c.on_pointer_hover(10.0, 10.0);
        c.on_pointer_hover(300.0, 250.0);
        assert_eq!(*c.camera(), CameraState::new(100.0, 10.0));
    }

    #[test]
    fn single_click_does_not_start_dragging() {
        let mut c = controller();
        c.on_pointer_press(50.0, 60.0, 1);
        assert_eq!(c.mode(), InteractionMode::Idle);
        assert_eq!(c.last_pointer(), Vec2::new(50.0, 60.0));

        c.on_pointer_press(50.0, 60.0, 2);
        assert_eq!(c.mode(), InteractionMode::Dragging);
        c.on_pointer_drag_end();
        assert_eq!(c.mode(), InteractionMode::Idle);
    }

    #[test]
    fn dragging_pans_with_vertical_gain() {
        let mut c = controller();
        c.on_pointer_drag_start(400.0, 300.0);
        c.on_pointer_move(450.0, 320.0);

        // scale 100: 50 px -> 0.5 units across, 20 px -> 0.2 units * 100 down.
        assert_relative_eq!(c.camera().translate_x, 0.5);
        assert_relative_eq!(c.camera().translate_y, 20.0);
        assert_eq!(c.camera().angle_x, 0.0);
        assert_eq!(c.camera().angle_y, 0.0);
    }

    #[test]
    fn pan_is_divided_by_zoom() {
        let mut c = controller();
        c.camera_mut().set_scale(200.0);
        c.on_pointer_drag_start(0.0, 0.0);
        c.on_pointer_move(100.0, 10.0);
        assert_relative_eq!(c.camera().translate_x, 0.5);
        assert_relative_eq!(c.camera().translate_y, 5.0);
    }

    #[test]
    fn motion_after_release_rotates_again() {
        let mut c = controller();
        c.on_pointer_drag_start(0.0, 0.0);
        c.on_pointer_move(10.0, 0.0);
        c.on_pointer_drag_end();
        c.on_pointer_move(20.0, 0.0);
        assert_relative_eq!(c.camera().angle_y, 0.1);
        assert_relative_eq!(c.camera().translate_x, 0.1);
    }

    #[test]
    fn wheel_zooms_and_clamps() {
        let mut c = controller();
        c.on_wheel(3.0);
        assert_eq!(c.camera().scale(), 130.0);
        for _ in 0..50 {
            c.on_wheel(-1.0);
        }
        assert_eq!(c.camera().scale(), 10.0);
    }

    #[test]
    fn reset_keeps_zoom_and_mode() {
        let mut c = controller();
        c.on_wheel(15.0);
        c.on_pointer_drag_start(0.0, 0.0);
        c.on_pointer_move(40.0, 40.0);
        c.reset();

        assert_eq!(c.camera().translate_x, 0.0);
        assert_eq!(c.camera().translate_y, 0.0);
        assert_eq!(c.camera().scale(), 250.0);
        assert_eq!(c.mode(), InteractionMode::Dragging);
    }

    #[test]
    fn tick_only_spins_when_enabled() {
        let mut c = controller();
        assert!(!c.tick());
        assert_eq!(c.camera().angle_x, 0.0);

        c.set_auto_rotate(true);
        assert!(c.tick());
        assert!(c.tick());
        assert_relative_eq!(c.camera().angle_x, 0.02);
        assert_relative_eq!(c.camera().angle_y, 0.02);
    }
}
