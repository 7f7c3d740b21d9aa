//! Tunables for the viewer core.
//!
//! Every constant that shapes interaction or drawing lives on [`ViewerConfig`],
//! so two viewers with different settings can coexist in one process.

use std::time::Duration;

use crate::colors;
use crate::projection::Viewport;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Viewport used for pan math and as the host's initial window size.
    pub viewport: Viewport,
    /// Radians of rotation per pixel of pointer motion.
    pub rotate_sensitivity: f64,
    /// Extra gain applied to vertical panning.
    pub pan_vertical_gain: f64,
    /// Scale change per wheel notch.
    pub wheel_step: f64,
    /// Lower bound for the zoom scale.
    pub min_scale: f64,
    /// Scale a fresh camera starts with.
    pub default_scale: f64,
    /// Latitude bands and longitude slices of the built-in sphere.
    pub sphere_grid: (usize, usize),
    /// Radians added to both angles on each auto-rotate tick.
    pub auto_rotate_step: f64,
    /// Cadence the host drives [`crate::Viewer::tick`] at.
    pub tick_period: Duration,
    /// Loaded models smaller than this are scaled up to it. `None` keeps
    /// file coordinates untouched.
    pub min_model_size: Option<f64>,
    pub outline_color: u32,
    pub stroke_width: u32,
    pub marker_color: u32,
    pub marker_radius: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            rotate_sensitivity: 0.01,
            pan_vertical_gain: 100.0,
            wheel_step: 10.0,
            min_scale: 10.0,
            default_scale: 100.0,
            sphere_grid: (20, 20),
            auto_rotate_step: 0.01,
            tick_period: Duration::from_millis(16),
            min_model_size: Some(2.0),
            outline_color: colors::OUTLINE,
            stroke_width: 2,
            marker_color: colors::MARKER,
            marker_radius: 3,
        }
    }
}
