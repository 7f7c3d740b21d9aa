//! The viewer core the host shell talks to.
//!
//! [`Viewer`] owns the displayed mesh, the current built-in shape and the
//! [`InteractionController`]. The host forwards user intents (load, reset,
//! close, change shape, pointer and wheel events, timer ticks) and asks for
//! frames; nothing here knows about windows, buttons or labels.

use std::path::Path;

use log::{debug, info, warn};

use crate::camera::CameraState;
use crate::config::ViewerConfig;
use crate::controller::{InteractionController, InteractionMode};
use crate::mesh::{LoadError, Mesh, MeshSummary};
use crate::painter::{self, DrawStyle};
use crate::projection::Viewport;
use crate::render::{Canvas, DrawCommand, DrawList};
use crate::shapes::ShapeKind;

pub struct Viewer {
    config: ViewerConfig,
    style: DrawStyle,
    mesh: Mesh,
    shape: ShapeKind,
    model_loaded: bool,
    controller: InteractionController,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl Viewer {
    /// A viewer showing the default built-in shape (the cube).
    pub fn new(config: ViewerConfig) -> Self {
        Self::with_shape(config, ShapeKind::default())
    }

    pub fn with_shape(config: ViewerConfig, shape: ShapeKind) -> Self {
        let controller = InteractionController::new(&config);
        let mesh = build_shape(&config, shape);
        Self {
            style: DrawStyle::from(&config),
            config,
            mesh,
            shape,
            model_loaded: false,
            controller,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Whether a file model (rather than a built-in shape) is displayed.
    pub fn has_model(&self) -> bool {
        self.model_loaded
    }

    pub fn camera(&self) -> &CameraState {
        self.controller.camera()
    }

    pub fn camera_mut(&mut self) -> &mut CameraState {
        self.controller.camera_mut()
    }

    pub fn mode(&self) -> InteractionMode {
        self.controller.mode()
    }

    pub fn summary(&self) -> MeshSummary {
        self.mesh.summary()
    }

    /// Replaces the displayed mesh with the parsed `source`.
    ///
    /// On error nothing changes: the previous mesh and camera stay as they
    /// were.
    pub fn load_mesh(&mut self, source: &str) -> Result<MeshSummary, LoadError> {
        let mut mesh = Mesh::parse(source).map_err(|e| {
            warn!("model load failed: {}", e);
            e
        })?;
        if let Some(target) = self.config.min_model_size {
            mesh.normalize_scale(target);
        }

        self.mesh = mesh;
        self.model_loaded = true;
        let summary = self.mesh.summary();
        info!("model loaded: {}", summary);
        Ok(summary)
    }

    /// Reads `path` and loads it as [`Viewer::load_mesh`] does.
    pub fn load_mesh_file<P: AsRef<Path>>(&mut self, path: P) -> Result<MeshSummary, LoadError> {
        let path = path.as_ref();
        debug!("loading model from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|e| {
            let err = LoadError::Io(format!("{}: {}", path.display(), e));
            warn!("model load failed: {}", err);
            err
        })?;
        self.load_mesh(&contents)
    }

    /// Zeroes rotation and pan. Zoom is kept.
    pub fn reset(&mut self) {
        debug!("view reset");
        self.controller.reset();
    }

    /// Drops the loaded model, shows the current built-in shape again and
    /// resets the view.
    pub fn close_and_restore_default(&mut self) {
        info!("model closed, showing {}", self.shape);
        self.mesh = build_shape(&self.config, self.shape);
        self.model_loaded = false;
        self.reset();
    }

    /// Advances to the next built-in shape. A loaded model stays on screen;
    /// the new shape appears once the model is closed.
    pub fn change_shape(&mut self) -> ShapeKind {
        self.shape = self.shape.next();
        info!("shape changed to {}", self.shape);
        if !self.model_loaded {
            self.mesh = build_shape(&self.config, self.shape);
        }
        self.shape
    }

    pub fn on_pointer_hover(&mut self, x: f64, y: f64) {
        self.controller.on_pointer_hover(x, y);
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.controller.on_pointer_move(x, y);
    }

    pub fn on_pointer_press(&mut self, x: f64, y: f64, clicks: u8) {
        self.controller.on_pointer_press(x, y, clicks);
    }

    pub fn on_pointer_drag_start(&mut self, x: f64, y: f64) {
        self.controller.on_pointer_drag_start(x, y);
    }

    pub fn on_pointer_drag_end(&mut self) {
        self.controller.on_pointer_drag_end();
    }

    pub fn on_wheel(&mut self, delta: f64) {
        self.controller.on_wheel(delta);
    }

    pub fn auto_rotate(&self) -> bool {
        self.controller.auto_rotate()
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.controller.set_auto_rotate(enabled);
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        let enabled = !self.controller.auto_rotate();
        self.controller.set_auto_rotate(enabled);
        enabled
    }

    /// Timer tick; returns whether a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.controller.tick()
    }

    /// Draws the current frame onto any canvas.
    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C, viewport: Viewport) {
        self.controller.set_viewport(viewport);
        painter::draw(
            canvas,
            &self.mesh,
            self.controller.camera(),
            viewport,
            &self.style,
        );
    }

    /// Renders one frame as draw commands: the face outlines back to front,
    /// then the centre marker when the mesh has vertices.
    pub fn render_frame(&mut self, viewport_width: u32, viewport_height: u32) -> Vec<DrawCommand> {
        let mut list = DrawList::new();
        self.draw(&mut list, Viewport::new(viewport_width, viewport_height));
        list.into_commands()
    }
}

fn build_shape(config: &ViewerConfig, shape: ShapeKind) -> Mesh {
    let (stacks, slices) = config.sphere_grid;
    shape.build_with_grid(stacks, slices)
}
