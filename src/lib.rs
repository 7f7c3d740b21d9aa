//! An interactive wireframe viewer for polyhedral meshes.
//!
//! The crate is the windowless core of the viewer: mesh loading and
//! built-in shapes, the rotate/pan/zoom projection, painter's-algorithm face
//! ordering and the pointer state machine. A host shell (see `src/main.rs`)
//! feeds it input and presents what it draws.
//!
//! # Quick Start
//!
//! ```
//! use wirescope::prelude::*;
//!
//! let mut viewer = Viewer::default();
//! viewer.on_pointer_hover(400.0, 300.0);
//! viewer.on_pointer_move(420.0, 310.0);
//! viewer.on_wheel(2.0);
//!
//! let frame = viewer.render_frame(800, 600);
//! assert_eq!(frame.len(), 7); // six cube faces and the centre marker
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod config;
pub mod controller;
pub mod math;
pub mod mesh;
pub mod painter;
pub mod projection;
pub mod render;
pub mod shapes;
pub mod viewer;
#[cfg(feature = "window")]
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use camera::CameraState;
pub use config::ViewerConfig;
pub use controller::{InteractionController, InteractionMode};
pub use mesh::{Face, LoadError, Mesh, MeshSummary};
pub use projection::{project, Viewport};
pub use shapes::ShapeKind;
pub use viewer::Viewer;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use wirescope::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use crate::viewer::Viewer;
    pub use crate::config::ViewerConfig;

    // Geometry
    pub use crate::mesh::{Face, LoadError, Mesh, MeshSummary};
    pub use crate::shapes::ShapeKind;

    // View
    pub use crate::camera::CameraState;
    pub use crate::controller::{InteractionController, InteractionMode};
    pub use crate::projection::{project, Viewport};

    // Drawing
    pub use crate::painter::{draw, render_order, DrawStyle};
    pub use crate::render::{Canvas, DrawCommand, DrawList, Renderer};

    // Math
    pub use crate::math::{Vec2, Vec3};
}
