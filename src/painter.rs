//! Painter's-algorithm face ordering and wireframe drawing.
//!
//! Each face gets a depth key, faces are drawn farthest first, and every face
//! is stroked as a closed outline. There is no depth buffer and no fill, so
//! "visible order" only means later outlines land on top of earlier ones.
//!
//! # Depth key
//!
//! The key is the mean **model-space** z of a face's vertices, taken before
//! any rotation. Once the view is rotated this is no longer the true distance
//! along the viewing axis, so overlaps can be drawn in the wrong order. This
//! is a known approximation of the viewer, not something `draw` corrects.

use crate::camera::CameraState;
use crate::config::ViewerConfig;
use crate::math::{Vec2, Vec3};
use crate::mesh::{Face, Mesh};
use crate::projection::{project, Viewport};
use crate::render::Canvas;

/// Colours and sizes used by [`draw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawStyle {
    pub outline_color: u32,
    pub stroke_width: u32,
    pub marker_color: u32,
    pub marker_radius: u32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self::from(&ViewerConfig::default())
    }
}

impl From<&ViewerConfig> for DrawStyle {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            outline_color: config.outline_color,
            stroke_width: config.stroke_width,
            marker_color: config.marker_color,
            marker_radius: config.marker_radius,
        }
    }
}

/// Mean model-space z of the face's vertices; 0.0 for a face with no indices.
pub fn depth_key(face: &Face, vertices: &[Vec3]) -> f64 {
    if face.is_empty() {
        return 0.0;
    }
    let sum: f64 = face.indices.iter().map(|&i| vertices[i].z).sum();
    sum / face.len() as f64
}

/// Orders face indices by descending key. Equal keys keep their original
/// relative order.
pub fn order_by_depth(keys: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    // `sort_by` is stable, which is what gives the tie-break.
    order.sort_by(|&a, &b| keys[b].total_cmp(&keys[a]));
    order
}

/// Back-to-front face order for `mesh`.
///
/// The camera does not influence the order; it is accepted so callers can
/// treat ordering and drawing as one view-dependent step.
pub fn render_order(mesh: &Mesh, _camera: &CameraState) -> Vec<usize> {
    let keys: Vec<f64> = mesh
        .faces()
        .iter()
        .map(|face| depth_key(face, mesh.vertices()))
        .collect();
    order_by_depth(&keys)
}

/// Draws `mesh` onto `canvas`: every face as a stroked outline in
/// [`render_order`], then a marker dot at the literal centre of the viewport
/// when the mesh has any vertices.
///
/// The marker is a fixed screen reference. It does not follow the model's
/// centroid, pan or rotation.
pub fn draw<C: Canvas + ?Sized>(
    canvas: &mut C,
    mesh: &Mesh,
    camera: &CameraState,
    viewport: Viewport,
    style: &DrawStyle,
) {
    let mut outline: Vec<Vec2> = Vec::new();
    for face_index in render_order(mesh, camera) {
        outline.clear();
        outline.extend(
            mesh.faces()[face_index]
                .indices
                .iter()
                .map(|&i| project(mesh.vertices()[i], camera, viewport)),
        );
        canvas.stroke_polygon(&outline, style.outline_color, style.stroke_width);
    }

    if mesh.vertex_count() > 0 {
        canvas.fill_dot(viewport.center(), style.marker_radius, style.marker_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, DrawList};
    use crate::shapes::ShapeKind;
    use approx::assert_relative_eq;

    const VIEWPORT: Viewport = Viewport::new(800, 600);

    /// Three triangles whose z averages are 2.0, -1.0 and 0.5.
    fn layered() -> Mesh {
        Mesh::parse(
            "v 0 0 2\nv 1 0 2\nv 0 1 2\n\
             v 0 0 -1\nv 1 0 -1\nv 0 1 -1\n\
             v 0 0 0\nv 1 0 1\nv 0 1 0.5\n\
             f 1 2 3\nf 4 5 6\nf 7 8 9\n",
        )
        .unwrap()
    }

    #[test]
    fn depth_key_is_mean_z() {
        let mesh = layered();
        let keys: Vec<f64> = mesh
            .faces()
            .iter()
            .map(|f| depth_key(f, mesh.vertices()))
            .collect();
        assert_relative_eq!(keys[0], 2.0);
        assert_relative_eq!(keys[1], -1.0);
        assert_relative_eq!(keys[2], 0.5);
    }

    #[test]
    fn orders_farthest_first() {
        assert_eq!(order_by_depth(&[2.0, -1.0, 0.5]), vec![0, 2, 1]);
        assert_eq!(render_order(&layered(), &CameraState::default()), vec![0, 2, 1]);
    }

    #[test]
    fn ties_keep_original_order() {
        assert_eq!(order_by_depth(&[1.0, 3.0, 1.0, 3.0, 1.0]), vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn empty_mesh_has_empty_order() {
        assert!(render_order(&Mesh::empty(), &CameraState::default()).is_empty());
    }

    // The key ignores rotation: a half turn about Y would bring face 1 to
    // the front in view space, yet the order is unchanged.
    #[test]
    fn order_uses_model_space_depth_under_rotation() {
        let mut camera = CameraState::default();
        camera.rotate(0.0, std::f64::consts::PI);
        assert_eq!(render_order(&layered(), &camera), vec![0, 2, 1]);
    }

    #[test]
    fn draws_each_face_then_centre_marker() {
        let mesh = ShapeKind::Cube.build();
        let mut list = DrawList::new();
        draw(&mut list, &mesh, &CameraState::default(), VIEWPORT, &DrawStyle::default());

        assert_eq!(list.len(), 7);
        assert_eq!(list.polygons().count(), 6);
        assert!(list.polygons().all(|outline| outline.len() == 4));
        match list.commands().last() {
            Some(DrawCommand::Marker { center, .. }) => {
                assert_eq!(*center, Vec2::new(400.0, 300.0))
            }
            other => panic!("expected marker, got {:?}", other),
        }
    }

    #[test]
    fn first_outline_is_farthest_face() {
        let mesh = ShapeKind::Cube.build();
        let mut list = DrawList::new();
        draw(&mut list, &mesh, &CameraState::default(), VIEWPORT, &DrawStyle::default());
        // Face 0 is the z = +1 side.
        let first = list.polygons().next().unwrap();
        assert_eq!(first[0], project(mesh.vertices()[4], &CameraState::default(), VIEWPORT));
    }

    #[test]
    fn marker_ignores_pan_and_model_position() {
        let mesh = Mesh::parse("v 5 5 5\nv 6 5 5\nv 5 6 5\nf 1 2 3\n").unwrap();
        let mut camera = CameraState::default();
        camera.pan(3.0, 40.0);
        camera.rotate(0.4, 0.9);

        let mut list = DrawList::new();
        draw(&mut list, &mesh, &camera, VIEWPORT, &DrawStyle::default());
        assert!(matches!(
            list.commands().last(),
            Some(DrawCommand::Marker { center, .. }) if *center == Vec2::new(400.0, 300.0)
        ));
    }

    #[test]
    fn vertices_without_faces_draw_only_the_marker() {
        let mesh = Mesh::parse("v 0 0 0\nv 1 1 1\n").unwrap();
        let mut list = DrawList::new();
        draw(&mut list, &mesh, &CameraState::default(), VIEWPORT, &DrawStyle::default());
        assert_eq!(list.len(), 1);
        assert!(matches!(list.commands()[0], DrawCommand::Marker { .. }));
    }

    #[test]
    fn empty_mesh_draws_nothing() {
        let mut list = DrawList::new();
        draw(
            &mut list,
            &Mesh::empty(),
            &CameraState::default(),
            VIEWPORT,
            &DrawStyle::default(),
        );
        assert!(list.is_empty());
    }
}
