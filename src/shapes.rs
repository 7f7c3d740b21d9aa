//! Built-in procedural shapes shown when no model file is loaded.

use std::f64::consts::{PI, TAU};
use std::fmt;

use crate::math::Vec3;
use crate::mesh::{Face, Mesh};

pub const DEFAULT_SPHERE_STACKS: usize = 20;
pub const DEFAULT_SPHERE_SLICES: usize = 20;

const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

const CUBE_FACES: [[usize; 4]; 6] = [
    [4, 5, 6, 7],
    [0, 1, 2, 3],
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [0, 3, 7, 4],
    [1, 2, 6, 5],
];

const PYRAMID_VERTICES: [Vec3; 5] = [
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(-1.0, -1.0, -1.0),
];

const TRUNCATED_PYRAMID_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-0.5, -0.5, 0.0),
    Vec3::new(0.5, -0.5, 0.0),
    Vec3::new(0.5, 0.5, 0.0),
    Vec3::new(-0.5, 0.5, 0.0),
];

const TRUNCATED_PYRAMID_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    #[default]
    Cube,
    Pyramid,
    TruncatedPyramid,
    Sphere,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Cube,
        ShapeKind::Pyramid,
        ShapeKind::TruncatedPyramid,
        ShapeKind::Sphere,
    ];

    /// The shape after this one in the "change shape" cycle.
    pub fn next(self) -> Self {
        match self {
            ShapeKind::Cube => ShapeKind::Pyramid,
            ShapeKind::Pyramid => ShapeKind::TruncatedPyramid,
            ShapeKind::TruncatedPyramid => ShapeKind::Sphere,
            ShapeKind::Sphere => ShapeKind::Cube,
        }
    }

    /// Builds the shape, using the default 20x20 grid for the sphere.
    pub fn build(self) -> Mesh {
        self.build_with_grid(DEFAULT_SPHERE_STACKS, DEFAULT_SPHERE_SLICES)
    }

    /// Builds the shape; `stacks`/`slices` only affect [`ShapeKind::Sphere`].
    pub fn build_with_grid(self, stacks: usize, slices: usize) -> Mesh {
        match self {
            ShapeKind::Cube => from_tables(&CUBE_VERTICES, &CUBE_FACES),
            ShapeKind::Pyramid => pyramid(),
            ShapeKind::TruncatedPyramid => {
                from_tables(&TRUNCATED_PYRAMID_VERTICES, &TRUNCATED_PYRAMID_FACES)
            }
            ShapeKind::Sphere => uv_sphere(1.0, stacks, slices),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::TruncatedPyramid => "truncated-pyramid",
            ShapeKind::Sphere => "sphere",
        };
        f.write_str(name)
    }
}

fn from_tables(vertices: &[Vec3], faces: &[[usize; 4]]) -> Mesh {
    Mesh::new(
        vertices.to_vec(),
        faces.iter().map(|face| Face::new(face.to_vec())).collect(),
    )
}

fn pyramid() -> Mesh {
    let faces = vec![
        Face::new([0, 1, 2]),
        Face::new([0, 2, 3]),
        Face::new([0, 3, 4]),
        Face::new([0, 4, 1]),
        Face::new([1, 2, 3, 4]),
    ];
    Mesh::new(PYRAMID_VERTICES.to_vec(), faces)
}

/// Latitude/longitude sphere with one quad per grid cell.
///
/// The cells touching the poles are degenerate quads (two corners coincide
/// at the pole) rather than triangles.
pub fn uv_sphere(radius: f64, stacks: usize, slices: usize) -> Mesh {
    if stacks == 0 || slices == 0 {
        return Mesh::empty();
    }

    let mut vertices = Vec::with_capacity((stacks + 1) * slices);
    for i in 0..=stacks {
        let theta = i as f64 * PI / stacks as f64;
        for j in 0..slices {
            let phi = j as f64 * TAU / slices as f64;
            vertices.push(Vec3::new(
                radius * theta.sin() * phi.cos(),
                radius * theta.cos(),
                radius * theta.sin() * phi.sin(),
            ));
        }
    }

    let index = |i: usize, j: usize| i * slices + j % slices;
    let mut faces = Vec::with_capacity(stacks * slices);
    for i in 0..stacks {
        for j in 0..slices {
            faces.push(Face::new([
                index(i, j),
                index(i, j + 1),
                index(i + 1, j + 1),
                index(i + 1, j),
            ]));
        }
    }

    Mesh::new(vertices, faces)
}
