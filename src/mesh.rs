//! Polyhedral mesh storage and the `v`/`f` text loader.
//!
//! A [`Mesh`] is a list of model-space vertex positions plus a list of
//! polygonal faces indexing into it. Loading is all-or-nothing: the text is
//! parsed into a fresh mesh and only swapped in once every record and every
//! face index has been validated.

use std::fmt;
use std::path::Path;

use crate::math::Vec3;

/// One flat polygon, as zero-based indices into the owning mesh's vertices,
/// in the winding order given by the source data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Error types for mesh loading.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The source could not be read.
    Io(String),
    /// A `v` or `f` record was malformed. `line` is 1-based.
    Parse { line: usize, message: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "IO error: {}", e),
            LoadError::Parse { line, message } => {
                write!(f, "Parse error on line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Counts and extent reported back to the host after a load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshSummary {
    pub vertex_count: usize,
    pub face_count: usize,
    pub bounding_size: f64,
}

impl fmt::Display for MeshSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vertices: {}  Polygons: {}  Size: {:.2}",
            self.vertex_count, self.face_count, self.bounding_size
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Builds a mesh from trusted tables (the built-in shapes).
    pub(crate) fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Self {
        debug_assert!(faces
            .iter()
            .all(|face| face.indices.iter().all(|&i| i < vertices.len())));
        Self { vertices, faces }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses `v`/`f` records into a new mesh.
    ///
    /// `v x y z` appends a vertex from the first three numeric fields.
    /// `f a b c ...` appends a face; each field may carry `/`-separated
    /// texture/normal references, of which only the leading 1-based vertex
    /// index is kept. Every other line is ignored.
    pub fn parse(source: &str) -> Result<Self, LoadError> {
        let mut vertices = Vec::new();
        // Faces keep their line number until the final bounds check.
        let mut faces: Vec<(usize, Face)> = Vec::new();

        for (line_num, line) in source.lines().enumerate() {
            let line_num = line_num + 1;
            let mut parts = line.split_whitespace();

            match parts.next() {
                Some("v") => {
                    let mut coord = || -> Result<f64, LoadError> {
                        let field = parts.next().ok_or_else(|| LoadError::Parse {
                            line: line_num,
                            message: "vertex needs three coordinates".to_string(),
                        })?;
                        parse_float(field, line_num)
                    };
                    let x = coord()?;
                    let y = coord()?;
                    let z = coord()?;
                    vertices.push(Vec3::new(x, y, z));
                }
                Some("f") => {
                    let indices = parts
                        .map(|field| parse_face_index(field, line_num))
                        .collect::<Result<Vec<_>, _>>()?;
                    if indices.len() < 3 {
                        return Err(LoadError::Parse {
                            line: line_num,
                            message: format!(
                                "face needs at least 3 vertices, got {}",
                                indices.len()
                            ),
                        });
                    }
                    faces.push((line_num, Face::new(indices)));
                }
                _ => {}
            }
        }

        for (line_num, face) in &faces {
            if let Some(&index) = face.indices.iter().find(|&&i| i >= vertices.len()) {
                return Err(LoadError::Parse {
                    line: *line_num,
                    message: format!(
                        "vertex index {} out of range ({} vertices)",
                        index + 1,
                        vertices.len()
                    ),
                });
            }
        }

        Ok(Self {
            vertices,
            faces: faces.into_iter().map(|(_, face)| face).collect(),
        })
    }

    /// Reads and parses a whole file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| LoadError::Io(format!("{}: {}", path.display(), e)))?;
        Self::parse(&contents)
    }

    /// Replaces this mesh with the parsed `source`. On error `self` is left
    /// untouched.
    pub fn load_from_source(&mut self, source: &str) -> Result<(), LoadError> {
        *self = Self::parse(source)?;
        Ok(())
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
    }

    /// Largest axis-aligned extent. Zero for an empty mesh.
    pub fn bounding_size(&self) -> f64 {
        let Some((&first, rest)) = self.vertices.split_first() else {
            return 0.0;
        };
        let (min, max) = rest
            .iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v)));
        (max - min).max_element()
    }

    /// Uniformly scales the mesh up so its bounding size reaches
    /// `target_min_size`. Meshes already that large, and degenerate meshes
    /// with zero extent, are left alone.
    pub fn normalize_scale(&mut self, target_min_size: f64) {
        let size = self.bounding_size();
        if size == 0.0 || size >= target_min_size {
            return;
        }
        let factor = target_min_size / size;
        for vertex in &mut self.vertices {
            *vertex = *vertex * factor;
        }
    }

    pub fn summary(&self) -> MeshSummary {
        MeshSummary {
            vertex_count: self.vertex_count(),
            face_count: self.face_count(),
            bounding_size: self.bounding_size(),
        }
    }
}

/// A finite decimal number; `nan`, `inf` and overflowing literals are errors.
fn parse_float(field: &str, line_num: usize) -> Result<f64, LoadError> {
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LoadError::Parse {
            line: line_num,
            message: format!("invalid number '{}'", field),
        }),
    }
}

/// `7`, `7/2` and `7//3` all name vertex 7; returns it zero-based.
fn parse_face_index(field: &str, line_num: usize) -> Result<usize, LoadError> {
    let head = field.split('/').next().unwrap_or(field);
    match head.parse::<usize>() {
        Ok(index) if index >= 1 => Ok(index - 1),
        _ => Err(LoadError::Parse {
            line: line_num,
            message: format!("invalid vertex index '{}'", field),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const QUAD: &str = "\
# unit square
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";

    #[test]
    fn parses_vertices_and_faces() {
        let mesh = Mesh::parse(QUAD).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.faces()[0].indices, vec![0, 1, 2, 3]);
        assert_eq!(mesh.vertices()[2], Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn face_fields_keep_only_the_vertex_reference() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvn 0 0 1\nf 1/1/1 2//1 3/4\n";
        let mesh = Mesh::parse(src).unwrap();
        assert_eq!(mesh.faces()[0].indices, vec![0, 1, 2]);
    }

    #[test]
    fn ignores_unknown_records() {
        let src = "o thing\ng group\nmtllib a.mtl\nusemtl red\ns off\nv 1 2 3\n";
        let mesh = Mesh::parse(src).unwrap();
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn non_numeric_vertex_field_is_a_parse_error() {
        let err = Mesh::parse("v 0 0 0\nv 1 abc 0\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));
    }

    #[test]
    fn non_finite_vertex_field_is_a_parse_error() {
        for bad in ["nan", "inf", "-infinity", "1e400"] {
            let src = format!("v 0 0 0\nv 1 0 0\nv {} 0 0\n", bad);
            let err = Mesh::parse(&src).unwrap_err();
            assert!(matches!(err, LoadError::Parse { line: 3, .. }), "{}", bad);
        }
    }

    #[test]
    fn short_vertex_is_a_parse_error() {
        let err = Mesh::parse("v 1 2\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 1, .. }));
    }

    #[test]
    fn out_of_range_face_index_is_a_parse_error() {
        let err = Mesh::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 4, .. }));

        let err = Mesh::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 4, .. }));
    }

    #[test]
    fn degenerate_face_is_a_parse_error() {
        let err = Mesh::parse("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 3, .. }));
    }

    #[test]
    fn failed_load_leaves_mesh_untouched() {
        let mut mesh = Mesh::parse(QUAD).unwrap();
        let before = mesh.clone();
        assert!(mesh.load_from_source("v 1 x 2\n").is_err());
        assert_eq!(mesh, before);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Mesh::from_file(dir.path().join("missing.obj")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn bounding_size_is_largest_axis_span() {
        let mesh = Mesh::parse("v -1 0 0\nv 2 0.5 0\nv 0 0 4\n").unwrap();
        assert_relative_eq!(mesh.bounding_size(), 4.0);
        assert_eq!(Mesh::empty().bounding_size(), 0.0);
    }

    #[test]
    fn normalize_scale_multiplies_every_vertex() {
        let mut mesh = Mesh::parse(QUAD).unwrap();
        assert_relative_eq!(mesh.bounding_size(), 1.0);
        mesh.normalize_scale(3.0);
        assert_eq!(mesh.vertices()[1], Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(mesh.vertices()[2], Vec3::new(3.0, 3.0, 0.0));
        assert_relative_eq!(mesh.bounding_size(), 3.0);
    }

    #[test]
    fn normalize_scale_skips_large_and_degenerate_meshes() {
        let mut empty = Mesh::empty();
        empty.normalize_scale(3.0);
        assert!(empty.is_empty());

        let mut point = Mesh::parse("v 5 5 5\n").unwrap();
        point.normalize_scale(3.0);
        assert_eq!(point.vertices()[0], Vec3::new(5.0, 5.0, 5.0));

        let mut big = Mesh::parse("v 0 0 0\nv 10 0 0\n").unwrap();
        big.normalize_scale(3.0);
        assert_eq!(big.vertices()[1], Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn clear_empties_both_tables() {
        let mut mesh = Mesh::parse(QUAD).unwrap();
        assert!(!mesh.is_empty());
        mesh.clear();
        assert!(mesh.is_empty());
        assert_eq!(mesh.summary().face_count, 0);
    }

    #[test]
    fn summary_label() {
        let summary = Mesh::parse(QUAD).unwrap().summary();
        assert_eq!(summary.to_string(), "Vertices: 4  Polygons: 1  Size: 1.00");
    }
}
