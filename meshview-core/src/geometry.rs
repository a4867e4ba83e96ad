//! Geometry primitives for mesh rendering.

use nalgebra::Point3;

use crate::loader::MeshError;

/// A triangular face as three zero-based vertex indices.
pub type Face = [usize; 3];

/// An indexed triangle mesh: vertex positions plus face index triples.
///
/// Immutable once built. Construction validates every face index against
/// the vertex count, so the draw loop can index vertices without bounds
/// faults.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Point3<f32>>,
    faces: Vec<Face>,
}

impl Mesh {
    pub fn new(vertices: Vec<Point3<f32>>, faces: Vec<Face>) -> Result<Self, MeshError> {
        for (face, indices) in faces.iter().enumerate() {
            for &index in indices {
                if index >= vertices.len() {
                    return Err(MeshError::IndexOutOfRange {
                        face,
                        index,
                        vertex_count: vertices.len(),
                    });
                }
            }
        }
        Ok(Self { vertices, faces })
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
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

    /// Create a simple cube mesh for testing and as the fallback model.
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let vertices = vec![
            Point3::new(-half, -half, -half),
            Point3::new(half, -half, -half),
            Point3::new(half, half, -half),
            Point3::new(-half, half, -half),
            Point3::new(-half, -half, half),
            Point3::new(half, -half, half),
            Point3::new(half, half, half),
            Point3::new(-half, half, half),
        ];
        let faces = vec![
            // Front face
            [4, 5, 6],
            [4, 6, 7],
            // Back face
            [0, 3, 2],
            [0, 2, 1],
            // Top face
            [3, 7, 6],
            [3, 6, 2],
            // Bottom face
            [0, 1, 5],
            [0, 5, 4],
            // Right face
            [1, 2, 6],
            [1, 6, 5],
            // Left face
            [0, 4, 7],
            [0, 7, 3],
        ];
        Self::new(vertices, faces).expect("cube indices are in range")
    }
}
