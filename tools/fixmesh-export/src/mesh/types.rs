//! Types for mesh conversion

use glam::DVec3;

/// Quadrilateral face: four zero-based vertex indices in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face([u32; 4]);

impl Face {
    pub(crate) fn new(indices: [u32; 4]) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> [u32; 4] {
        self.0
    }
}

/// Parsed quad mesh
///
/// Vertices are already in the target axis convention. Every face index
/// is below `vertices().len()`; the parser guarantees it. The mesh is
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    faces: Vec<Face>,
}

impl Mesh {
    pub(crate) fn new(vertices: Vec<DVec3>, faces: Vec<Face>) -> Self {
        debug_assert!(
            faces
                .iter()
                .flat_map(|f| f.indices())
                .all(|i| (i as usize) < vertices.len())
        );
        Self { vertices, faces }
    }

    pub fn vertices(&self) -> &[DVec3] {
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
}
