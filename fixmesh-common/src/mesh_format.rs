//! Mesh format definition
//!
//! This module defines the `MeshFormat` struct which serves as the single source of truth
//! for all artifact-related constants (output name, fixed-point precision, record sizes).
//!
//! # Example
//!
//! ```
//! use fixmesh_common::FIXMESH_FORMAT;
//!
//! // The exporter always writes to this name in the working directory
//! assert_eq!(FIXMESH_FORMAT.output_name, "obj_data");
//!
//! // 16.16 fixed point
//! assert_eq!(FIXMESH_FORMAT.frac_bits, 16);
//! ```

/// Binary mesh format specification.
///
/// Every field in the artifact is a signed big-endian integer of `word_size` bytes.
#[derive(Debug, Clone, Copy)]
pub struct MeshFormat {
    /// File name of the exported artifact (written to the working directory)
    pub output_name: &'static str,

    /// Number of fractional bits in a fixed-point coordinate
    pub frac_bits: u32,

    /// Size in bytes of every integer field
    pub word_size: usize,

    /// Number of coordinates stored per vertex
    pub coords_per_vertex: usize,

    /// Number of vertex indices stored per face (quads only)
    pub indices_per_face: usize,
}

impl MeshFormat {
    /// Create a new mesh format specification.
    pub const fn new(
        output_name: &'static str,
        frac_bits: u32,
        word_size: usize,
        coords_per_vertex: usize,
        indices_per_face: usize,
    ) -> Self {
        Self {
            output_name,
            frac_bits,
            word_size,
            coords_per_vertex,
            indices_per_face,
        }
    }

    /// Bytes occupied by one vertex in the vertex table
    pub const fn vertex_record_size(&self) -> usize {
        self.word_size * self.coords_per_vertex
    }

    /// Bytes occupied by one face in the face table
    pub const fn face_record_size(&self) -> usize {
        self.word_size * self.indices_per_face
    }

    /// Scale factor between a real coordinate and its fixed-point integer
    pub const fn fixed_one(&self) -> i64 {
        1 << self.frac_bits
    }
}

/// Fixed-point quad mesh format.
///
/// - Output artifact: `obj_data`
/// - Coordinates: 16.16 signed fixed point
/// - Fields: 4-byte big-endian two's complement
/// - Faces: exactly four vertex indices
pub const FIXMESH_FORMAT: MeshFormat = MeshFormat::new("obj_data", 16, 4, 3, 4);
