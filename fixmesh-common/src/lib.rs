//! Shared types and utilities for fixmesh quad meshes
//!
//! This crate provides the pieces shared between the exporter and any
//! tooling that inspects its output:
//!
//! # Modules
//!
//! - [`mesh_format`] - Format constants (output name, fixed-point precision, record sizes)
//! - [`packing`] - Coordinate packing utilities (f64 → 16.16 fixed point, axis remap)
//! - [`formats`] - Big-endian binary layout of the mesh artifact

pub mod formats;
pub mod mesh_format;
pub mod packing;

pub use mesh_format::{FIXMESH_FORMAT, MeshFormat};

// Re-export commonly used packing items
pub use packing::{
    FRACBITS_16, f64_to_fixed16, fits_fixed16, pack_position_fixed16, swap_yz,
};

// Re-export commonly used format items
pub use formats::{FACE_RECORD_SIZE, FixedMeshHeader, VERTEX_RECORD_SIZE, expected_size};
