//! Fixmesh binary asset format
//!
//! POD format with no magic bytes. Consumers know the layout from context.
//! Format constants (output name, precision) live in [`crate::MeshFormat`];
//! use [`crate::FIXMESH_FORMAT`] for all of them.

pub mod mesh;

pub use mesh::*;
