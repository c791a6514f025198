//! fixmesh-export library
//!
//! Converts OBJ quad meshes into the fixmesh fixed-point binary artifact.
//! Used by the `fixmesh-export` binary; exposed as a library so the
//! pipeline can be driven and tested without a process boundary.

pub mod error;
pub mod formats;
pub mod mesh;
pub mod report;

// Re-export format constants and packing from fixmesh-common
pub use fixmesh_common::{
    FIXMESH_FORMAT, FixedMeshHeader, MeshFormat, expected_size, f64_to_fixed16,
    pack_position_fixed16,
};

// Re-export key types for mesh conversion
pub use error::{ExportError, ParseError};
pub use formats::{CountingWriter, write_fixed_mesh};
pub use mesh::{Face, Mesh, Record, classify_line, convert_obj, parse_obj_file, parse_obj_str};
pub use report::Console;
