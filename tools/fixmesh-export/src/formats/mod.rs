//! Binary writer for the fixmesh artifact
//!
//! The layout itself is defined in `fixmesh_common::formats`.

mod counting;

pub use counting::CountingWriter;

use fixmesh_common::{FixedMeshHeader, expected_size, fits_fixed16, pack_position_fixed16};
use std::io::Write;

use crate::error::ExportError;
use crate::mesh::Mesh;
use crate::report::Console;

/// Write a complete fixmesh artifact
///
/// Emits the header, the vertex table and the face table, echoing every
/// vertex and face to `console`. Returns the number of bytes the writer
/// accepted; compare it with [`verify_byte_count`] once the output is closed.
pub fn write_fixed_mesh<W: Write, C: Write>(
    w: &mut W,
    mesh: &Mesh,
    console: &mut Console<C>,
) -> Result<u64, ExportError> {
    let vertex_count = count_to_i32("vertices", mesh.vertex_count())?;
    let polygon_count = count_to_i32("polygons", mesh.face_count())?;

    let mut out = CountingWriter::new(w);

    let header = FixedMeshHeader::new(vertex_count, polygon_count);
    out.write_all(&header.to_bytes())?;

    console.heading("Verts")?;
    for &vertex in mesh.vertices() {
        console.vertex(vertex)?;
        if let Some(value) = vertex.to_array().into_iter().find(|&v| !fits_fixed16(v)) {
            return Err(ExportError::FixedPointOverflow { value });
        }
        for word in pack_position_fixed16(vertex) {
            out.write_all(&word.to_be_bytes())?;
        }
    }

    console.heading("Faces")?;
    for face in mesh.faces() {
        let indices = face.indices();
        console.face(indices)?;
        for index in indices {
            // index < vertex_count, which fits in i32
            out.write_all(&(index as i32).to_be_bytes())?;
        }
    }

    Ok(out.bytes_written())
}

/// Compare a byte count against the size the layout predicts for `mesh`
pub fn verify_byte_count(mesh: &Mesh, written: u64) -> Result<(), ExportError> {
    let expected = expected_size(mesh.vertex_count(), mesh.face_count());
    if written != expected {
        return Err(ExportError::ByteCountMismatch { written, expected });
    }
    Ok(())
}

fn count_to_i32(what: &'static str, count: usize) -> Result<i32, ExportError> {
    i32::try_from(count).map_err(|_| ExportError::CountOverflow { what, count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::parse_obj_str;

    fn words(bytes: &[u8]) -> Vec<i32> {
        bytes
            .chunks_exact(4)
            .map(|c| i32::from_be_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    fn encode(source: &str) -> (Vec<u8>, String) {
        let mesh = parse_obj_str(source).unwrap();
        let mut out = Vec::new();
        let mut console = Console::new(Vec::new());
        let written = write_fixed_mesh(&mut out, &mesh, &mut console).unwrap();
        assert_eq!(written, out.len() as u64);
        verify_byte_count(&mesh, written).unwrap();
        (out, String::from_utf8(console.into_inner()).unwrap())
    }

    #[test]
    fn test_two_vertex_quad_layout() {
        let (bytes, _) = encode("v 0 0 0\nv 1 0 0\nf 1 1 2 2\n");
        assert_eq!(bytes.len(), 48);
        assert_eq!(
            words(&bytes),
            vec![2, 1, 0, 0, 0, 65536, 0, 0, 0, 0, 1, 1]
        );
    }

    #[test]
    fn test_axis_swap_reaches_the_vertex_table() {
        let (bytes, _) = encode("v 1.0 2.0 3.0\nf 1 1 1 1\n");
        assert_eq!(&words(&bytes)[2..5], &[65536, 3 * 65536, 2 * 65536]);
    }

    #[test]
    fn test_fixed_point_words() {
        let (bytes, _) = encode("v 1.5 -1.0 0.1\nf 1 1 1 1\n");
        // y and z are swapped: (1.5, 0.1, -1.0)
        assert_eq!(&words(&bytes)[2..5], &[98304, 6553, -65536]);
        assert_eq!(&bytes[8..12], &[0x00, 0x01, 0x80, 0x00]);
        assert_eq!(&bytes[16..20], &[0xFF, 0xFF, 0x00, 0x00]);
    }

    #[test]
    fn test_size_matches_layout_for_cube() {
        let source = "\
v 1 1 -1
v 1 -1 -1
v 1 1 1
v 1 -1 1
v -1 1 -1
v -1 -1 -1
v -1 1 1
v -1 -1 1
f 1 5 7 3
f 4 3 7 8
f 8 7 5 6
f 6 2 4 8
f 2 1 3 4
f 6 5 1 2
";
        let (bytes, _) = encode(source);
        assert_eq!(bytes.len() as u64, expected_size(8, 6));
        assert!(words(&bytes)[2 + 24..].iter().all(|&i| (0..8).contains(&i)));
    }

    #[test]
    fn test_console_echo() {
        let (_, text) = encode("v 0.5 0 -2\nv 1 0 0\nf 1 2 2 1\n");
        assert_eq!(
            text,
            "Verts\n0.5 -2.0 0.0\n1.0 0.0 0.0\nFaces\n0 1 1 0 \n"
        );
    }

    #[test]
    fn test_overflowing_coordinate_is_rejected() {
        let mesh = parse_obj_str("v 40000 0 0\nf 1 1 1 1\n").unwrap();
        let mut out = Vec::new();
        let mut console = Console::new(Vec::new());
        let err = write_fixed_mesh(&mut out, &mesh, &mut console).unwrap_err();
        assert!(matches!(err, ExportError::FixedPointOverflow { value } if value == 40000.0));
        // Only the header made it out
        assert_eq!(out.len(), FixedMeshHeader::SIZE);
    }

    #[test]
    fn test_verify_byte_count_mismatch() {
        let mesh = parse_obj_str("v 0 0 0\nv 1 0 0\nf 1 1 2 2\n").unwrap();
        let err = verify_byte_count(&mesh, 40).unwrap_err();
        assert!(matches!(
            err,
            ExportError::ByteCountMismatch {
                written: 40,
                expected: 48
            }
        ));
    }
}
