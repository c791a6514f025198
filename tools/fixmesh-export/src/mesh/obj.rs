//! OBJ mesh conversion
//!
//! Only two record kinds matter: `v x y z` and `f a b c d`. Everything else
//! (comments, normals, UVs, groups, materials) is skipped.

use fixmesh_common::{expected_size, swap_yz};
use glam::DVec3;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::types::{Face, Mesh};
use crate::error::{ExportError, ParseError, RecordKind};
use crate::formats::{verify_byte_count, write_fixed_mesh};
use crate::report::Console;

/// One classified OBJ line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Record {
    /// Vertex position, already remapped to the target axis convention
    Vertex(DVec3),
    /// Four 1-based vertex references, not yet range-checked
    Face([i64; 4]),
    /// Any other record kind
    Ignored,
}

/// Classify a single OBJ line
///
/// A vertex record starts with exactly `v ` and a face record with exactly `f `;
/// `vt`, `vn`, indented records and everything else are [`Record::Ignored`].
/// `line_no` is only used for error reporting.
pub fn classify_line(line: &str, line_no: usize) -> Result<Record, ParseError> {
    if let Some(rest) = line.strip_prefix("v ") {
        let fields: Vec<&str> = rest.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(ParseError::MissingFields {
                line: line_no,
                record: RecordKind::Vertex,
                found: fields.len(),
                expected: 3,
            });
        }

        // Extra fields (vertex colors) are ignored
        let x = parse_coordinate(fields[0], line_no)?;
        let y = parse_coordinate(fields[1], line_no)?;
        let z = parse_coordinate(fields[2], line_no)?;
        return Ok(Record::Vertex(swap_yz(DVec3::new(x, y, z))));
    }

    if let Some(rest) = line.strip_prefix("f ") {
        let fields: Vec<&str> = rest.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(ParseError::MissingFields {
                line: line_no,
                record: RecordKind::Face,
                found: fields.len(),
                expected: 4,
            });
        }
        if fields.len() > 4 {
            return Err(ParseError::UnsupportedFaceArity {
                line: line_no,
                found: fields.len(),
            });
        }

        let mut refs = [0i64; 4];
        for (slot, field) in refs.iter_mut().zip(&fields) {
            *slot = parse_vertex_ref(field, line_no)?;
        }
        return Ok(Record::Face(refs));
    }

    Ok(Record::Ignored)
}

/// Parse OBJ text into a mesh
pub fn parse_obj_str(source: &str) -> Result<Mesh, ParseError> {
    parse_obj_reader(source.as_bytes())
}

/// Parse an OBJ file into a mesh
pub fn parse_obj_file(input: &Path) -> Result<Mesh, ParseError> {
    let file = File::open(input).map_err(|source| ParseError::Open {
        path: input.to_path_buf(),
        source,
    })?;
    parse_obj_reader(BufReader::new(file))
}

fn parse_obj_reader<R: BufRead>(reader: R) -> Result<Mesh, ParseError> {
    let mut vertices: Vec<DVec3> = Vec::new();
    // (line number, 1-based references); resolved once the vertex count is known
    let mut face_refs: Vec<(usize, [i64; 4])> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        match classify_line(&line, i + 1)? {
            Record::Vertex(position) => vertices.push(position),
            Record::Face(refs) => face_refs.push((i + 1, refs)),
            Record::Ignored => {}
        }
    }

    let faces = face_refs
        .into_iter()
        .map(|(line, refs)| resolve_face(line, refs, vertices.len()))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        "Parsed OBJ: {} vertices, {} faces",
        vertices.len(),
        faces.len()
    );

    Ok(Mesh::new(vertices, faces))
}

/// Convert 1-based references to zero-based indices, rejecting anything outside `[1, V]`
fn resolve_face(line: usize, refs: [i64; 4], vertex_count: usize) -> Result<Face, ParseError> {
    let mut indices = [0u32; 4];
    for (slot, &index) in indices.iter_mut().zip(&refs) {
        let in_range = index >= 1 && (index as u64) <= vertex_count as u64;
        *slot = in_range
            .then(|| u32::try_from(index - 1).ok())
            .flatten()
            .ok_or(ParseError::IndexOutOfRange {
                line,
                index,
                vertex_count,
            })?;
    }
    Ok(Face::new(indices))
}

fn parse_coordinate(text: &str, line: usize) -> Result<f64, ParseError> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            line,
            text: text.to_string(),
        })
}

/// Parse OBJ vertex reference: "v", "v/vt", "v/vt/vn", or "v//vn" (position only)
fn parse_vertex_ref(text: &str, line: usize) -> Result<i64, ParseError> {
    let position = text.split('/').next().unwrap_or(text);
    position
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidNumber {
            line,
            text: text.to_string(),
        })
}

/// Convert an OBJ file to the fixmesh binary format
///
/// Prints progress to `console` as it goes. Returns the number of bytes written.
/// A mesh without faces is rejected before `output` is touched. On a byte count
/// mismatch the invalid file is left in place.
pub fn convert_obj<C: Write>(
    input: &Path,
    output: &Path,
    console: &mut Console<C>,
) -> Result<u64, ExportError> {
    console.working_file(input)?;

    let mesh = parse_obj_file(input)?;
    console.counts(mesh.vertex_count(), mesh.face_count())?;

    if mesh.face_count() == 0 {
        return Err(ExportError::NoPolygons);
    }

    let written = {
        let file = File::create(output).map_err(|source| ExportError::Create {
            path: output.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        let written = write_fixed_mesh(&mut writer, &mesh, console)?;
        writer.flush()?;
        written
    };

    console.bytes_written(written)?;
    debug_assert_eq!(
        written,
        expected_size(mesh.vertex_count(), mesh.face_count()),
        "writer layout disagrees with expected_size"
    );
    verify_byte_count(&mesh, written)?;

    tracing::info!(
        "Converted OBJ mesh: {} vertices, {} polygons, {} bytes -> {:?}",
        mesh.vertex_count(),
        mesh.face_count(),
        expected_size(mesh.vertex_count(), mesh.face_count()),
        output
    );

    Ok(written)
}
