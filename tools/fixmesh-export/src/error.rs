//! Error types for OBJ parsing and fixmesh export

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which kind of OBJ record a parse error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Vertex,
    Face,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Vertex => f.write_str("vertex"),
            RecordKind::Face => f.write_str("face"),
        }
    }
}

/// Errors raised while reading an OBJ file into a [`crate::Mesh`]
///
/// Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: {record} record has {found} fields, expected {expected}")]
    MissingFields {
        line: usize,
        record: RecordKind,
        found: usize,
        expected: usize,
    },

    #[error("line {line}: invalid number {text:?}")]
    InvalidNumber { line: usize, text: String },

    #[error("line {line}: face has {found} vertex references, only quads are supported")]
    UnsupportedFaceArity { line: usize, found: usize },

    #[error("line {line}: face references vertex {index} but the file defines {vertex_count}")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        vertex_count: usize,
    },

    #[error("failed to open OBJ {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read OBJ: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised by the export pipeline
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("missing obj file path")]
    MissingInput,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("No polygons found in model file")]
    NoPolygons,

    #[error("mesh has {count} {what}, more than an i32 count can hold")]
    CountOverflow { what: &'static str, count: usize },

    #[error("coordinate {value} does not fit in 16.16 fixed point")]
    FixedPointOverflow { value: f64 },

    #[error("failed to create output {path:?}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Written and predicted sizes disagree. This is a layout bug, not bad input.
    #[error("Bytes written / expected mismatch {written} / {expected}")]
    ByteCountMismatch { written: u64, expected: u64 },

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}
