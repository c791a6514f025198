//! Fixed-point quad mesh binary format (`obj_data`)
//!
//! Layout consumed by fixed-point playback hardware.
//! POD format - no magic bytes. Every field is a big-endian i32.
//!
//! # Layout
//! ```text
//! 0x00: vertex_count i32
//! 0x04: polygon_count i32
//! 0x08: vertex table (vertex_count * 12 bytes: x, y, z in 16.16 fixed point)
//! var:  face table (polygon_count * 16 bytes: 4 zero-based vertex indices)
//! ```
//!
//! For the fixed-point conversion itself, see [`crate::packing`].

use crate::FIXMESH_FORMAT;

/// Size of one vertex record in bytes (3 × i32 = 12)
pub const VERTEX_RECORD_SIZE: usize = FIXMESH_FORMAT.vertex_record_size();

/// Size of one face record in bytes (4 × i32 = 16)
pub const FACE_RECORD_SIZE: usize = FIXMESH_FORMAT.face_record_size();

/// Fixed mesh header (8 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMeshHeader {
    /// Number of entries in the vertex table
    pub vertex_count: i32,
    /// Number of entries in the face table
    pub polygon_count: i32,
}

impl FixedMeshHeader {
    pub const SIZE: usize = 8;

    pub fn new(vertex_count: i32, polygon_count: i32) -> Self {
        Self {
            vertex_count,
            polygon_count,
        }
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.vertex_count.to_be_bytes());
        bytes[4..8].copy_from_slice(&self.polygon_count.to_be_bytes());
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            vertex_count: i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            polygon_count: i32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        })
    }
}

/// Exact artifact size for a mesh: `8 + 12V + 16F`
pub const fn expected_size(vertex_count: usize, face_count: usize) -> u64 {
    FixedMeshHeader::SIZE as u64
        + vertex_count as u64 * VERTEX_RECORD_SIZE as u64
        + face_count as u64 * FACE_RECORD_SIZE as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_big_endian() {
        let header = FixedMeshHeader::new(2, 1);
        assert_eq!(header.to_bytes(), [0, 0, 0, 2, 0, 0, 0, 1]);
    }

    #[test]
    fn test_header_roundtrip() {
        let header = FixedMeshHeader::new(0x0102_0304, 7);
        let parsed = FixedMeshHeader::from_bytes(&header.to_bytes()).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_header_from_short_bytes() {
        let short_bytes = [0u8; 4];
        assert!(FixedMeshHeader::from_bytes(&short_bytes).is_none());
    }

    #[test]
    fn test_record_sizes() {
        assert_eq!(FixedMeshHeader::SIZE, 8);
        assert_eq!(VERTEX_RECORD_SIZE, 12);
        assert_eq!(FACE_RECORD_SIZE, 16);
    }

    #[test]
    fn test_expected_size() {
        assert_eq!(expected_size(0, 0), 8);
        assert_eq!(expected_size(2, 1), 48);
        assert_eq!(expected_size(8, 6), 8 + 96 + 96);
    }

    #[test]
    fn test_expected_size_does_not_overflow_usize_products() {
        let v = u32::MAX as usize;
        assert_eq!(expected_size(v, 0), 8 + 12 * u32::MAX as u64);
    }
}
