//! Coordinate packing utilities
//!
//! Provides functions to convert f64 vertex data to the hardware's fixed-point format:
//! - f64 → 16.16 signed fixed point (i32)
//! - source axis convention → target axis convention
//!
//! Face indices are never packed; they stay plain integers.

use glam::DVec3;

use crate::FIXMESH_FORMAT;

/// 2^16, the scale of one unit in 16.16 fixed point
pub const FRACBITS_16: f64 = FIXMESH_FORMAT.fixed_one() as f64;

// ============================================================================
// Fixed-Point Conversion
// ============================================================================

/// Convert f64 to 16.16 signed fixed point
///
/// Truncates toward zero rather than rounding, so `0.1` becomes `6553`
/// and `-0.1` becomes `-6553`. Values outside the representable range
/// saturate; check with [`fits_fixed16`] first when that matters.
#[inline]
pub fn f64_to_fixed16(value: f64) -> i32 {
    (value * FRACBITS_16) as i32
}

/// Whether `value` survives [`f64_to_fixed16`] without saturating
///
/// The representable range is `[-32768.0, 32768.0)`, give or take the
/// truncated fraction. NaN and infinities never fit.
#[inline]
pub fn fits_fixed16(value: f64) -> bool {
    let scaled = (value * FRACBITS_16).trunc();
    scaled.is_finite() && scaled >= i32::MIN as f64 && scaled <= i32::MAX as f64
}

// ============================================================================
// Position Packing
// ============================================================================

/// Pack a 3D position to three 16.16 fixed-point words (x, y, z)
#[inline]
pub fn pack_position_fixed16(position: DVec3) -> [i32; 3] {
    [
        f64_to_fixed16(position.x),
        f64_to_fixed16(position.y),
        f64_to_fixed16(position.z),
    ]
}

/// Exchange the Y and Z axes
///
/// Converts positions exported with forward +Y / up +Z into the
/// hardware's convention. X is untouched.
#[inline]
pub fn swap_yz(position: DVec3) -> DVec3 {
    DVec3::new(position.x, position.z, position.y)
}
