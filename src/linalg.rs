//! Shared linear algebra concepts for the five-parameter track state
//!
//! The helix parametrization is always exactly five-dimensional, so every
//! vector and matrix type in this crate has its size known at compile time.
//! We lean on nalgebra's statically-sized types rather than rolling our own
//! or paying for a dynamically-sized linear algebra library in the innermost
//! per-track, per-surface loop of a fit.

use crate::numeric::Float;
use nalgebra::{SMatrix, SVector};

/// Number of helix track parameters
pub const TRACK_DIM: usize = 5;

/// Track parameter vector (and parameter-residual vector)
pub type Vector5 = SVector<Float, TRACK_DIM>;

/// Track parameter covariance or propagation Jacobian
///
/// Covariances are symmetric by caller discipline; the type itself is a
/// general dense matrix so that it can also carry (non-symmetric) transport
/// Jacobians.
pub type Matrix5 = SMatrix<Float, TRACK_DIM, TRACK_DIM>;

/// 2D point in a surface's local (u, v) frame or in the transverse plane
pub type Vector2 = nalgebra::Vector2<Float>;

/// 3D point in the global frame
pub type Vector3 = nalgebra::Vector3<Float>;

/// Convenience const for the signed curvature Ω slot (inverse millimeters)
pub const OMEGA: usize = 0;

/// Convenience const for the dip angle tangent tanλ slot (dimensionless)
pub const TAN_LAMBDA: usize = 1;

/// Convenience const for the azimuth φ₀ slot (radians)
pub const PHI0: usize = 2;

/// Convenience const for the transverse impact parameter d₀ slot (meters)
pub const D0: usize = 3;

/// Convenience const for the longitudinal impact parameter z₀ slot (meters)
pub const Z0: usize = 4;

/// Build a parameter vector from a buffer holding exactly five values
///
/// Panics if the buffer length is anything but five: a wrong-length buffer
/// is a caller bug, and truncating or zero-padding it would silently corrupt
/// the track state.
pub fn vector5_from_slice(coords: &[Float]) -> Vector5 {
    assert_eq!(
        coords.len(),
        TRACK_DIM,
        "expected exactly {} track parameters, got {}",
        TRACK_DIM,
        coords.len()
    );
    Vector5::from_column_slice(coords)
}

/// Build a 5×5 matrix from a row-major buffer holding exactly 25 values
///
/// Same fail-fast policy as [`vector5_from_slice`].
pub fn matrix5_from_row_slice(entries: &[Float]) -> Matrix5 {
    assert_eq!(
        entries.len(),
        TRACK_DIM * TRACK_DIM,
        "expected exactly {} matrix entries, got {}",
        TRACK_DIM * TRACK_DIM,
        entries.len()
    );
    Matrix5::from_row_slice(entries)
}
