//! Fixed unit conventions for exchange with the outside world
//!
//! The internal working unit for lengths is the meter; angles are in radians
//! and tanλ is dimensionless. The signed curvature Ω is the one deliberate
//! asymmetry: it stays in inverse millimeters both internally and in the
//! external persisted representation, inherited from the external curvature
//! convention.
//!
//! Converting from curvature in mm⁻¹ to inverse momentum in GeV⁻¹ needs a
//! magnetic field in Tesla and a speed of light in m/s; that conversion lives
//! with the propagation layer, not here.

use crate::numeric::Float;

/// Meter, the internal working unit for lengths
pub const M: Float = 1.0;

/// Centimeter, expressed in the internal length unit
pub const CM: Float = 1e-2;

/// Millimeter, expressed in the internal length unit
pub const MM: Float = 1e-3;

/// Micrometer, expressed in the internal length unit
pub const MUM: Float = 1e-6;
