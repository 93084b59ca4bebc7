//! Marshalling boundary between the internal track state and persistency
//!
//! The external exchange record stores the five helix parameters in the
//! order (d₀, φ₀, Ω, z₀, tanλ) with lengths in millimeters, and the
//! covariance as the 15 entries of the lower triangle in that same order.
//! Internally the order is (Ω, tanλ, φ₀, d₀, z₀) and lengths are meters.
//! Conflating the two orders, or forgetting that each covariance entry
//! scales by the product of its two parameters' unit factors, is the single
//! most error-prone operation in the whole system, so the permutation and
//! the scaling are both driven by the two tables below and nothing else.

use crate::{
    linalg::{Matrix5, Vector3, Vector5, D0, OMEGA, PHI0, TAN_LAMBDA, Z0, TRACK_DIM},
    numeric::Float,
    track::TrackState,
    units::MM,
    Result,
};

use anyhow::ensure;
use num_traits::Zero;

/// Number of independent entries in the lower triangle of the covariance
pub const COV_DIM: usize = TRACK_DIM * (TRACK_DIM + 1) / 2;

/// External parameter order: position in the persisted record, mapped to the
/// internal parameter index
const EXTERNAL_ORDER: [usize; TRACK_DIM] = [D0, PHI0, OMEGA, Z0, TAN_LAMBDA];

/// External-to-internal unit factor, indexed by internal parameter index
///
/// Ω is per-millimeter on both sides of the boundary, φ₀ and tanλ are
/// unit-free, d₀ and z₀ convert from millimeters to meters.
const UNIT_SCALE: [Float; TRACK_DIM] = [1., 1., 1., MM, MM];

/// Internal (row, column) pair addressed by the k-th external lower-triangle
/// covariance entry
///
/// The external triangle is enumerated row by row: (0,0), (1,0), (1,1),
/// (2,0), ... in external parameter positions, which `EXTERNAL_ORDER` then
/// permutes into internal indices.
fn cov_slot(index: usize) -> (usize, usize) {
    debug_assert!(index < COV_DIM);
    let mut k = index;
    let mut row = 0;
    while k > row {
        k -= row + 1;
        row += 1;
    }
    (EXTERNAL_ORDER[row], EXTERNAL_ORDER[k])
}

/// Fixed-shape exchange record for one track state
///
/// Everything in here is in external conventions: millimeter lengths, the
/// (d₀, φ₀, Ω, z₀, tanλ) parameter order and the lower-triangle covariance
/// layout described at module level.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackStateRecord {
    /// Transverse impact parameter, in millimeters
    pub d0: Float,

    /// Azimuth of the transverse momentum at the reference point, in radians
    pub phi: Float,

    /// Signed curvature, in inverse millimeters
    pub omega: Float,

    /// Longitudinal impact parameter, in millimeters
    pub z0: Float,

    /// Dip angle tangent, dimensionless
    pub tan_lambda: Float,

    /// Lower triangle of the covariance, external order and units
    pub cov: [Float; COV_DIM],

    /// Reference point of the impact parameters, in millimeters
    pub reference_point: [Float; 3],
}
//
impl TrackStateRecord {
    /// Assemble a record from raw buffers, validating every length
    ///
    /// Persistency backends hand over plain slices; a wrong-length slice is
    /// reported as an error rather than silently truncated or read past.
    pub fn from_buffers(
        parameters: &[Float],
        cov: &[Float],
        reference_point: &[Float],
    ) -> Result<Self> {
        ensure!(
            parameters.len() == TRACK_DIM,
            "expected {} track parameters, got {}",
            TRACK_DIM,
            parameters.len()
        );
        ensure!(
            cov.len() == COV_DIM,
            "expected {} covariance entries, got {}",
            COV_DIM,
            cov.len()
        );
        ensure!(
            reference_point.len() == 3,
            "expected a 3-component reference point, got {} components",
            reference_point.len()
        );

        let mut record = Self {
            d0: parameters[0],
            phi: parameters[1],
            omega: parameters[2],
            z0: parameters[3],
            tan_lambda: parameters[4],
            ..Self::default()
        };
        record.cov.copy_from_slice(cov);
        record.reference_point.copy_from_slice(reference_point);
        Ok(record)
    }

    /// Read a parameter by its external position
    fn parameter(&self, external: usize) -> Float {
        match external {
            0 => self.d0,
            1 => self.phi,
            2 => self.omega,
            3 => self.z0,
            4 => self.tan_lambda,
            _ => unreachable!("external parameter position out of range"),
        }
    }

    /// Write a parameter by its external position
    fn parameter_mut(&mut self, external: usize) -> &mut Float {
        match external {
            0 => &mut self.d0,
            1 => &mut self.phi,
            2 => &mut self.omega,
            3 => &mut self.z0,
            4 => &mut self.tan_lambda,
            _ => unreachable!("external parameter position out of range"),
        }
    }
}

/// Translate an external record into the internal track state
pub fn decode(record: &TrackStateRecord) -> TrackState {
    let mut parameters = Vector5::zero();
    for (external, &internal) in EXTERNAL_ORDER.iter().enumerate() {
        parameters[internal] = record.parameter(external) * UNIT_SCALE[internal];
    }

    let mut covariance = Matrix5::zero();
    for (index, &value) in record.cov.iter().enumerate() {
        let (row, col) = cov_slot(index);
        let scaled = value * UNIT_SCALE[row] * UNIT_SCALE[col];
        covariance[(row, col)] = scaled;
        covariance[(col, row)] = scaled;
    }

    let reference_point = Vector3::new(
        record.reference_point[0] * MM,
        record.reference_point[1] * MM,
        record.reference_point[2] * MM,
    );

    TrackState::new(parameters, covariance, reference_point)
}

/// Translate the internal track state into an external record
pub fn encode(state: &TrackState) -> TrackStateRecord {
    let mut record = TrackStateRecord::default();

    for (external, &internal) in EXTERNAL_ORDER.iter().enumerate() {
        *record.parameter_mut(external) = state.parameters()[internal] / UNIT_SCALE[internal];
    }

    for (index, entry) in record.cov.iter_mut().enumerate() {
        let (row, col) = cov_slot(index);
        *entry = state.covariance()[(row, col)] / (UNIT_SCALE[row] * UNIT_SCALE[col]);
    }

    let reference = state.reference_point();
    record.reference_point = [reference.x / MM, reference.y / MM, reference.z / MM];

    record
}
