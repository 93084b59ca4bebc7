//! Carrier of the five-parameter helix state and its uncertainty
//!
//! The L3 parametrization [Ω, tanλ, φ₀, d₀, z₀] describes a charged
//! particle's trajectory in a uniform field along z. This module bundles the
//! parameter vector with its 5×5 covariance and the reference point the
//! impact parameters are measured against, and derives the planar
//! projections that the intersection engine consumes.

use crate::{
    linalg::{Matrix5, Vector2, Vector3, Vector5, D0, OMEGA, PHI0, TAN_LAMBDA, Z0},
    numeric::Float,
    planar::{Circle, StraightLine},
    units::MM,
};

use prefix_num_ops::real::*;

use std::fmt;

/// Five-parameter helix state with covariance and reference point
///
/// The covariance is symmetric by caller discipline; nothing here enforces
/// it structurally, so the same storage can carry transport Jacobians.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackState {
    /// Helix parameters in the internal order [Ω, tanλ, φ₀, d₀, z₀]
    parameters: Vector5,

    /// Covariance of the helix parameters
    covariance: Matrix5,

    /// Reference point of the impact parameters, in meters
    reference_point: Vector3,
}
//
impl TrackState {
    /// Bundle parameters, covariance and reference point into a state
    pub fn new(parameters: Vector5, covariance: Matrix5, reference_point: Vector3) -> Self {
        Self {
            parameters,
            covariance,
            reference_point,
        }
    }

    /// Access the parameter vector
    pub fn parameters(&self) -> &Vector5 {
        &self.parameters
    }

    /// Access the covariance matrix
    pub fn covariance(&self) -> &Matrix5 {
        &self.covariance
    }

    /// Access the reference point
    pub fn reference_point(&self) -> &Vector3 {
        &self.reference_point
    }

    /// Replace parameters, covariance and reference point at once
    pub fn set(&mut self, parameters: Vector5, covariance: Matrix5, reference_point: Vector3) {
        self.parameters = parameters;
        self.covariance = covariance;
        self.reference_point = reference_point;
    }

    /// Signed curvature Ω, in inverse millimeters
    pub fn omega(&self) -> Float {
        self.parameters[OMEGA]
    }

    /// Dip angle tangent tanλ
    pub fn tan_lambda(&self) -> Float {
        self.parameters[TAN_LAMBDA]
    }

    /// Azimuth φ₀ of the transverse momentum at the reference point
    pub fn phi0(&self) -> Float {
        self.parameters[PHI0]
    }

    /// Transverse impact parameter d₀, in meters
    pub fn d0(&self) -> Float {
        self.parameters[D0]
    }

    /// Longitudinal impact parameter z₀, in meters
    pub fn z0(&self) -> Float {
        self.parameters[Z0]
    }

    /// The transverse-plane circular projection of the helix
    ///
    /// Both d₀ and the signed bending radius 1/ω (with ω = Ω/mm the
    /// curvature in inverse meters) are measured along the normal
    /// (-sin φ₀, cos φ₀) to the transverse momentum, so the circle center
    /// sits at `reference + (d₀ + 1/ω)·(-sin φ₀, cos φ₀)`.
    ///
    /// Panics for a straight track (Ω = 0), which has no circular
    /// projection; callers must branch on the curvature first.
    pub fn transverse_circle(&self) -> Circle {
        let curvature = self.omega() / MM;
        assert!(
            curvature != 0.,
            "a straight track has no transverse circular projection"
        );
        let normal = Vector2::new(-sin(self.phi0()), cos(self.phi0()));
        let center = self.reference_point.xy() + (self.d0() + 1. / curvature) * normal;
        Circle::new(center.x, center.y, abs(1. / curvature))
    }

    /// The longitudinal straight-line projection z = z₀ + tanλ·s
    ///
    /// Expressed in normal form over the (s, z) plane, where s is the arc
    /// length along the transverse projection.
    pub fn longitudinal_line(&self) -> StraightLine {
        StraightLine::new(self.tan_lambda(), -1., -self.z0())
    }
}

impl Default for TrackState {
    /// All-zero state: a straight track through the origin
    fn default() -> Self {
        Self::new(Vector5::zeros(), Matrix5::zeros(), Vector3::zeros())
    }
}

impl fmt::Display for TrackState {
    /// Dump the five helix parameters
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            fmt,
            " {{{} , {} , {} , {} , {}}} ",
            self.omega(),
            self.tan_lambda(),
            self.phi0(),
            self.d0(),
            self.z0()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn example_state() -> TrackState {
        // Ω = 1e-3 mm⁻¹ is a 1 m bending radius
        let parameters = Vector5::new(1e-3, 0.5, 0., 0.1, -0.2);
        TrackState::new(parameters, Matrix5::identity(), Vector3::zeros())
    }

    #[test]
    fn named_accessors_match_the_internal_slots() {
        let state = example_state();
        assert_eq!(state.omega(), 1e-3);
        assert_eq!(state.tan_lambda(), 0.5);
        assert_eq!(state.phi0(), 0.);
        assert_eq!(state.d0(), 0.1);
        assert_eq!(state.z0(), -0.2);
    }

    #[test]
    fn transverse_circle_has_the_bending_radius() {
        let state = example_state();
        let circle = state.transverse_circle();
        assert_relative_eq!(circle.radius(), 1., epsilon = 1e-12);
        // φ₀ = 0 puts the center along +y, past the point of closest approach
        assert_relative_eq!(circle.center(), Vector2::new(0., 1.1), epsilon = 1e-12);

        // The point of closest approach lies on the circle
        let pca = Vector2::new(0., state.d0());
        assert_abs_diff_eq!(
            (pca - circle.center()).norm(),
            circle.radius(),
            epsilon = 1e-12
        );
    }

    #[test]
    #[should_panic(expected = "straight track")]
    fn straight_tracks_have_no_transverse_circle() {
        let state = TrackState::default();
        state.transverse_circle();
    }

    #[test]
    fn longitudinal_line_reproduces_the_dip() {
        let state = example_state();
        let line = state.longitudinal_line();
        // Any (s, z₀ + tanλ·s) point satisfies the normal form n·x = d
        for s in [0., 0.5, -2.] {
            let z = state.z0() + state.tan_lambda() * s;
            let point = Vector2::new(s, z);
            assert_abs_diff_eq!(line.normal().dot(&point), line.distance(), epsilon = 1e-12);
        }
    }

    #[test]
    fn display_lists_the_five_parameters() {
        let state = example_state();
        assert_eq!(format!("{}", state), " {0.001 , 0.5 , 0 , 0.1 , -0.2} ");
    }
}
