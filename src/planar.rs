//! Planar projections of a helix and of local surface constraints
//!
//! In a uniform magnetic field along z, a helix projects to a circle in the
//! transverse plane and to a straight line along the field direction. Surface
//! cross-sections project to the same two shapes, so the whole intersection
//! problem reduces to pairs of circles and lines in a plane.

use crate::{
    linalg::Vector2,
    numeric::{functions::sqr, Float},
};

/// Circle in the plane, center plus strictly positive radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// Center of the circle
    center: Vector2,

    /// Radius of the circle, always strictly positive
    radius: Float,
}
//
impl Circle {
    /// Build a circle from its center coordinates and radius
    ///
    /// Panics on a non-positive radius: a degenerate circle cannot arise
    /// from a valid helix state and is a caller bug.
    pub fn new(c0: Float, c1: Float, r: Float) -> Self {
        assert!(r > 0., "circle radius must be strictly positive, got {}", r);
        Self {
            center: Vector2::new(c0, c1),
            radius: r,
        }
    }

    /// Center of the circle
    pub fn center(&self) -> Vector2 {
        self.center
    }

    /// Radius of the circle
    pub fn radius(&self) -> Float {
        self.radius
    }

    /// Squared radius of the circle
    pub fn r2(&self) -> Float {
        sqr(self.radius)
    }
}

/// Straight line in the plane, in normal form `n·x = d`
///
/// The normal need not be a unit vector; consumers that require one must
/// rescale by `normal_square()` themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StraightLine {
    /// Normal direction of the line (not necessarily unit length)
    normal: Vector2,

    /// Signed distance from the origin along the normal
    distance: Float,
}
//
impl StraightLine {
    /// Build a line from its normal components and signed distance
    pub fn new(n0: Float, n1: Float, d: Float) -> Self {
        Self {
            normal: Vector2::new(n0, n1),
            distance: d,
        }
    }

    /// Normal direction of the line
    pub fn normal(&self) -> Vector2 {
        self.normal
    }

    /// Signed distance of the line from the origin along the normal
    pub fn distance(&self) -> Float {
        self.distance
    }

    /// Squared distance of the line from the origin
    pub fn d2(&self) -> Float {
        sqr(self.distance)
    }

    /// Squared length of the normal vector
    pub fn normal_square(&self) -> Float {
        self.normal.norm_squared()
    }

    /// Re-express the line relative to an origin translated by `offset`
    ///
    /// The normal is unchanged; the signed distance loses the projection of
    /// the offset onto the normal.
    pub fn shift(&mut self, offset: Vector2) {
        self.distance -= self.normal.dot(&offset);
    }
}
