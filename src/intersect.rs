//! Analytic intersection solvers for the planar helix projections
//!
//! Three pure functions cover the configurations a trajectory propagation
//! needs: circle–circle (helix vs z-cylinder), circle–line (helix vs plane in
//! the bend plane) and line–line (longitudinal projections). Each returns an
//! ordered collection of 0, 1 or 2 points; degenerate configurations are
//! signalled purely through the point count, never through an error, because
//! a track that misses a detector layer is a routine outcome.

use crate::{
    linalg::Vector2,
    numeric::{functions::sqr, Float},
    planar::{Circle, StraightLine},
};

use prefix_num_ops::real::*;

/// Absolute tolerance for tangency and parallelism decisions
///
/// The working unit for lengths is the meter, and inputs originate from
/// finite-precision fit parameters, so exact comparisons would misclassify
/// near-tangent configurations.
pub const GEOM_TOLERANCE: Float = 1e-9;

/// Ordered, append-only collection of planar intersection points
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Intersections {
    /// The points, in the deterministic order the solver produced them
    points: Vec<Vector2>,
}
//
impl Intersections {
    /// Start an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of intersection points found
    pub fn number(&self) -> usize {
        self.points.len()
    }

    /// Append an intersection point
    pub fn add(&mut self, x: Float, y: Float) {
        self.points.push(Vector2::new(x, y));
    }

    /// Access a point by position, None when out of range
    pub fn get(&self, index: usize) -> Option<&Vector2> {
        self.points.get(index)
    }

    /// Iterate over the points in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Vector2> {
        self.points.iter()
    }
}

impl std::ops::Index<usize> for Intersections {
    type Output = Vector2;

    /// Positional access; indexing past `number()` is a caller bug and panics
    fn index(&self, index: usize) -> &Vector2 {
        &self.points[index]
    }
}

/// Intersect two circles via the radical-line construction
///
/// Returns 0 points when the circles are disjoint (outside each other or one
/// contained in the other) and when they are coincident: infinitely many
/// common points means no usable discrete crossing. Tangent circles yield
/// exactly one point. Otherwise the two crossings are reported with the one
/// on the left of the center-to-center direction (seen from the first
/// circle's center) first.
pub fn circle_circle(one: &Circle, two: &Circle) -> Intersections {
    let mut found = Intersections::new();

    let axis = two.center() - one.center();
    let dist = axis.norm();

    // Coincident circles: degenerate, no discrete crossing
    if dist <= GEOM_TOLERANCE && abs(one.radius() - two.radius()) <= GEOM_TOLERANCE {
        return found;
    }
    // Disjoint outside, or one circle fully inside the other
    if dist > one.radius() + two.radius() + GEOM_TOLERANCE {
        return found;
    }
    if dist < abs(one.radius() - two.radius()) - GEOM_TOLERANCE {
        return found;
    }

    // Foot of the radical line on the center-to-center axis
    let along = (sqr(dist) + one.r2() - two.r2()) / (2. * dist);
    let u_hat = axis / dist;
    let foot = one.center() + along * u_hat;

    // Half-chord length; a vanishing value means tangency
    let h2 = one.r2() - sqr(along);
    if h2 <= 0. {
        found.add(foot.x, foot.y);
        return found;
    }
    let h = sqrt(h2);
    if h <= GEOM_TOLERANCE {
        found.add(foot.x, foot.y);
        return found;
    }

    let v_hat = Vector2::new(-u_hat.y, u_hat.x);
    let first = foot + h * v_hat;
    let second = foot - h * v_hat;
    found.add(first.x, first.y);
    found.add(second.x, second.y);
    found
}

/// Intersect a circle with a straight line in normal form
///
/// The line's normal is rescaled to unit length internally, so callers may
/// hand in any normal-form representation. A center-to-line distance beyond
/// the radius yields 0 points, equality within tolerance the single tangency
/// point, and otherwise the two crossings with the one on the left of the
/// unit normal first.
pub fn circle_line(circle: &Circle, line: &StraightLine) -> Intersections {
    let mut found = Intersections::new();

    let scale = sqrt(line.normal_square());
    let n_hat = line.normal() / scale;
    let d = line.distance() / scale;

    // Signed offset from the circle center to the line, along the unit normal
    let offset = d - n_hat.dot(&circle.center());
    if abs(offset) > circle.radius() + GEOM_TOLERANCE {
        return found;
    }

    let foot = circle.center() + offset * n_hat;
    let h2 = circle.r2() - sqr(offset);
    if h2 <= 0. {
        found.add(foot.x, foot.y);
        return found;
    }
    let h = sqrt(h2);
    if h <= GEOM_TOLERANCE {
        found.add(foot.x, foot.y);
        return found;
    }

    let t_hat = Vector2::new(-n_hat.y, n_hat.x);
    let first = foot + h * t_hat;
    let second = foot - h * t_hat;
    found.add(first.x, first.y);
    found.add(second.x, second.y);
    found
}

/// Intersect two straight lines in normal form
///
/// Solves the 2×2 linear system by Cramer's rule. Parallel normals, which
/// include the coincident-lines case, yield 0 points: neither configuration
/// has a discrete crossing.
pub fn line_line(one: &StraightLine, two: &StraightLine) -> Intersections {
    let mut found = Intersections::new();

    let n1 = one.normal();
    let n2 = two.normal();
    let det = n1.x * n2.y - n1.y * n2.x;
    if abs(det) <= GEOM_TOLERANCE {
        return found;
    }

    let x = (one.distance() * n2.y - two.distance() * n1.y) / det;
    let y = (n1.x * two.distance() - n2.x * one.distance()) / det;
    found.add(x, y);
    found
}
