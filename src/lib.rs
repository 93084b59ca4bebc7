//! Geometric and numeric core of a charged-particle trajectory toolkit
//!
//!
//! # Introduction (for the physicist)
//!
//! A charged particle in a uniform magnetic field along z follows a helix,
//! described here by the five L3 parameters [Ω, tanλ, φ₀, d₀, z₀] together
//! with their 5×5 covariance. Projected onto the plane transverse to the
//! field the helix is a circle; along the field direction it is a straight
//! line. Finding where a track crosses a detector surface therefore reduces
//! to intersecting circles and lines, and every crossing point can be
//! converted to the surface's local (u, v) measurement frame for residual
//! computation.
//!
//!
//! # Introduction (for the numerical guy)
//!
//! Everything here is exact small-matrix algebra and case-based analytic
//! geometry: no iterative solvers, no dynamically-sized linear algebra. The
//! only numeric subtlety is the handling of degenerate configurations
//! (tangency, parallelism, coincidence), which are decided with a small
//! absolute tolerance and signalled through the returned point count.
//!
//!
//! # Introduction (for the computer guy)
//!
//! The crate splits into value-type leaves and one interface seam:
//!
//! * `linalg` carries the fixed five-parameter state algebra
//! * `planar` and `intersect` hold the projection shapes and the three
//!   analytic intersection solvers
//! * `surface` is the capability contract an external geometry provider
//!   must satisfy to be consumable by propagation
//! * `units` and `persistency` pin down the unit and ordering conventions
//!   every boundary adapter must honor
//!
//! All types are plain values without shared mutable state, so independent
//! computations over different tracks and surfaces can run in parallel
//! without coordination.

#![warn(missing_docs)]

pub mod intersect;
pub mod linalg;
pub mod numeric;
pub mod persistency;
pub mod planar;
pub mod surface;
pub mod track;
pub mod units;

/// We'll use anyhow's type-erased result type throughout the crate
pub type Result<T> = anyhow::Result<T>;

pub use crate::{
    intersect::{circle_circle, circle_line, line_line, Intersections},
    planar::{Circle, StraightLine},
    surface::{Cylinder, Geometry, Material, Surface},
    track::TrackState,
};
