//! The capability contract a detector surface must satisfy
//!
//! Geometry information is needed for three things: crossing points between
//! surfaces and a track, measurement directions on sensitive elements, and
//! material properties for multiple scattering and energy loss. This module
//! hides the concrete geometry backend behind a pair of traits; the core
//! never constructs or destroys a surface, it only queries borrowed ones.
//!
//! All queries are pure and total over valid surfaces. Surfaces are owned by
//! the external geometry provider, built once per run and treated as
//! read-only afterwards, so a shared surface collection can be queried from
//! parallel per-track computations without coordination.

use crate::{
    linalg::{Vector2, Vector3},
    numeric::Float,
};

use std::fmt;

/// Default tolerance for surface bounds checks, in the internal length unit
pub const BOUNDS_EPSILON: Float = 1e-4;

/// Default tolerance for the z-axis orientation predicates
pub const AXIS_EPSILON: Float = 1e-6;

/// Material properties of one side of a surface
///
/// Units are whatever the geometry provider uses consistently; this core
/// only transports the values to the material-effects layer.
pub trait Material: Sync {
    /// Name of the material
    fn name(&self) -> &str;

    /// Averaged proton number
    fn z(&self) -> Float;

    /// Averaged atomic number
    fn a(&self) -> Float;

    /// Density
    fn density(&self) -> Float;

    /// Radiation length
    fn radiation_length(&self) -> Float;

    /// Interaction length
    fn interaction_length(&self) -> Float;
}

impl<'a> fmt::Display for dyn Material + 'a {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            fmt,
            "  {}, A: {}, Z: {}, density: {}, radiationLength: {}, interactionLength: {}",
            self.name(),
            self.a(),
            self.z(),
            self.density(),
            self.radiation_length(),
            self.interaction_length()
        )
    }
}

/// The capability set a detector surface exposes to track propagation
///
/// The two tolerance-parameterized orientation checks are the only required
/// predicates; the parameterless convenience predicates are derived from
/// them with the default tolerances, matching how backends usually classify
/// their surfaces once at construction time.
pub trait Surface: Sync {
    /// Stable, surface-unique key used by external lookup structures
    ///
    /// This core never interprets the key's internal structure.
    fn id(&self) -> i64;

    /// Check whether a global point projects within the surface's physical
    /// extent, with a tolerance absorbing floating round-off at the edges
    fn inside_bounds(&self, point: &Vector3, epsilon: Float) -> bool;

    /// First measurement direction U at (or near) the given global point
    ///
    /// Surfaces whose basis varies with position, like cylinders, need the
    /// point argument; planar surfaces may ignore it.
    fn u(&self, point: &Vector3) -> Vector3;

    /// Second measurement direction V at (or near) the given global point
    fn v(&self, point: &Vector3) -> Vector3;

    /// Surface normal at (or near) the given global point
    fn normal(&self, point: &Vector3) -> Vector3;

    /// Convert a global position to the local (u, v) position on the surface
    ///
    /// Must be the inverse of [`Surface::local_to_global`] for points on the
    /// surface, to within the precision of the backend's own representation.
    fn global_to_local(&self, point: &Vector3) -> Vector2;

    /// Convert a local (u, v) position on the surface to a global position
    fn local_to_global(&self, point: &Vector2) -> Vector3;

    /// Origin of the local coordinate system on the surface
    fn origin(&self) -> Vector3;

    /// Material on the side opposite to the normal direction
    fn inner_material(&self) -> &dyn Material;

    /// Material on the side of the normal direction
    fn outer_material(&self) -> &dyn Material;

    /// Thickness of the inner material
    fn inner_thickness(&self) -> Float;

    /// Thickness of the outer material
    fn outer_thickness(&self) -> Float;

    /// Distance from an arbitrary global point to the surface
    ///
    /// Used to decide whether a propagated state has actually reached the
    /// surface.
    fn distance(&self, point: &Vector3) -> Float;

    /// True if the surface is sensitive (carries measurements)
    fn is_sensitive(&self) -> bool;

    /// True if this is a planar surface
    fn is_plane(&self) -> bool;

    /// True if this is a cylindrical surface
    fn is_cylinder(&self) -> bool;

    /// True if the surface is parallel to z with the given accuracy
    fn check_parallel_to_z(&self, epsilon: Float) -> bool;

    /// True if the surface is orthogonal to z with the given accuracy
    fn check_orthogonal_to_z(&self, epsilon: Float) -> bool;

    /// True if the surface is parallel to z
    fn is_parallel_to_z(&self) -> bool {
        self.check_parallel_to_z(AXIS_EPSILON)
    }

    /// True if the surface is orthogonal to z
    fn is_orthogonal_to_z(&self) -> bool {
        self.check_orthogonal_to_z(AXIS_EPSILON)
    }

    /// True if this is a cylinder parallel to z
    ///
    /// For such a surface the crossing problem reduces to circle–circle in
    /// the transverse plane.
    fn is_z_cylinder(&self) -> bool {
        self.is_cylinder() && self.is_parallel_to_z()
    }

    /// True if this is a plane parallel to z (circle–line in the bend plane)
    fn is_z_plane(&self) -> bool {
        self.is_plane() && self.is_parallel_to_z()
    }

    /// True if this is a plane orthogonal to z (line solve along z)
    fn is_z_disk(&self) -> bool {
        self.is_plane() && self.is_orthogonal_to_z()
    }
}

impl<'a> fmt::Display for dyn Surface + 'a {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = self.origin();
        let coords = |v: Vector3| format!("({}, {}, {})", v.x, v.y, v.z);
        writeln!(fmt, "   id: {:#x}", self.id())?;
        writeln!(
            fmt,
            "   u : {} v : {} normal : {} origin : {}",
            coords(self.u(&origin)),
            coords(self.v(&origin)),
            coords(self.normal(&origin)),
            coords(origin)
        )?;
        writeln!(
            fmt,
            "   inner material : {}  thickness: {}",
            self.inner_material(),
            self.inner_thickness()
        )?;
        writeln!(
            fmt,
            "   outer material : {}  thickness: {}",
            self.outer_material(),
            self.outer_thickness()
        )
    }
}

/// Extra queries a cylindrical surface supports
pub trait Cylinder {
    /// Radius of the cylinder
    fn radius(&self) -> Float;

    /// A point on the cylinder axis
    fn center(&self) -> Vector3;
}

/// A queryable collection of surfaces, owned by the geometry provider
///
/// Population must complete before concurrent read access begins; after
/// that the collection is read-many.
pub trait Geometry: Sync {
    /// Borrow every surface of the detector
    fn surfaces(&self) -> Vec<&dyn Surface>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal material double
    struct Silicon;
    //
    impl Material for Silicon {
        fn name(&self) -> &str {
            "Si"
        }
        fn z(&self) -> Float {
            14.
        }
        fn a(&self) -> Float {
            28.09
        }
        fn density(&self) -> Float {
            2.33
        }
        fn radiation_length(&self) -> Float {
            0.0937
        }
        fn interaction_length(&self) -> Float {
            0.465
        }
    }

    /// Unbounded plane x = x0, measurement directions along y and z
    struct VerticalPlane {
        x0: Float,
    }
    //
    impl Surface for VerticalPlane {
        fn id(&self) -> i64 {
            0x100
        }
        fn inside_bounds(&self, point: &Vector3, epsilon: Float) -> bool {
            self.distance(point) <= epsilon
        }
        fn u(&self, _point: &Vector3) -> Vector3 {
            Vector3::new(0., 1., 0.)
        }
        fn v(&self, _point: &Vector3) -> Vector3 {
            Vector3::new(0., 0., 1.)
        }
        fn normal(&self, _point: &Vector3) -> Vector3 {
            Vector3::new(1., 0., 0.)
        }
        fn global_to_local(&self, point: &Vector3) -> Vector2 {
            Vector2::new(point.y, point.z)
        }
        fn local_to_global(&self, point: &Vector2) -> Vector3 {
            Vector3::new(self.x0, point.x, point.y)
        }
        fn origin(&self) -> Vector3 {
            Vector3::new(self.x0, 0., 0.)
        }
        fn inner_material(&self) -> &dyn Material {
            &Silicon
        }
        fn outer_material(&self) -> &dyn Material {
            &Silicon
        }
        fn inner_thickness(&self) -> Float {
            0.0003
        }
        fn outer_thickness(&self) -> Float {
            0.0003
        }
        fn distance(&self, point: &Vector3) -> Float {
            (point.x - self.x0).abs()
        }
        fn is_sensitive(&self) -> bool {
            true
        }
        fn is_plane(&self) -> bool {
            true
        }
        fn is_cylinder(&self) -> bool {
            false
        }
        fn check_parallel_to_z(&self, epsilon: Float) -> bool {
            // The normal has no z component at all
            self.normal(&self.origin()).z.abs() <= epsilon
        }
        fn check_orthogonal_to_z(&self, epsilon: Float) -> bool {
            (1. - self.normal(&self.origin()).z.abs()) <= epsilon
        }
    }

    #[test]
    fn derived_predicates_follow_the_required_checks() {
        let plane = VerticalPlane { x0: 2. };
        assert!(plane.is_plane());
        assert!(plane.is_parallel_to_z());
        assert!(!plane.is_orthogonal_to_z());
        assert!(plane.is_z_plane());
        assert!(!plane.is_z_disk());
        assert!(!plane.is_z_cylinder());
    }

    #[test]
    fn frame_conversions_are_mutual_inverses_on_the_surface() {
        let plane = VerticalPlane { x0: 2. };
        let local = Vector2::new(0.3, -1.2);
        let global = plane.local_to_global(&local);
        assert_eq!(plane.global_to_local(&global), local);
        assert!(plane.inside_bounds(&global, BOUNDS_EPSILON));
    }

    #[test]
    fn contract_objects_can_be_shared_across_threads() {
        // Surfaces are read-only after construction, so every piece of the
        // capability contract must be shareable between per-track workers
        fn shareable<T: Sync + ?Sized>() {}
        shareable::<dyn Material>();
        shareable::<dyn Surface>();
        shareable::<dyn Geometry>();
    }

    #[test]
    fn display_dumps_id_frame_and_materials() {
        let plane = VerticalPlane { x0: 2. };
        let dump = format!("{}", &plane as &dyn Surface);
        assert!(dump.contains("id: 0x100"));
        assert!(dump.contains("Si"));
        assert!(dump.contains("origin : (2, 0, 0)"));
    }
}
