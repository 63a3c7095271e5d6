use tracing::trace;

use crate::geometry::Plane;

use super::{Point3, ONE, ZERO};

/// Computes a point on the line where two planes meet.
///
/// Returns `None` when the normals are parallel or anti-parallel, which
/// covers both separated and coincident planes. The test is exact: only a
/// cross product of exactly zero length counts as parallel.
///
/// Reference: Ericson, *Real-Time Collision Detection*, 5.4.4.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn plane_plane_intersect(a: &Plane, b: &Plane) -> Option<Point3> {
    let dir = a.normal.cross(&b.normal);
    let denom = dir.dot(&dir);

    if denom == ZERO {
        trace!(?a, ?b, "planes are parallel or coincident");
        return None;
    }

    // With planes written as `n . p = -c` the point is
    // `((-c1) n2 - (-c2) n1) x dir / |dir|^2`.
    let v = a.normal * b.constant - b.normal * a.constant;
    Some(Point3::from(v.cross(&dir) / denom))
}

/// Returns whether two planes cross, i.e. their normals are not exactly
/// parallel or anti-parallel.
///
/// Only meaningful for unit normals.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn planes_cross(a: &Plane, b: &Plane) -> bool {
    a.normal.dot(&b.normal).abs() != ONE
}

/// Signed distance from a point to a plane.
/// Positive = on the normal side, negative = opposite.
#[must_use]
pub fn signed_distance_to_plane(point: &Point3, plane: &Plane) -> f64 {
    plane.normal.dot(&point.coords) + plane.constant
}

/// Orthogonal projection of a point onto a plane.
#[must_use]
pub fn project_point_onto_plane(point: &Point3, plane: &Plane) -> Point3 {
    point - plane.normal * signed_distance_to_plane(point, plane)
}
