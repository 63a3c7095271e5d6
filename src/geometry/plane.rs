use approx::{AbsDiffEq, RelativeEq};
use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::intersect_3d::{
    plane_plane_intersect, planes_cross, project_point_onto_plane, signed_distance_to_plane,
};
use crate::math::{
    copy_value, copy_vector, vector_equals, Point3, Vector3, DEFAULT_NORMAL,
    MINUS_ONE, TOLERANCE, ZERO,
};

/// An infinite plane in Hessian normal form.
///
/// The plane is the set of points `p` with `normal . p + constant = 0`.
/// `normal` is expected to be unit length; nothing here enforces that, and
/// only [`from_coplanar_points`](Self::from_coplanar_points) normalizes.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Normal vector of the plane.
    pub normal: Vector3,
    /// Signed distance of the plane from the origin, against the normal.
    pub constant: f64,
}

impl Default for Plane {
    /// The `z = 0` plane.
    fn default() -> Self {
        Self::new(DEFAULT_NORMAL, ZERO)
    }
}

impl Plane {
    /// Creates a plane from a normal and a constant, stored as given.
    #[must_use]
    pub fn new(normal: Vector3, constant: f64) -> Self {
        Self { normal, constant }
    }

    /// Overwrites both components.
    pub fn set(&mut self, normal: Vector3, constant: f64) -> &mut Self {
        self.normal = normal;
        self.constant = constant;
        self
    }

    /// Copies `other` into this plane.
    pub fn copy(&mut self, other: &Plane) -> &mut Self {
        self.normal = copy_vector(&other.normal);
        self.constant = copy_value(other.constant);
        self
    }

    /// Signed distance from `point` to this plane.
    ///
    /// The sign tells which half-space the point lies in; zero means the
    /// point is on the plane.
    #[must_use]
    pub fn distance_to_point(&self, point: &Point3) -> f64 {
        signed_distance_to_plane(point, self)
    }

    /// Sets this plane from a unit normal and a point on the plane.
    pub fn from_normal_and_coplanar_point(&mut self, normal: Vector3, point: &Point3) -> &mut Self {
        self.normal = normal;
        self.constant = normal.dot(&point.coords) * MINUS_ONE;
        self
    }

    /// Sets this plane from three points on it.
    ///
    /// The normal is `(c - b) x (a - b)`, normalized. The points must not be
    /// collinear; if they are, the normal is NaN. Use
    /// [`try_from_coplanar_points`](Self::try_from_coplanar_points) when the
    /// input is not known to be well formed.
    pub fn from_coplanar_points(&mut self, a: &Point3, b: &Point3, c: &Point3) -> &mut Self {
        let normal = (c - b).cross(&(a - b)).normalize();
        self.from_normal_and_coplanar_point(normal, a)
    }

    /// Creates a plane from three points on it, rejecting degenerate input.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if two of the points coincide,
    /// or [`GeometryError::Degenerate`] if the points are collinear.
    pub fn try_from_coplanar_points(a: &Point3, b: &Point3, c: &Point3) -> Result<Self> {
        let cb = c - b;
        let ab = a - b;
        let cb_len = cb.norm();
        let ab_len = ab.norm();
        if cb_len < TOLERANCE || ab_len < TOLERANCE || (a - c).norm() < TOLERANCE {
            debug!(?a, ?b, ?c, "coincident points");
            return Err(GeometryError::ZeroVector.into());
        }

        // Unit edges make the cross product length sin(angle), independent of scale.
        let cross = (cb / cb_len).cross(&(ab / ab_len));
        let len = cross.norm();
        if len < TOLERANCE {
            debug!(?a, ?b, ?c, "collinear points");
            return Err(GeometryError::Degenerate("plane points are collinear".into()).into());
        }

        let mut plane = Self::default();
        plane.from_normal_and_coplanar_point(cross / len, a);
        Ok(plane)
    }

    /// Returns a point on the line where this plane meets `other`, or
    /// `None` if the planes are parallel or coincident.
    #[must_use]
    pub fn intersect_plane(&self, other: &Plane) -> Option<Point3> {
        plane_plane_intersect(self, other)
    }

    /// Returns whether `other` crosses this plane.
    ///
    /// `false` only when the normals are exactly parallel or anti-parallel.
    #[must_use]
    pub fn intersects_plane(&self, other: &Plane) -> bool {
        planes_cross(self, other)
    }

    /// Closest point on this plane to `point`.
    #[must_use]
    pub fn project_point(&self, point: &Point3) -> Point3 {
        project_point_onto_plane(point, self)
    }

    /// Exact componentwise equality. `(n, c)` and `(-n, -c)` describe the
    /// same plane but are not equal.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn equals(&self, other: &Plane) -> bool {
        vector_equals(&other.normal, &self.normal) && other.constant == self.constant
    }
}

impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl AbsDiffEq for Plane {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.normal.abs_diff_eq(&other.normal, epsilon)
            && self.constant.abs_diff_eq(&other.constant, epsilon)
    }
}

impl RelativeEq for Plane {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.normal.relative_eq(&other.normal, epsilon, max_relative)
            && self.constant.relative_eq(&other.constant, epsilon, max_relative)
    }
}
