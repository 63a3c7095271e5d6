pub mod intersect_3d;

use approx::AbsDiffEq;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for approximate comparisons.
///
/// The plane queries themselves compare exactly; this is only used by the
/// checked constructors and the `approx` based predicates.
pub const TOLERANCE: f64 = 1e-10;

pub const ZERO: f64 = 0.0;
pub const ONE: f64 = 1.0;
pub const MINUS_ONE: f64 = -1.0;

/// The zero vector.
pub const ZERO_VECTOR: Vector3 = Vector3::new(ZERO, ZERO, ZERO);

/// The origin.
pub const ZERO_POINT: Point3 = Point3::new(ZERO, ZERO, ZERO);

/// Normal of the default plane (`z = 0`).
pub const DEFAULT_NORMAL: Vector3 = Vector3::new(ZERO, ZERO, ONE);

/// Anything with three cartesian components.
///
/// Lets the equality helpers accept points and vectors alike.
pub trait Components {
    fn components(&self) -> [f64; 3];
}

impl Components for Vector3 {
    fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Components for Point3 {
    fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Snapshot of a scalar.
#[must_use]
pub fn copy_value(a: f64) -> f64 {
    a
}

/// Snapshot of a vector. The result shares nothing with `a`.
#[must_use]
pub fn copy_vector(a: &Vector3) -> Vector3 {
    Vector3::new(a.x, a.y, a.z)
}

/// Snapshot of a point. The result shares nothing with `a`.
#[must_use]
pub fn copy_point(a: &Point3) -> Point3 {
    Point3::new(a.x, a.y, a.z)
}

#[must_use]
pub fn new_point(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

#[must_use]
pub fn new_vector(x: f64, y: f64, z: f64) -> Vector3 {
    Vector3::new(x, y, z)
}

/// Exact componentwise equality of two points or vectors.
///
/// With the `legacy-vector-equals` feature the y component of `b` is never
/// looked at: only `a.y` is compared with itself, so the check passes for
/// any y unless `a.y` is NaN.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn vector_equals<A: Components, B: Components>(a: &A, b: &B) -> bool {
    let [ax, ay, az] = a.components();
    let [bx, by, bz] = b.components();

    if cfg!(feature = "legacy-vector-equals") {
        ax == bx && !ay.is_nan() && az == bz
    } else {
        ax == bx && ay == by && az == bz
    }
}

/// Componentwise equality within an absolute `epsilon`.
#[must_use]
pub fn vector_approx_eq<A: Components, B: Components>(a: &A, b: &B, epsilon: f64) -> bool {
    Vector3::from(a.components()).abs_diff_eq(&Vector3::from(b.components()), epsilon)
}
