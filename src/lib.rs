pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, HessianError, Result};
pub use geometry::Plane;
pub use math::{Point3, Vector3};
