//! Curated re-exports for downstream renderers and simulations.
//!
//! Prefer these over reaching into submodules; the module layout may change.

pub use crate::algo::{
    distance2_point_line, distance_point_line_2d, line_intersection, orthogonal,
    ray_line_intersection, solve_quadratic, QuadraticRoots,
};
pub use crate::line::{Line, Line2, Line3};
pub use crate::sphere::Sphere;
pub use crate::vector::{cord_mul, cord_pow, Scalar, Vector, Vector2, Vector3};
