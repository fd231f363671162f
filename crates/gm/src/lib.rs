//! Small-dimension geometry primitives.
//!
//! The crate provides 2D/3D vectors with a lazily cached squared length,
//! lines (point + direction), spheres, and the queries a ray tracer or physics
//! toy needs underneath: point-to-line distance, ray–sphere closest
//! intersection, 2D line and ray intersection, and a quadratic solver.
//!
//! Conventions
//! - "No geometric result" is always `Option::None`, never a sentinel vector.
//! - Invariant checks are `debug_assert!`s: debug builds stop at the first
//!   violated invariant, release builds skip them.
//! - Comparisons in the intersection code are exact unless a tolerance from
//!   [`cfg`] is named.

pub mod algo;
pub mod api;
pub mod cfg;
pub mod line;
pub mod sphere;
pub mod vector;

#[cfg(test)]
pub(crate) mod proptest;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use line::{Line, Line2, Line3};
pub use sphere::Sphere;
pub use vector::{cord_mul, cord_pow, Scalar, Vector, Vector2, Vector3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algo::{
        distance2_point_line, distance_point_line_2d, line_intersection, orthogonal,
        ray_line_intersection, solve_quadratic, QuadraticRoots,
    };
    pub use crate::line::{Line2, Line3};
    pub use crate::sphere::Sphere;
    pub use crate::vector::{cord_mul, cord_pow, Vector2, Vector3};
}
