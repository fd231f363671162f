//! Free geometric queries over vectors and lines.
//!
//! - `distance`: point-to-line distance. 3D returns the *squared* distance,
//!   2D the *linear* distance; the two contracts are intentionally different.
//! - `intersect`: 2D line–line and ray–line intersection (Cramer's rule).
//! - `solvers`: quadratic roots.
//! - `util`: orthogonal component.
//!
//! Ray–sphere intersection lives on [`crate::sphere::Sphere`].

mod distance;
mod intersect;
mod solvers;
mod util;

pub use distance::{distance2_point_line, distance_point_line_2d};
pub use intersect::{line_intersection, ray_line_intersection};
pub use solvers::{solve_quadratic, QuadraticRoots};
pub use util::orthogonal;

#[cfg(test)]
mod tests;
