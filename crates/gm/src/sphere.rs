//! Spheres and the ray–sphere closest-intersection query.

use crate::algo::distance2_point_line;
use crate::line::Line3;
use crate::vector::Vector3;

/// Immutable center + radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    center: Vector3<f64>,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Vector3<f64>, radius: f64) -> Self {
        debug_assert!(center.is_valid(), "invalid sphere center {center:?}");
        Self { center, radius }
    }

    #[inline]
    pub fn center(&self) -> Vector3<f64> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Whether `point` lies inside or on the sphere.
    pub fn contains(&self, point: &Vector3<f64>) -> bool {
        let mut offset = *point - self.center;
        offset.len2() <= self.radius * self.radius
    }

    /// Squared distance from the center to the infinite line through `line`.
    pub fn distance_to_line2(&self, line: &Line3) -> f64 {
        distance2_point_line(&self.center, line)
    }

    /// Nearest point where `ray` enters the sphere, or `None`.
    ///
    /// Rules
    /// - `None` when the ray's line misses the sphere, when the center lies
    ///   behind the ray origin (`(center − start)·direction <= 0`), or for a
    ///   zero direction.
    /// - Only the direction's orientation matters; any finite length works.
    /// - Exact tangency returns the tangent point (foot of the perpendicular).
    /// - Otherwise the near root `projection − half_chord` is used. If the ray
    ///   starts inside the sphere that root is negative and the returned point
    ///   lies *behind* the origin on the ray's line; the far (exit) root is
    ///   never computed.
    pub fn closest_intersection(&self, ray: &Line3) -> Option<Vector3<f64>> {
        debug_assert!(ray.is_valid());
        // Unit direction keeps the projections finite for huge directions.
        let unit = ray.direction().normalized()?;
        let to_center = self.center - ray.start();
        let along = to_center.dot(&unit);
        let r2 = self.radius * self.radius;
        let d2 = distance2_point_line(&self.center, &Line3::new(ray.start(), unit));
        if d2 > r2 || along <= 0.0 {
            return None;
        }
        if d2 == r2 {
            return Some(ray.start() + unit * along);
        }
        let half_chord = (r2 - d2).sqrt();
        Some(ray.start() + unit * (along - half_chord))
    }
}
