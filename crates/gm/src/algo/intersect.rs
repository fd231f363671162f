use nalgebra::{Matrix2, Vector2 as NaVector2};

use crate::line::Line2;
use crate::vector::Vector2;

/// Intersection point of two infinite 2D lines, or `None` if they are
/// parallel or coincident (determinant exactly zero).
///
/// Solves `a.start + t·a.dir = b.start + s·b.dir` for `t` by Cramer's rule.
pub fn line_intersection(a: &Line2, b: &Line2) -> Option<Vector2<f64>> {
    debug_assert!(a.is_valid() && b.is_valid());
    let u: NaVector2<f64> = a.direction().into();
    let v: NaVector2<f64> = b.direction().into();
    let w: NaVector2<f64> = (b.start() - a.start()).into();
    // [u  −v] · (t, s)ᵀ = w
    let det = Matrix2::from_columns(&[u, -v]).determinant();
    if det == 0.0 {
        return None;
    }
    let t = Matrix2::from_columns(&[w, -v]).determinant() / det;
    Some(a.at(t))
}

/// Intersection of `ray` with the infinite line `line`, kept only if
/// `(ray.start + ray.direction) · (hit − ray.start) > 0`.
///
/// The test is against the ray's end point `start + direction`, not the bare
/// direction, so for a ray whose start is far from the origin the accepted
/// half-plane differs from the naive forward half.
pub fn ray_line_intersection(ray: &Line2, line: &Line2) -> Option<Vector2<f64>> {
    let hit = line_intersection(ray, line)?;
    let tip = ray.start() + ray.direction();
    (tip.dot(&(hit - ray.start())) > 0.0).then_some(hit)
}
