use crate::line::{Line2, Line3};
use crate::vector::{Vector2, Vector3};

/// Squared distance from `point` to the infinite line through `line`:
/// `|(p − s) × d|² / |d|²`.
///
/// Pre: `line.direction()` is non-zero (need not be unit length).
pub fn distance2_point_line(point: &Vector3<f64>, line: &Line3) -> f64 {
    let mut dir = line.direction();
    let dir_len2 = dir.len2();
    debug_assert!(dir_len2 > 0.0, "distance to a line with zero direction");
    let mut cross = (*point - line.start()).cross(&dir);
    cross.len2() / dir_len2
}

/// Distance (not squared) from `point` to the infinite line through `line`:
/// `|perp_dot(p − s, d)| / |d|`.
///
/// Pre: `line.direction()` is non-zero.
pub fn distance_point_line_2d(point: &Vector2<f64>, line: &Line2) -> f64 {
    let mut dir = line.direction();
    let dir_len2 = dir.len2();
    debug_assert!(dir_len2 > 0.0, "distance to a line with zero direction");
    (*point - line.start()).perp_dot(&dir).abs() / dir_len2.sqrt()
}
