use super::*;
use crate::line::{Line2, Line3};
use crate::proptest::{arbitrary_line2, arbitrary_line3, arbitrary_vector2, arbitrary_vector3};
use crate::vector::{Vector2, Vector3};
use proptest::prelude::*;

fn line2(sx: f64, sy: f64, dx: f64, dy: f64) -> Line2 {
    Line2::new(Vector2::new(sx, sy), Vector2::new(dx, dy))
}

#[test]
fn point_line_distance_3d_is_squared() {
    let axis = Line3::new(Vector3::zeros(), Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(distance2_point_line(&Vector3::new(0.0, 3.0, 4.0), &axis), 25.0);
    // Direction length is irrelevant.
    let long_axis = Line3::new(Vector3::new(7.0, 0.0, 0.0), Vector3::new(-4.0, 0.0, 0.0));
    assert_eq!(distance2_point_line(&Vector3::new(0.0, 3.0, 4.0), &long_axis), 25.0);
}

#[test]
fn point_line_distance_2d_is_linear() {
    let l = line2(0.0, 0.0, 2.0, 0.0);
    assert_eq!(distance_point_line_2d(&Vector2::new(5.0, -3.0), &l), 3.0);
    let diag = line2(0.0, 0.0, 1.0, 1.0);
    let d = distance_point_line_2d(&Vector2::new(1.0, -1.0), &diag);
    assert!((d - std::f64::consts::SQRT_2).abs() < 1e-12);
}

#[test]
fn perpendicular_lines_meet() {
    let a = line2(0.0, 0.0, 1.0, 0.0);
    let b = line2(0.0, -1.0, 0.0, 1.0);
    assert_eq!(line_intersection(&a, &b), Some(Vector2::new(0.0, 0.0)));
}

#[test]
fn oblique_lines_meet() {
    let a = line2(0.0, 0.0, 1.0, 1.0);
    let b = line2(4.0, 0.0, -1.0, 1.0);
    let p = line_intersection(&a, &b).unwrap();
    assert!((p.x() - 2.0).abs() < 1e-12 && (p.y() - 2.0).abs() < 1e-12);
}

#[test]
fn parallel_and_coincident_lines_have_no_intersection() {
    let a = line2(0.0, 0.0, 1.0, 0.0);
    let b = line2(3.0, 5.0, 2.0, 0.0);
    assert!(line_intersection(&a, &b).is_none());
    let same = line2(1.0, 0.0, -3.0, 0.0);
    assert!(line_intersection(&a, &same).is_none());
}

#[test]
fn ray_line_forward_and_backward() {
    let wall = line2(5.0, 0.0, 0.0, 1.0);
    let towards = line2(0.0, 0.0, 1.0, 0.0);
    assert_eq!(ray_line_intersection(&towards, &wall), Some(Vector2::new(5.0, 0.0)));
    let away = line2(0.0, 0.0, -1.0, 0.0);
    assert!(ray_line_intersection(&away, &wall).is_none());
    let parallel = line2(0.0, 0.0, 0.0, 1.0);
    assert!(ray_line_intersection(&parallel, &wall).is_none());
}

#[test]
fn ray_line_uses_end_point_not_direction() {
    // Heading from x=10 towards the wall at x=5: the bare direction says
    // "forward", the end-point test (9,0)·(−5,0) < 0 rejects it.
    let wall = line2(5.0, 0.0, 0.0, 1.0);
    let ray = line2(10.0, 0.0, -1.0, 0.0);
    let hit = line_intersection(&ray, &wall).unwrap();
    assert!(ray.direction().dot(&(hit - ray.start())) > 0.0);
    assert!(ray_line_intersection(&ray, &wall).is_none());
}

#[test]
fn orthogonal_removes_projection() {
    let a = Vector3::new(3.0, 4.0, 5.0);
    let b = Vector3::new(0.0, 2.0, 0.0);
    assert_eq!(orthogonal(&a, &b), Vector3::new(3.0, 0.0, 5.0));
    let p = orthogonal(&Vector2::new(1.0, 1.0), &Vector2::new(1.0, 0.0));
    assert_eq!(p, Vector2::new(0.0, 1.0));
}

#[test]
fn quadratic_root_counts() {
    assert_eq!(solve_quadratic(1.0, 0.0, -4.0), QuadraticRoots::Two([-2.0, 2.0]));
    assert_eq!(solve_quadratic(1.0, 2.0, 1.0), QuadraticRoots::One(-1.0));
    assert_eq!(solve_quadratic(1.0, 0.0, 1.0), QuadraticRoots::Zero);
    assert_eq!(solve_quadratic(1.0, 0.0, -4.0).count(), 2);
    assert_eq!(solve_quadratic(1.0, 2.0, 1.0).roots(), &[-1.0]);
    assert!(solve_quadratic(1.0, 0.0, 1.0).roots().is_empty());
}

#[test]
fn quadratic_orders_roots_and_handles_degenerate_cases() {
    // −x² + 5x − 6 = 0 → {2, 3}
    assert_eq!(solve_quadratic(-1.0, 5.0, -6.0), QuadraticRoots::Two([2.0, 3.0]));
    assert_eq!(solve_quadratic(0.0, 2.0, -3.0), QuadraticRoots::One(1.5));
    assert_eq!(solve_quadratic(0.0, 0.0, 1.0), QuadraticRoots::Zero);
}

proptest! {
    #[test]
    fn intersection_lies_on_both_lines(a in arbitrary_line2(), b in arbitrary_line2()) {
        if let Some(p) = line_intersection(&a, &b) {
            let scale = 1.0 + p.peek_len2().sqrt() + a.start().peek_len2().sqrt() + b.start().peek_len2().sqrt();
            let det = a.direction().perp_dot(&b.direction()).abs();
            // Skip nearly parallel pairs: the hit is far away and ill-conditioned.
            prop_assume!(det > 1e-3);
            prop_assert!(distance_point_line_2d(&p, &a) < 1e-8 * scale);
            prop_assert!(distance_point_line_2d(&p, &b) < 1e-8 * scale);
        } else {
            prop_assert_eq!(a.direction().perp_dot(&b.direction()), 0.0);
        }
    }

    #[test]
    fn points_on_line_have_zero_distance(l in arbitrary_line3(), t in -10.0..10.0f64) {
        let p = l.at(t);
        let scale = 1.0 + p.peek_len2();
        prop_assert!(distance2_point_line(&p, &l) < 1e-12 * scale);
    }

    #[test]
    fn distance_matches_orthogonal_component(p in arbitrary_vector3(), l in arbitrary_line3()) {
        let rel = p - l.start();
        let perp = orthogonal(&rel, &l.direction());
        let d2 = distance2_point_line(&p, &l);
        prop_assert!((perp.peek_len2() - d2).abs() < 1e-6 * (1.0 + rel.peek_len2()));
        prop_assert!(perp.dot(&l.direction()).abs() < 1e-8 * (1.0 + rel.peek_len2()) * (1.0 + l.direction().peek_len2()));
    }

    #[test]
    fn distance_2d_agrees_with_3d(p in arbitrary_vector2(), l in arbitrary_line2()) {
        let l3 = Line3::new(l.start().to_3d(), l.direction().to_3d());
        let d = distance_point_line_2d(&p, &l);
        let d2 = distance2_point_line(&p.to_3d(), &l3);
        prop_assert!((d * d - d2).abs() < 1e-6 * (1.0 + d2));
    }

    #[test]
    fn quadratic_roots_satisfy_equation(r1 in -20.0..20.0f64, r2 in -20.0..20.0f64) {
        // (x − r1)(x − r2) = x² − (r1 + r2)x + r1·r2
        let roots = solve_quadratic(1.0, -(r1 + r2), r1 * r2);
        for &x in roots.roots() {
            let y = x * x - (r1 + r2) * x + r1 * r2;
            prop_assert!(y.abs() < 1e-6);
        }
        prop_assert!(roots.count() >= 1 || (r1 - r2).abs() < 1e-6);
    }
}
