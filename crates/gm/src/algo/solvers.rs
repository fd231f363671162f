//! Quadratic roots `a·x² + b·x + c = 0`.

use crate::cfg::DISCRIMINANT_EPS;

/// Real roots of a quadratic, in ascending order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuadraticRoots {
    Zero,
    One(f64),
    Two([f64; 2]),
}

impl QuadraticRoots {
    #[inline]
    pub fn count(&self) -> usize {
        self.roots().len()
    }

    pub fn roots(&self) -> &[f64] {
        match self {
            QuadraticRoots::Zero => &[],
            QuadraticRoots::One(r) => std::slice::from_ref(r),
            QuadraticRoots::Two(rs) => rs,
        }
    }
}

/// Solve `a·x² + b·x + c = 0` over the reals.
///
/// - `|b² − 4ac| <= DISCRIMINANT_EPS` → one root `−b / 2a`.
/// - Negative discriminant → no roots.
/// - Otherwise two roots from the standard formula, sorted ascending.
/// - `a == 0` falls back to the linear equation `b·x + c = 0` (no roots if
///   `b == 0` as well).
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadraticRoots {
    if a == 0.0 {
        return if b == 0.0 {
            QuadraticRoots::Zero
        } else {
            QuadraticRoots::One(-c / b)
        };
    }
    let d = b * b - 4.0 * a * c;
    if d.abs() <= DISCRIMINANT_EPS {
        return QuadraticRoots::One(-b / (2.0 * a));
    }
    if d < 0.0 {
        return QuadraticRoots::Zero;
    }
    let sd = d.sqrt();
    let r1 = (-b - sd) / (2.0 * a);
    let r2 = (-b + sd) / (2.0 * a);
    QuadraticRoots::Two([r1.min(r2), r1.max(r2)])
}
