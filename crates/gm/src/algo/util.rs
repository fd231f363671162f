use crate::vector::Vector;

/// Component of `a` orthogonal to `b`: `a − b·(a·b / |b|²)`.
///
/// Pre: `b` is non-zero.
pub fn orthogonal<const N: usize>(a: &Vector<f64, N>, b: &Vector<f64, N>) -> Vector<f64, N> {
    let b_len2 = b.peek_len2();
    debug_assert!(b_len2 > 0.0, "projection onto a zero vector");
    *a - *b * (a.dot(b) / b_len2)
}
