//! Tolerance defaults (internal).
//!
//! Policy
//! - Defaults are fixed constants. The intersection code compares exactly
//!   (parallel lines, tangency); tolerances only appear where a cached or
//!   rounded quantity is checked against a recomputation.

/// Relative tolerance when checking a cached `f64` squared length against a
/// fresh recomputation. Normalization and `set_len` store the requested value
/// instead of recomputing it, so exact equality is too strict.
pub(crate) const LEN2_REL_TOL_F64: f64 = 1e-9;
/// Same as [`LEN2_REL_TOL_F64`] for `f32` coordinates.
pub(crate) const LEN2_REL_TOL_F32: f32 = 1e-4;
/// A discriminant with absolute value at most this is treated as zero by
/// [`crate::algo::solve_quadratic`].
pub const DISCRIMINANT_EPS: f64 = f64::EPSILON;
