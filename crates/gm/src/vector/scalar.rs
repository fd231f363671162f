//! Coordinate scalar types.

use std::fmt::Debug;

use num_traits::{AsPrimitive, Num, NumCast};

use crate::cfg::{LEN2_REL_TOL_F32, LEN2_REL_TOL_F64};

/// Primitive arithmetic type usable as a vector coordinate.
///
/// Integers check cached squared lengths exactly. Floats allow a relative
/// tolerance so the stored `1.0` after normalization (and `new_len²` after
/// `set_len`) still counts as consistent.
pub trait Scalar: Num + NumCast + AsPrimitive<f64> + PartialOrd + Copy + Debug + 'static {
    /// True for the undefined value (NaN). Integers have none.
    fn is_undefined(self) -> bool;

    /// Whether a cached squared length agrees with a fresh recomputation.
    fn len2_matches(cached: Self, fresh: Self) -> bool;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn is_undefined(self) -> bool {
                false
            }
            #[inline]
            fn len2_matches(cached: Self, fresh: Self) -> bool {
                cached == fresh
            }
        }
    )*};
}

macro_rules! impl_scalar_float {
    ($($t:ty => $tol:expr),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn is_undefined(self) -> bool {
                self.is_nan()
            }
            #[inline]
            fn len2_matches(cached: Self, fresh: Self) -> bool {
                // Equal infinities (an overflowed squared length) match too.
                cached == fresh || (cached - fresh).abs() <= $tol * fresh.abs().max(1.0)
            }
        }
    )*};
}

impl_scalar_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_float!(f32 => LEN2_REL_TOL_F32, f64 => LEN2_REL_TOL_F64);
