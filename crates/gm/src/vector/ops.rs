//! Operator impls, conversions and formatting for `Vector`.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use nalgebra::SVector;

use super::{Scalar, Vector};

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        debug_assert!(self.is_valid() && rhs.is_valid());
        self.zip_map(&rhs, |a, b| a + b).checked()
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        debug_assert!(self.is_valid() && rhs.is_valid());
        self.zip_map(&rhs, |a, b| a - b).checked()
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: T) -> Self {
        debug_assert!(self.is_valid());
        Self::from_coords(self.coords.map(|c| c * scalar)).checked()
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        debug_assert!(self.is_valid() && rhs.is_valid());
        for (c, r) in self.coords.iter_mut().zip(rhs.coords) {
            *c = *c + r;
        }
        self.len2 = None;
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        debug_assert!(self.is_valid() && rhs.is_valid());
        for (c, r) in self.coords.iter_mut().zip(rhs.coords) {
            *c = *c - r;
        }
        self.len2 = None;
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, scalar: T) {
        debug_assert!(self.is_valid());
        for c in self.coords.iter_mut() {
            *c = *c * scalar;
        }
        self.len2 = None;
    }
}

impl<T: Scalar, const N: usize> PartialEq for Vector<T, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(coords: [T; N]) -> Self {
        Self::from_coords(coords)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.coords
    }
}

// nalgebra interop: linear-algebra heavy callers (and `algo`) work on
// `SVector`, the cache is dropped on the way out.
impl<T: Scalar, const N: usize> From<Vector<T, N>> for SVector<T, N> {
    fn from(v: Vector<T, N>) -> Self {
        SVector::from(v.coords)
    }
}

impl<T: Scalar, const N: usize> From<SVector<T, N>> for Vector<T, N> {
    fn from(v: SVector<T, N>) -> Self {
        Self::from_coords(std::array::from_fn(|i| v[i]))
    }
}

/// Debug-oriented text form, e.g. `Vector3 {1, 2, 3}`.
impl<T: Scalar + fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector{} {{", N)?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("}")
    }
}
