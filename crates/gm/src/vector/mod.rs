//! 2D/3D vectors with a lazily cached squared length.
//!
//! Purpose
//! - One value type `Vector<T, N>` for `N ∈ {2, 3}` over any primitive
//!   arithmetic scalar, with dimension-specific operations in separate impls.
//! - Repeated squared-length queries are O(1) after the first one.
//!
//! Invariants
//! - `len2` is a cache: `None` when dirty, otherwise the squared length of
//!   `coords` (see `Scalar::len2_matches` for what "equal" means).
//! - Mutators read the old coordinates first and clear the cache afterwards.
//! - `is_valid()` holds for every vector an operation accepts or returns;
//!   this is checked with `debug_assert!`.
//! - Geometric "no result" is `Option::None`. A vector value is never a sentinel.

mod ops;
mod scalar;

use num_traits::{AsPrimitive, Float};

pub use scalar::Scalar;

/// Fixed-dimension vector with a squared-length cache.
///
/// Equality compares coordinates exactly and ignores the cache.
#[derive(Clone, Copy, Debug)]
pub struct Vector<T, const N: usize> {
    coords: [T; N],
    len2: Option<T>,
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    #[inline]
    pub fn from_coords(coords: [T; N]) -> Self {
        Self { coords, len2: None }
    }

    /// Broadcast: every coordinate set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_coords([value; N])
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    #[inline]
    pub fn coords(&self) -> [T; N] {
        self.coords
    }

    /// No coordinate is NaN and the cache, if populated, matches a recomputation.
    pub fn is_valid(&self) -> bool {
        if self.coords.iter().any(|c| c.is_undefined()) {
            return false;
        }
        match self.len2 {
            None => true,
            Some(cached) => T::len2_matches(cached, self.sum_squares()),
        }
    }

    /// Squared length; computed and stored on first use after a mutation.
    pub fn len2(&mut self) -> T {
        debug_assert!(self.is_valid(), "len2 on invalid vector {self:?}");
        match self.len2 {
            Some(v) => v,
            None => {
                let v = self.sum_squares();
                self.len2 = Some(v);
                v
            }
        }
    }

    /// Squared length without touching the cache (uses it if populated).
    #[inline]
    pub fn peek_len2(&self) -> T {
        self.len2.unwrap_or_else(|| self.sum_squares())
    }

    #[inline]
    pub fn is_len2_cached(&self) -> bool {
        self.len2.is_some()
    }

    /// Scalar product.
    pub fn dot(&self, other: &Self) -> T {
        debug_assert!(self.is_valid() && other.is_valid());
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Clamp every coordinate into `[min, max]` in place.
    pub fn clamp(&mut self, min: T, max: T) {
        debug_assert!(min <= max, "clamp bounds reversed: {min:?} > {max:?}");
        debug_assert!(self.is_valid());
        for c in self.coords.iter_mut() {
            if *c < min {
                *c = min;
            } else if *c > max {
                *c = max;
            }
        }
        self.len2 = None;
    }

    /// Elementwise numeric conversion into scalar type `U`.
    ///
    /// Returns `None` if any coordinate does not fit `U`. A populated cache
    /// is carried over by recomputing it in `U` (rounding may change it).
    pub fn try_cast<U: Scalar>(&self) -> Option<Vector<U, N>> {
        debug_assert!(self.is_valid());
        let mut coords = [U::zero(); N];
        for (dst, &src) in coords.iter_mut().zip(self.coords.iter()) {
            *dst = num_traits::cast(src)?;
        }
        let mut out = Vector::from_coords(coords);
        if self.len2.is_some() {
            out.len2 = Some(out.sum_squares());
        }
        Some(out.checked())
    }

    /// Lossless-or-rounding conversion to `f64` coordinates.
    #[inline]
    pub fn to_f64(&self) -> Vector<f64, N> {
        Vector::from_coords(self.coords.map(|c| c.as_()))
    }

    /// Euclidean length in `f64`, scaled by the largest coordinate so that
    /// neither an integer `T` nor `f64` itself overflows on the way.
    fn length_f64(&self) -> f64 {
        let coords = self.to_f64().coords;
        let scale = coords.iter().fold(0.0f64, |m, c| m.max(c.abs()));
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }
        let sum: f64 = coords.iter().map(|c| (c / scale) * (c / scale)).sum();
        sum.sqrt() * scale
    }

    /// Unit vector in the same direction, or `None` for a zero (or
    /// non-finite) length. The cache is set to `1.0` without recomputation.
    pub fn normalized(&self) -> Option<Vector<f64, N>> {
        debug_assert!(self.is_valid());
        let len = self.length_f64();
        if len <= 0.0 || !len.is_finite() {
            return None;
        }
        let mut out = Vector::from_coords(self.coords.map(|c| c.as_() / len));
        out.len2 = Some(1.0);
        Some(out.checked())
    }

    #[inline]
    fn sum_squares(&self) -> T {
        self.coords.iter().fold(T::zero(), |acc, &c| acc + c * c)
    }

    #[inline]
    fn zip_map(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        Self::from_coords(std::array::from_fn(|i| f(self.coords[i], other.coords[i])))
    }

    /// Postcondition check shared by every producing operation.
    #[inline]
    fn checked(self) -> Self {
        debug_assert!(self.is_valid(), "operation produced invalid vector {self:?}");
        self
    }
}

impl<T: Scalar> Vector<T, 2> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self::from_coords([x, y])
    }
    #[inline]
    pub fn x(&self) -> T {
        self.coords[0]
    }
    #[inline]
    pub fn y(&self) -> T {
        self.coords[1]
    }

    /// Promote to 3D with `z = 0`. The squared length is unchanged, so the
    /// cache carries over.
    pub fn to_3d(&self) -> Vector3<T> {
        debug_assert!(self.is_valid());
        Vector3 {
            coords: [self.coords[0], self.coords[1], T::zero()],
            len2: self.len2,
        }
    }

    /// Counter-clockwise rotation by `radians`, evaluated in `f64`.
    pub fn rotate(&self, radians: f64) -> Vector2<f64> {
        debug_assert!(self.is_valid());
        let (s, c) = radians.sin_cos();
        let (x, y): (f64, f64) = (self.x().as_(), self.y().as_());
        Vector2::new(x * c - y * s, x * s + y * c).checked()
    }

    /// Perp-dot product `self.x·other.y − self.y·other.x` (z of the 3D cross).
    #[inline]
    pub fn perp_dot(&self, other: &Self) -> T {
        debug_assert!(self.is_valid() && other.is_valid());
        self.x() * other.y() - self.y() * other.x()
    }
}

impl<T: Scalar> Vector<T, 3> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_coords([x, y, z])
    }
    #[inline]
    pub fn x(&self) -> T {
        self.coords[0]
    }
    #[inline]
    pub fn y(&self) -> T {
        self.coords[1]
    }
    #[inline]
    pub fn z(&self) -> T {
        self.coords[2]
    }

    /// Right-handed vector product. The result's cache starts empty.
    pub fn cross(&self, other: &Self) -> Self {
        debug_assert!(self.is_valid() && other.is_valid());
        let [ax, ay, az] = self.coords;
        let [bx, by, bz] = other.coords;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx).checked()
    }

    /// Same direction rescaled to `new_len` (negative flips it), in scalar `U`.
    ///
    /// The cache is set to `new_len²` without recomputation. `None` for a
    /// zero (or non-finite) length.
    pub fn set_len<U>(&self, new_len: U) -> Option<Vector3<U>>
    where
        U: Scalar + Float,
        f64: AsPrimitive<U>,
    {
        debug_assert!(self.is_valid());
        let len = self.length_f64();
        if len <= 0.0 || !len.is_finite() {
            return None;
        }
        let k = new_len.as_() / len;
        let mut out = Vector3::from_coords(self.coords.map(|c| (c.as_() * k).as_()));
        out.len2 = Some(new_len * new_len);
        Some(out.checked())
    }
}

/// Elementwise product.
pub fn cord_mul<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> Vector<T, N> {
    debug_assert!(a.is_valid() && b.is_valid());
    a.zip_map(b, |x, y| x * y).checked()
}

/// Raise every coordinate to `exponent`.
///
/// Negative bases with fractional exponents give NaN and trip the validity check.
pub fn cord_pow<const N: usize>(a: &Vector<f64, N>, exponent: f64) -> Vector<f64, N> {
    debug_assert!(a.is_valid());
    Vector::from_coords(a.coords.map(|c| c.powf(exponent))).checked()
}
