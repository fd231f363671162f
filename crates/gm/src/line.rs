//! Lines: a start point and a direction, by value.
//!
//! `Line2` and `Line3` are distinct types; queries live in [`crate::algo`].

use crate::vector::Vector;

/// Immutable point + direction pair. Used as a ray where only the forward
/// half (`t > 0` in [`Line::at`]) matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line<const N: usize> {
    start: Vector<f64, N>,
    direction: Vector<f64, N>,
}

pub type Line2 = Line<2>;
pub type Line3 = Line<3>;

impl<const N: usize> Line<N> {
    /// The direction is not normalized and may have any non-zero length.
    pub fn new(start: Vector<f64, N>, direction: Vector<f64, N>) -> Self {
        let line = Self { start, direction };
        debug_assert!(line.is_valid(), "invalid line {line:?}");
        line
    }

    #[inline]
    pub fn start(&self) -> Vector<f64, N> {
        self.start
    }

    #[inline]
    pub fn direction(&self) -> Vector<f64, N> {
        self.direction
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start.is_valid() && self.direction.is_valid()
    }

    /// Point `start + direction·t`.
    #[inline]
    pub fn at(&self, t: f64) -> Vector<f64, N> {
        self.start + self.direction * t
    }
}
