use proptest::prelude::*;

use crate::line::{Line2, Line3};
use crate::vector::{Vector2, Vector3};

/// f64 values within [-50.0, 50.0], biased towards zeros, round numbers and
/// other edge cases.
pub fn scalar_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        prop_oneof![
            Just(0.0),
            Just(1.0),
            Just(-1.0),
            Just(10.0),
            Just(-10.0),
            Just(0.5),
            Just(-0.5),
            Just(std::f64::consts::PI),
            Just(-std::f64::consts::PI),
        ],
        -50.0..=50.0,
    ]
}

pub fn arbitrary_vector3() -> impl Strategy<Value = Vector3<f64>> {
    (scalar_strategy(), scalar_strategy(), scalar_strategy())
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

pub fn arbitrary_vector2() -> impl Strategy<Value = Vector2<f64>> {
    (scalar_strategy(), scalar_strategy()).prop_map(|(x, y)| Vector2::new(x, y))
}

pub fn arbitrary_nonzero_vector3() -> impl Strategy<Value = Vector3<f64>> {
    arbitrary_vector3().prop_filter("Non-zero vector", |v| v.peek_len2() > 1e-8)
}

pub fn arbitrary_nonzero_vector2() -> impl Strategy<Value = Vector2<f64>> {
    arbitrary_vector2().prop_filter("Non-zero vector", |v| v.peek_len2() > 1e-8)
}

/// Small integer vectors; squared lengths stay far from overflow.
pub fn arbitrary_int_vector3() -> impl Strategy<Value = Vector3<i64>> {
    (-1000i64..=1000, -1000i64..=1000, -1000i64..=1000).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

pub fn arbitrary_line3() -> impl Strategy<Value = Line3> {
    (arbitrary_vector3(), arbitrary_nonzero_vector3()).prop_map(|(s, d)| Line3::new(s, d))
}

pub fn arbitrary_line2() -> impl Strategy<Value = Line2> {
    (arbitrary_vector2(), arbitrary_nonzero_vector2()).prop_map(|(s, d)| Line2::new(s, d))
}
