//! Test support library
//! Provides various helper functions & utilities for tests.

use gmath::{Matrix3, RotationOrder, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// A spread of rotations covering every order, both angle signs and a
/// near-quarter-turn Y that sits on the gimbal pole for the Y-middle
/// orders.
pub fn sample_rotations() -> Vec<Matrix3> {
    let mut out = Vec::new();
    for order in RotationOrder::ALL {
        out.push(Matrix3::from_euler(0.3, -0.7, 1.1, order));
        out.push(Matrix3::from_euler(-2.1, 0.4, -0.9, order));
        out.push(Matrix3::from_euler(0.0, 1.5705, 0.0, order));
    }
    out
}
