//! Math errors

use crate::axis::Axis;
use crate::float_types::Real;
use std::fmt::Display;

/// All the ways a gmath operation can fail
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    /// (SingularMatrix) The matrix cannot be inverted or decomposed; carries the offending determinant
    SingularMatrix { determinant: Real },
    /// (ZeroLength) A direction-valued input had length below the tolerance
    ZeroLength,
    /// (NonUniformScale) The transform's scale cannot be propagated through a rotation without shearing
    NonUniformScale { x: Real, y: Real, z: Real },
    /// (InvalidAxisPair) Aim axes must name two different cartesian letters
    InvalidAxisPair { primary: Axis, secondary: Axis },
}

impl Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::SingularMatrix { determinant } => write!(
                f,
                "(SingularMatrix) The matrix is singular within tolerance (determinant = {})",
                determinant
            ),
            MathError::ZeroLength => {
                write!(f, "(ZeroLength) A direction input has length below the tolerance")
            },
            MathError::NonUniformScale { x, y, z } => write!(
                f,
                "(NonUniformScale) Scale ({}, {}, {}) is non-uniform and would shear through this rotation; use Matrix4 instead",
                x, y, z
            ),
            MathError::InvalidAxisPair { primary, secondary } => write!(
                f,
                "(InvalidAxisPair) Aim axes must differ: primary {:?} and secondary {:?} share a letter",
                primary, secondary
            ),
        }
    }
}
