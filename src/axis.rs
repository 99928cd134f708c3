//! Signed cartesian axes, euler rotation orders and cartesian planes.

use crate::vector3::Vector3;

/// A signed cartesian axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    PosX,
    PosY,
    PosZ,
    NegX,
    NegY,
    NegZ,
}

impl Axis {
    /// The same axis with its sign flipped.
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Axis::PosX => Axis::NegX,
            Axis::PosY => Axis::NegY,
            Axis::PosZ => Axis::NegZ,
            Axis::NegX => Axis::PosX,
            Axis::NegY => Axis::PosY,
            Axis::NegZ => Axis::PosZ,
        }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Axis::NegX | Axis::NegY | Axis::NegZ)
    }

    /// True when both axes lie on the same cartesian letter, e.g. `PosX`/`NegX`.
    #[inline]
    pub const fn same_letter(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Axis::PosX | Axis::NegX, Axis::PosX | Axis::NegX)
                | (Axis::PosY | Axis::NegY, Axis::PosY | Axis::NegY)
                | (Axis::PosZ | Axis::NegZ, Axis::PosZ | Axis::NegZ)
        )
    }

    /// The unit vector this axis points along, sign included.
    #[inline]
    pub const fn direction(self) -> Vector3 {
        match self {
            Axis::PosX => Vector3::X_AXIS,
            Axis::PosY => Vector3::Y_AXIS,
            Axis::PosZ => Vector3::Z_AXIS,
            Axis::NegX => Vector3::new(-1.0, 0.0, 0.0),
            Axis::NegY => Vector3::new(0.0, -1.0, 0.0),
            Axis::NegZ => Vector3::new(0.0, 0.0, -1.0),
        }
    }
}

/// The order the three elemental rotations are applied to a row vector.
///
/// `XYZ` rotates about X first, then Y, then Z; the corresponding row-major
/// matrix is the product `X · Y · Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationOrder {
    XYZ,
    XZY,
    YXZ,
    YZX,
    ZXY,
    ZYX,
}

impl RotationOrder {
    /// All six orders, handy for exhaustive tests.
    pub const ALL: [RotationOrder; 6] = [
        RotationOrder::XYZ,
        RotationOrder::XZY,
        RotationOrder::YXZ,
        RotationOrder::YZX,
        RotationOrder::ZXY,
        RotationOrder::ZYX,
    ];
}

/// One of the three planes spanned by a pair of cartesian axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartesianPlane {
    XY,
    YZ,
    ZX,
}

impl CartesianPlane {
    /// The axis normal to the plane.
    #[inline]
    pub const fn normal(self) -> Vector3 {
        match self {
            CartesianPlane::XY => Vector3::Z_AXIS,
            CartesianPlane::YZ => Vector3::X_AXIS,
            CartesianPlane::ZX => Vector3::Y_AXIS,
        }
    }

    /// The in-plane (primary, secondary) axis pair used when mirroring a
    /// frame across this plane.
    #[inline]
    pub const fn mirror_axes(self) -> (Axis, Axis) {
        match self {
            CartesianPlane::XY => (Axis::PosX, Axis::PosY),
            CartesianPlane::YZ => (Axis::PosY, Axis::PosZ),
            CartesianPlane::ZX => (Axis::PosZ, Axis::PosX),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flip_and_sign() {
        assert_eq!(Axis::PosX.flipped(), Axis::NegX);
        assert_eq!(Axis::NegZ.flipped(), Axis::PosZ);
        assert!(Axis::NegY.is_negative());
        assert!(!Axis::PosY.is_negative());
    }

    #[test]
    fn same_letter_pairs() {
        assert!(Axis::PosX.same_letter(Axis::NegX));
        assert!(Axis::PosZ.same_letter(Axis::PosZ));
        assert!(!Axis::PosX.same_letter(Axis::PosY));
    }

    #[test]
    fn directions_are_signed_units() {
        assert_eq!(Axis::PosY.direction(), Vector3::Y_AXIS);
        assert_eq!(Axis::NegY.direction(), -Vector3::Y_AXIS);
    }

    #[test]
    fn plane_normals() {
        assert_eq!(CartesianPlane::XY.normal(), Vector3::Z_AXIS);
        assert_eq!(CartesianPlane::YZ.normal(), Vector3::X_AXIS);
        assert_eq!(CartesianPlane::ZX.normal(), Vector3::Y_AXIS);
    }
}
