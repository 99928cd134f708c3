//! Euler angle triple with an explicit angle unit.
//!
//! The triple does not carry a rotation order; matrix and quaternion
//! constructors take a [`RotationOrder`](crate::axis::RotationOrder)
//! parameter alongside it.

use crate::float_types::{Real, almost_equal, to_degrees, to_radians, tolerance};
use crate::vector3::Vector3;
use std::fmt::Display;
use std::ops::{Index, IndexMut};

/// Whether the stored angles are degrees or radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    Degrees,
    #[default]
    Radians,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    pub x: Real,
    pub y: Real,
    pub z: Real,
    unit: AngleUnit,
}

impl Euler {
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real, unit: AngleUnit) -> Self {
        Euler { x, y, z, unit }
    }

    #[inline]
    pub const fn radians(x: Real, y: Real, z: Real) -> Self {
        Euler::new(x, y, z, AngleUnit::Radians)
    }

    #[inline]
    pub const fn degrees(x: Real, y: Real, z: Real) -> Self {
        Euler::new(x, y, z, AngleUnit::Degrees)
    }

    #[inline]
    pub fn from_vector(v: &Vector3, unit: AngleUnit) -> Self {
        Euler::new(v.x, v.y, v.z, unit)
    }

    #[inline]
    pub const fn unit(&self) -> AngleUnit {
        self.unit
    }

    /// Change the unit, converting the stored angles when it differs.
    pub fn set_unit(&mut self, unit: AngleUnit) {
        if self.unit != unit {
            *self = match unit {
                AngleUnit::Degrees => self.to_degrees(),
                AngleUnit::Radians => self.to_radians(),
            };
        }
    }

    /// A copy converted to degrees (no-op when already degrees).
    pub fn to_degrees(&self) -> Euler {
        match self.unit {
            AngleUnit::Degrees => *self,
            AngleUnit::Radians => Euler::degrees(
                to_degrees(self.x),
                to_degrees(self.y),
                to_degrees(self.z),
            ),
        }
    }

    /// A copy converted to radians (no-op when already radians).
    pub fn to_radians(&self) -> Euler {
        match self.unit {
            AngleUnit::Radians => *self,
            AngleUnit::Degrees => Euler::radians(
                to_radians(self.x),
                to_radians(self.y),
                to_radians(self.z),
            ),
        }
    }

    /// The raw angles as a vector, no unit conversion.
    #[inline]
    pub const fn to_vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Componentwise comparison of the raw angles. The units are not
    /// reconciled; compare triples carrying the same unit.
    pub fn almost_equal(&self, other: &Euler, precision: Real) -> bool {
        almost_equal(self.x, other.x, precision)
            && almost_equal(self.y, other.y, precision)
            && almost_equal(self.z, other.z, precision)
    }
}

impl Index<usize> for Euler {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Euler index out of range: {}", i),
        }
    }
}

impl IndexMut<usize> for Euler {
    fn index_mut(&mut self, i: usize) -> &mut Real {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Euler index out of range: {}", i),
        }
    }
}

impl Display for Euler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Euler({}, {}, {} {:?})", self.x, self.y, self.z, self.unit)
    }
}

impl approx::AbsDiffEq for Euler {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.unit == other.unit
            && Real::abs_diff_eq(&self.x, &other.x, epsilon)
            && Real::abs_diff_eq(&self.y, &other.y, epsilon)
            && Real::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl approx::RelativeEq for Euler {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.unit == other.unit
            && Real::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && Real::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && Real::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}

impl approx::UlpsEq for Euler {
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.unit == other.unit
            && Real::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && Real::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
            && Real::ulps_eq(&self.z, &other.z, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::float_types::PI;
    use approx::assert_relative_eq;

    #[test]
    fn unit_conversion_round_trip() {
        let e = Euler::degrees(90.0, 45.0, -30.0);
        let r = e.to_radians();
        assert_eq!(r.unit(), AngleUnit::Radians);
        assert_relative_eq!(r.x, PI / 2.0, epsilon = 1e-12);
        let back = r.to_degrees();
        assert!(back.almost_equal(&e, 1e-9));
    }

    #[test]
    fn set_unit_converts_in_place() {
        let mut e = Euler::radians(PI, 0.0, 0.0);
        e.set_unit(AngleUnit::Degrees);
        assert_relative_eq!(e.x, 180.0, epsilon = 1e-9);
        // setting the same unit again is a no-op
        e.set_unit(AngleUnit::Degrees);
        assert_relative_eq!(e.x, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn to_vector_keeps_raw_angles() {
        let e = Euler::degrees(10.0, 20.0, 30.0);
        assert_eq!(e.to_vector(), Vector3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn default_is_zero_radians() {
        let e = Euler::default();
        assert_eq!(e.unit(), AngleUnit::Radians);
        assert_eq!(e.to_vector(), Vector3::ZERO);
    }
}
