//! 4D vector.

use crate::float_types::{Real, almost_equal, tolerance};
use std::fmt::Display;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A homogeneous 4-component vector. All four components take part in the
/// arithmetic, dot product and normalization.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vector4 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
    pub w: Real,
}

impl Vector4 {
    pub const ZERO: Vector4 = Vector4::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Vector4 { x, y, z, w }
    }

    #[inline]
    pub fn dot(&self, other: &Vector4) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length(&self) -> Real {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn squared_length(&self) -> Real {
        self.dot(self)
    }

    /// Guarded normalization over all four components; degenerate input is
    /// returned unchanged.
    pub fn normalize(&self) -> Vector4 {
        let len = self.length();
        let nlen = if len <= tolerance() { 1.0 } else { 1.0 / len };
        Vector4::new(self.x * nlen, self.y * nlen, self.z * nlen, self.w * nlen)
    }

    /// In-place [`normalize`](Self::normalize).
    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    pub fn almost_equal(&self, other: &Vector4, precision: Real) -> bool {
        almost_equal(self.x, other.x, precision)
            && almost_equal(self.y, other.y, precision)
            && almost_equal(self.z, other.z, precision)
            && almost_equal(self.w, other.w, precision)
    }
}

impl From<[Real; 4]> for Vector4 {
    #[inline]
    fn from(values: [Real; 4]) -> Self {
        Vector4::new(values[0], values[1], values[2], values[3])
    }
}

impl From<Vector4> for [Real; 4] {
    #[inline]
    fn from(v: Vector4) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

impl Add for Vector4 {
    type Output = Vector4;
    #[inline]
    fn add(self, other: Vector4) -> Vector4 {
        Vector4::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl AddAssign for Vector4 {
    #[inline]
    fn add_assign(&mut self, other: Vector4) {
        *self = *self + other;
    }
}

impl Sub for Vector4 {
    type Output = Vector4;
    #[inline]
    fn sub(self, other: Vector4) -> Vector4 {
        Vector4::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl SubAssign for Vector4 {
    #[inline]
    fn sub_assign(&mut self, other: Vector4) {
        *self = *self - other;
    }
}

impl Neg for Vector4 {
    type Output = Vector4;
    #[inline]
    fn neg(self) -> Vector4 {
        Vector4::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<Real> for Vector4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, scalar: Real) -> Vector4 {
        Vector4::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl MulAssign<Real> for Vector4 {
    #[inline]
    fn mul_assign(&mut self, scalar: Real) {
        *self = *self * scalar;
    }
}

/// Division by zero yields `NAN` components.
impl Div<Real> for Vector4 {
    type Output = Vector4;
    fn div(self, scalar: Real) -> Vector4 {
        if scalar == 0.0 {
            Vector4::new(Real::NAN, Real::NAN, Real::NAN, Real::NAN)
        } else {
            Vector4::new(
                self.x / scalar,
                self.y / scalar,
                self.z / scalar,
                self.w / scalar,
            )
        }
    }
}

impl DivAssign<Real> for Vector4 {
    fn div_assign(&mut self, scalar: Real) {
        *self = *self / scalar;
    }
}

impl Index<usize> for Vector4 {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vector4 index out of range: {}", i),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    fn index_mut(&mut self, i: usize) -> &mut Real {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vector4 index out of range: {}", i),
        }
    }
}

impl Display for Vector4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector4({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl approx::AbsDiffEq for Vector4 {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        Real::abs_diff_eq(&self.x, &other.x, epsilon)
            && Real::abs_diff_eq(&self.y, &other.y, epsilon)
            && Real::abs_diff_eq(&self.z, &other.z, epsilon)
            && Real::abs_diff_eq(&self.w, &other.w, epsilon)
    }
}

impl approx::RelativeEq for Vector4 {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        Real::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && Real::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && Real::relative_eq(&self.z, &other.z, epsilon, max_relative)
            && Real::relative_eq(&self.w, &other.w, epsilon, max_relative)
    }
}

impl approx::UlpsEq for Vector4 {
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        Real::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && Real::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
            && Real::ulps_eq(&self.z, &other.z, epsilon, max_ulps)
            && Real::ulps_eq(&self.w, &other.w, epsilon, max_ulps)
    }
}
