//! 2D vector.

use crate::float_types::{Real, acos_safe, almost_equal, tolerance};
use std::fmt::Display;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vector2 {
    pub x: Real,
    pub y: Real,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);
    pub const ONE: Vector2 = Vector2::new(1.0, 1.0);
    pub const X_AXIS: Vector2 = Vector2::new(1.0, 0.0);
    pub const Y_AXIS: Vector2 = Vector2::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Vector2 { x, y }
    }

    #[inline]
    pub fn dot(&self, other: &Vector2) -> Real {
        self.x * other.x + self.y * other.y
    }

    /// The scalar z component of the 3D cross product of the two vectors
    /// lifted into the XY plane. Positive when `other` lies counterclockwise
    /// of `self`.
    #[inline]
    pub fn cross(&self, other: &Vector2) -> Real {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn length(&self) -> Real {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn squared_length(&self) -> Real {
        self.dot(self)
    }

    #[inline]
    pub fn distance(&self, other: &Vector2) -> Real {
        (*other - *self).length()
    }

    /// Guarded normalization: degenerate input (length at or below
    /// [`tolerance`]) is returned unchanged.
    pub fn normalize(&self) -> Vector2 {
        let len = self.length();
        let nlen = if len <= tolerance() { 1.0 } else { 1.0 / len };
        Vector2::new(self.x * nlen, self.y * nlen)
    }

    /// In-place [`normalize`](Self::normalize).
    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    /// Angle to `other` in radians, in `[0, π]`, clamped before `acos`.
    pub fn angle(&self, other: &Vector2) -> Real {
        acos_safe(self.normalize().dot(&other.normalize()))
    }

    /// Linear interpolation, `t` unclamped.
    #[inline]
    pub fn lerp(&self, other: &Vector2, t: Real) -> Vector2 {
        (*other - *self) * t + *self
    }

    pub fn almost_equal(&self, other: &Vector2, precision: Real) -> bool {
        almost_equal(self.x, other.x, precision) && almost_equal(self.y, other.y, precision)
    }
}

impl From<[Real; 2]> for Vector2 {
    #[inline]
    fn from(values: [Real; 2]) -> Self {
        Vector2::new(values[0], values[1])
    }
}

impl From<Vector2> for [Real; 2] {
    #[inline]
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    #[inline]
    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, other: Vector2) {
        *self = *self + other;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    #[inline]
    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, other: Vector2) {
        *self = *self - other;
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    #[inline]
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<Real> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, scalar: Real) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl MulAssign<Real> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, scalar: Real) {
        *self = *self * scalar;
    }
}

/// Componentwise product.
impl Mul for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x * other.x, self.y * other.y)
    }
}

impl MulAssign for Vector2 {
    #[inline]
    fn mul_assign(&mut self, other: Vector2) {
        *self = *self * other;
    }
}

/// Division by zero yields `NAN` components.
impl Div<Real> for Vector2 {
    type Output = Vector2;
    fn div(self, scalar: Real) -> Vector2 {
        if scalar == 0.0 {
            Vector2::new(Real::NAN, Real::NAN)
        } else {
            Vector2::new(self.x / scalar, self.y / scalar)
        }
    }
}

impl DivAssign<Real> for Vector2 {
    fn div_assign(&mut self, scalar: Real) {
        *self = *self / scalar;
    }
}

/// Componentwise division; zero divisor components yield `NAN` in that slot.
impl Div for Vector2 {
    type Output = Vector2;
    fn div(self, other: Vector2) -> Vector2 {
        let safe = |a: Real, b: Real| if b == 0.0 { Real::NAN } else { a / b };
        Vector2::new(safe(self.x, other.x), safe(self.y, other.y))
    }
}

impl DivAssign for Vector2 {
    fn div_assign(&mut self, other: Vector2) {
        *self = *self / other;
    }
}

impl Index<usize> for Vector2 {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 index out of range: {}", i),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    fn index_mut(&mut self, i: usize) -> &mut Real {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vector2 index out of range: {}", i),
        }
    }
}

impl Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector2({}, {})", self.x, self.y)
    }
}

impl approx::AbsDiffEq for Vector2 {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        Real::abs_diff_eq(&self.x, &other.x, epsilon)
            && Real::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl approx::RelativeEq for Vector2 {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        Real::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && Real::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}

impl approx::UlpsEq for Vector2 {
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        Real::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && Real::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cross_sign_gives_winding() {
        assert_eq!(Vector2::X_AXIS.cross(&Vector2::Y_AXIS), 1.0);
        assert_eq!(Vector2::Y_AXIS.cross(&Vector2::X_AXIS), -1.0);
    }

    #[test]
    fn normalize_and_fallback() {
        let v = Vector2::new(3.0, 4.0).normalize();
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
        assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
    }

    #[test]
    fn lerp_midpoint() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(3.0, 5.0);
        assert_eq!(a.lerp(&b, 0.5), Vector2::new(2.0, 3.0));
    }

    #[test]
    fn division_by_zero_yields_nan() {
        let v = Vector2::ONE / 0.0;
        assert!(v.x.is_nan() && v.y.is_nan());
    }

    #[test]
    fn angle_between_axes() {
        assert_relative_eq!(
            Vector2::X_AXIS.angle(&Vector2::Y_AXIS),
            crate::float_types::FRAC_PI_2
        );
    }
}
