//! 3D vector in the crate's row-vector convention.

use crate::axis::CartesianPlane;
use crate::float_types::{Real, acos_safe, almost_equal, tolerance};
use crate::matrix3::Matrix3;
use crate::matrix4::Matrix4;
use crate::quaternion::Quaternion;
use std::fmt::Display;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A point or direction in 3D space.
///
/// Transforms apply on the right: `v * m` treats `v` as a row vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vector3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const ONE: Vector3 = Vector3::new(1.0, 1.0, 1.0);
    pub const X_AXIS: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    pub const Y_AXIS: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const Z_AXIS: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Vector3 { x, y, z }
    }

    #[inline]
    pub fn dot(&self, other: &Vector3) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Cross product followed by normalization.
    #[inline]
    pub fn cross_normalize(&self, other: &Vector3) -> Vector3 {
        self.cross(other).normalize()
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
    pub fn distance(&self, other: &Vector3) -> Real {
        (*other - *self).length()
    }

    #[inline]
    pub fn squared_distance(&self, other: &Vector3) -> Real {
        (*other - *self).squared_length()
    }

    /// **Mathematical Foundation: Guarded Normalization**
    ///
    /// Scale to unit length:
    /// ```text
    /// v̂ = v / |v|
    /// ```
    /// When `|v|` is at or below [`tolerance`] the multiplier falls back to
    /// `1.0` and the vector is returned unchanged, so degenerate input never
    /// produces NaN.
    pub fn normalize(&self) -> Vector3 {
        let len = self.length();
        let nlen = if len <= tolerance() { 1.0 } else { 1.0 / len };
        Vector3::new(self.x * nlen, self.y * nlen, self.z * nlen)
    }

    /// In-place [`normalize`](Self::normalize).
    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    /// Angle to `other` in radians, in `[0, π]`.
    ///
    /// Both inputs are normalized first and the dot product is clamped before
    /// `acos`, so near-parallel vectors cannot produce NaN.
    pub fn angle(&self, other: &Vector3) -> Real {
        acos_safe(self.normalize().dot(&other.normalize()))
    }

    /// **Mathematical Foundation: Reflection About a Unit Normal**
    ///
    /// ```text
    /// v' = 2 (v · n̂) n̂ - v
    /// ```
    /// The normal component of `v` is kept, the tangential part reversed.
    /// `normal` is expected to be unit length; it is used as given.
    pub fn reflect(&self, normal: &Vector3) -> Vector3 {
        *normal * (2.0 * self.dot(normal)) - *self
    }

    /// In-place [`reflect`](Self::reflect).
    pub fn reflect_mut(&mut self, normal: &Vector3) {
        *self = self.reflect(normal);
    }

    /// **Mathematical Foundation: Snell Refraction**
    ///
    /// For a unit normal `n̂` and index-of-refraction ratio `eta`:
    /// ```text
    /// k = 1 - eta² (1 - (v · n̂)²)
    /// v' = eta v - (eta (v · n̂) + √k) n̂
    /// ```
    /// `k < tolerance` means total internal reflection; the refracted ray
    /// does not exist and [`Vector3::ZERO`] is returned.
    pub fn refract(&self, normal: &Vector3, eta: Real) -> Vector3 {
        let dot = self.dot(normal);
        let k = 1.0 - eta * eta * (1.0 - dot * dot);
        if k < tolerance() {
            Vector3::ZERO
        } else {
            *self * eta - *normal * (eta * dot + k.sqrt())
        }
    }

    /// In-place [`refract`](Self::refract).
    pub fn refract_mut(&mut self, normal: &Vector3, eta: Real) {
        *self = self.refract(normal, eta);
    }

    /// Mirror across the plane with the given normal (normalized here,
    /// unlike [`reflect`](Self::reflect)): the normal component flips, the
    /// tangential part is kept.
    pub fn mirror(&self, normal: &Vector3) -> Vector3 {
        let n = normal.normalize();
        *self - n * (2.0 * self.dot(&n))
    }

    /// Mirror across a cartesian plane: the coordinate along the plane
    /// normal flips sign.
    pub fn mirror_plane(&self, plane: CartesianPlane) -> Vector3 {
        match plane {
            CartesianPlane::XY => Vector3::new(self.x, self.y, -self.z),
            CartesianPlane::YZ => Vector3::new(-self.x, self.y, self.z),
            CartesianPlane::ZX => Vector3::new(self.x, -self.y, self.z),
        }
    }

    /// Linear interpolation, `t` unclamped: `self + (other - self) * t`.
    #[inline]
    pub fn lerp(&self, other: &Vector3, t: Real) -> Vector3 {
        (*other - *self) * t + *self
    }

    /// Componentwise reciprocal with IEEE semantics (zero components give
    /// `±inf`). [`Xfo::inverse`](crate::xfo::Xfo::inverse) relies on this.
    #[inline]
    pub fn reciprocal(&self) -> Vector3 {
        Vector3::new(1.0 / self.x, 1.0 / self.y, 1.0 / self.z)
    }

    /// Rotate by a unit quaternion; equal to `*self * q.to_matrix3()`.
    #[inline]
    pub fn rotate(&self, q: &Quaternion) -> Vector3 {
        q.rotate(self)
    }

    /// Componentwise comparison with an explicit precision.
    pub fn almost_equal(&self, other: &Vector3, precision: Real) -> bool {
        almost_equal(self.x, other.x, precision)
            && almost_equal(self.y, other.y, precision)
            && almost_equal(self.z, other.z, precision)
    }
}

impl From<[Real; 3]> for Vector3 {
    #[inline]
    fn from(values: [Real; 3]) -> Self {
        Vector3::new(values[0], values[1], values[2])
    }
}

impl From<Vector3> for [Real; 3] {
    #[inline]
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, other: Vector3) {
        *self = *self + other;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, other: Vector3) {
        *self = *self - other;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<Real> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, scalar: Real) -> Vector3 {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl MulAssign<Real> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, scalar: Real) {
        *self = *self * scalar;
    }
}

/// Componentwise product.
impl Mul for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl MulAssign for Vector3 {
    #[inline]
    fn mul_assign(&mut self, other: Vector3) {
        *self = *self * other;
    }
}

/// Division by zero yields `NAN` components.
impl Div<Real> for Vector3 {
    type Output = Vector3;
    fn div(self, scalar: Real) -> Vector3 {
        if scalar == 0.0 {
            Vector3::new(Real::NAN, Real::NAN, Real::NAN)
        } else {
            Vector3::new(self.x / scalar, self.y / scalar, self.z / scalar)
        }
    }
}

impl DivAssign<Real> for Vector3 {
    fn div_assign(&mut self, scalar: Real) {
        *self = *self / scalar;
    }
}

/// Componentwise division; zero components in the divisor yield `NAN` in
/// that slot.
impl Div for Vector3 {
    type Output = Vector3;
    fn div(self, other: Vector3) -> Vector3 {
        let safe = |a: Real, b: Real| if b == 0.0 { Real::NAN } else { a / b };
        Vector3::new(safe(self.x, other.x), safe(self.y, other.y), safe(self.z, other.z))
    }
}

impl DivAssign for Vector3 {
    fn div_assign(&mut self, other: Vector3) {
        *self = *self / other;
    }
}

/// Row-vector transform: `v' = v · M`, so `v'ⱼ = Σᵢ vᵢ · m[i][j]`.
impl Mul<Matrix3> for Vector3 {
    type Output = Vector3;
    fn mul(self, mat: Matrix3) -> Vector3 {
        let m = &mat.data;
        Vector3::new(
            m[0] * self.x + m[3] * self.y + m[6] * self.z,
            m[1] * self.x + m[4] * self.y + m[7] * self.z,
            m[2] * self.x + m[5] * self.y + m[8] * self.z,
        )
    }
}

impl MulAssign<Matrix3> for Vector3 {
    fn mul_assign(&mut self, mat: Matrix3) {
        *self = *self * mat;
    }
}

/// Affine row-vector transform with implicit `w = 1`: the translation row
/// is added after the upper 3×3.
impl Mul<Matrix4> for Vector3 {
    type Output = Vector3;
    fn mul(self, mat: Matrix4) -> Vector3 {
        let m = &mat.data;
        Vector3::new(
            m[0] * self.x + m[4] * self.y + m[8] * self.z + m[12],
            m[1] * self.x + m[5] * self.y + m[9] * self.z + m[13],
            m[2] * self.x + m[6] * self.y + m[10] * self.z + m[14],
        )
    }
}

impl MulAssign<Matrix4> for Vector3 {
    fn mul_assign(&mut self, mat: Matrix4) {
        *self = *self * mat;
    }
}

impl Index<usize> for Vector3 {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {}", i),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, i: usize) -> &mut Real {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of range: {}", i),
        }
    }
}

impl Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector3({}, {}, {})", self.x, self.y, self.z)
    }
}

impl approx::AbsDiffEq for Vector3 {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        Real::abs_diff_eq(&self.x, &other.x, epsilon)
            && Real::abs_diff_eq(&self.y, &other.y, epsilon)
            && Real::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl approx::RelativeEq for Vector3 {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        Real::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && Real::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && Real::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}

impl approx::UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        Real::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && Real::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
            && Real::ulps_eq(&self.z, &other.z, epsilon, max_ulps)
    }
}
