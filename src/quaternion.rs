//! Unit quaternion rotation.
//!
//! **Mathematical Foundation: Quaternion Algebra**
//!
//! `q = (x, y, z, w)` with the scalar part last. The Hamilton product is
//! the standard one, so the RIGHT factor of a product acts first:
//! `(q1 * q2).rotate(v) == q1.rotate(q2.rotate(v))`. In this crate's
//! row-matrix convention that reads `M(q1 * q2) = M(q2) * M(q1)`.
//! For any unit quaternion, `q.rotate(v) == v * q.to_matrix3()`.

use crate::axis::{Axis, CartesianPlane, RotationOrder};
use crate::errors::MathError;
use crate::euler::Euler;
use crate::float_types::{Real, acos_safe, almost_equal, tolerance};
use crate::matrix3::Matrix3;
use crate::matrix4::Matrix4;
use crate::queries::aim;
use crate::vector3::Vector3;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Quaternion {
    pub x: Real,
    pub y: Real,
    pub z: Real,
    pub w: Real,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    #[inline]
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Quaternion { x, y, z, w }
    }

    /// Rotation by `angle` radians about `axis` (normalized here): `w =
    /// cos(θ/2)`, vector part `û · sin(θ/2)`. An axis shorter than the
    /// tolerance yields [`MathError::ZeroLength`].
    pub fn from_axis_angle(axis: &Vector3, angle: Real) -> Result<Quaternion, MathError> {
        if axis.length() <= tolerance() {
            return Err(MathError::ZeroLength);
        }
        let u = axis.normalize();
        let (s, c) = (angle * 0.5).sin_cos();
        Ok(Quaternion::new(u.x * s, u.y * s, u.z * s, c))
    }

    /// Rotation from euler angles in radians, applied in `order`; agrees
    /// with [`Matrix3::from_euler`] for every order.
    pub fn from_euler(x: Real, y: Real, z: Real, order: RotationOrder) -> Quaternion {
        let (sx, cx) = (x * 0.5).sin_cos();
        let (sy, cy) = (y * 0.5).sin_cos();
        let (sz, cz) = (z * 0.5).sin_cos();
        let qx = Quaternion::new(sx, 0.0, 0.0, cx);
        let qy = Quaternion::new(0.0, sy, 0.0, cy);
        let qz = Quaternion::new(0.0, 0.0, sz, cz);
        // right factor acts first, so the product order is reversed
        match order {
            RotationOrder::XYZ => qz * qy * qx,
            RotationOrder::XZY => qy * qz * qx,
            RotationOrder::YXZ => qz * qx * qy,
            RotationOrder::YZX => qx * qz * qy,
            RotationOrder::ZXY => qy * qx * qz,
            RotationOrder::ZYX => qx * qy * qz,
        }
    }

    /// **Mathematical Foundation: Shoemake Trace Extraction**
    ///
    /// For a positive trace the scalar part dominates and all components
    /// divide out of `w`; otherwise the largest diagonal entry picks the
    /// dominant vector component and the off-diagonal sums recover the
    /// rest. Expects a pure rotation matrix.
    pub fn from_matrix3(m: &Matrix3) -> Quaternion {
        let d = &m.data;
        let trace = d[0] + d[4] + d[8];
        if trace > 0.0 {
            let root = (trace + 1.0).sqrt();
            let w = 0.5 * root;
            let root = 0.5 / root;
            Quaternion::new(
                (d[5] - d[7]) * root,
                (d[6] - d[2]) * root,
                (d[1] - d[3]) * root,
                w,
            )
        } else {
            const NEXT: [usize; 3] = [1, 2, 0];
            let mut i = 0;
            if d[4] > d[0] {
                i = 1;
            }
            if d[8] > d[i * 3 + i] {
                i = 2;
            }
            let j = NEXT[i];
            let k = NEXT[j];
            let root = (d[i * 3 + i] - d[j * 3 + j] - d[k * 3 + k] + 1.0).sqrt();
            let mut v = [0.0; 3];
            v[i] = 0.5 * root;
            let root = 0.5 / root;
            let w = (d[j * 3 + k] - d[k * 3 + j]) * root;
            v[j] = (d[i * 3 + j] + d[j * 3 + i]) * root;
            v[k] = (d[i * 3 + k] + d[k * 3 + i]) * root;
            Quaternion::new(v[0], v[1], v[2], w)
        }
    }

    /// Reads the upper 3×3 of `m`.
    pub fn from_matrix4(m: &Matrix4) -> Quaternion {
        Quaternion::from_matrix3(&m.to_matrix3())
    }

    /// Rotation axis and angle in radians. A vector part collapsing under
    /// the tolerance carries no usable axis; the sentinel `(X_AXIS, 0.0)`
    /// comes back instead.
    pub fn to_axis_angle(&self) -> (Vector3, Real) {
        let sqr = self.x * self.x + self.y * self.y + self.z * self.z;
        if sqr > tolerance() {
            let inv_len = 1.0 / sqr.sqrt();
            (
                Vector3::new(self.x * inv_len, self.y * inv_len, self.z * inv_len),
                2.0 * acos_safe(self.w),
            )
        } else {
            (Vector3::X_AXIS, 0.0)
        }
    }

    /// Row rotation matrix of this quaternion (expects unit length).
    pub fn to_matrix3(&self) -> Matrix3 {
        let xx = 2.0 * self.x * self.x;
        let yy = 2.0 * self.y * self.y;
        let zz = 2.0 * self.z * self.z;
        let xy = 2.0 * self.x * self.y;
        let xz = 2.0 * self.x * self.z;
        let yz = 2.0 * self.y * self.z;
        let xw = 2.0 * self.x * self.w;
        let yw = 2.0 * self.y * self.w;
        let zw = 2.0 * self.z * self.w;
        Matrix3::new(
            1.0 - yy - zz,
            xy + zw,
            xz - yw,
            xy - zw,
            1.0 - xx - zz,
            yz + xw,
            xz + yw,
            yz - xw,
            1.0 - xx - yy,
        )
    }

    /// [`to_matrix3`](Self::to_matrix3) with zero translation.
    pub fn to_matrix4(&self) -> Matrix4 {
        Matrix4::from_matrix3(&self.to_matrix3())
    }

    /// See [`Matrix3::to_euler`].
    pub fn to_euler(&self, order: RotationOrder) -> Euler {
        self.to_matrix3().to_euler(order)
    }

    #[inline]
    pub fn dot(&self, other: &Quaternion) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn squared_length(&self) -> Real {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> Real {
        self.squared_length().sqrt()
    }

    /// Unit quaternion with the same rotation. A length within tolerance
    /// of zero carries no rotation at all; the identity comes back
    /// (documented sentinel).
    pub fn normalize(&self) -> Quaternion {
        let len = self.length();
        if len <= tolerance() {
            Quaternion::IDENTITY
        } else {
            *self * (1.0 / len)
        }
    }

    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    #[inline]
    pub const fn conjugate(&self) -> Quaternion {
        Quaternion::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Conjugate over squared length; for a unit quaternion this is the
    /// conjugate itself. Degenerate length falls back to the identity,
    /// matching [`normalize`](Self::normalize).
    pub fn inverse(&self) -> Quaternion {
        let sqr = self.squared_length();
        if sqr <= tolerance() {
            Quaternion::IDENTITY
        } else {
            self.conjugate() * (1.0 / sqr)
        }
    }

    /// Rotate `v` by this quaternion (expects unit length).
    ///
    /// Optimized sandwich product `q v q̄` without building the matrix:
    /// `v' = v + 2w·(qᵥ × v) + 2·qᵥ × (qᵥ × v)`.
    pub fn rotate(&self, v: &Vector3) -> Vector3 {
        let tx = self.z * v.y - self.y * v.z;
        let ty = self.x * v.z - self.z * v.x;
        let tz = self.y * v.x - self.x * v.y;
        let rx = self.z * ty - self.y * tz;
        let ry = self.x * tz - self.z * tx;
        let rz = self.y * tx - self.x * ty;
        Vector3::new(
            v.x - 2.0 * (tx * self.w - rx),
            v.y - 2.0 * (ty * self.w - ry),
            v.z - 2.0 * (tz * self.w - rz),
        )
    }

    /// **Mathematical Foundation: Spherical Linear Interpolation**
    ///
    /// Constant-angular-velocity blend from `self` (t = 0) to `to`
    /// (t = 1). With `shortest_path` set, a negative dot product flips the
    /// target so the blend crosses the short arc. Nearly coincident
    /// endpoints, and antipodal ones whose sine vanishes, fall back to
    /// plain linear weights. The result is normalized either way, so
    /// `slerp(q, q, t) == q`.
    pub fn slerp(&self, to: &Quaternion, t: Real, shortest_path: bool) -> Quaternion {
        let mut cos = self.dot(to);
        let mut inverse_factor = 1.0;
        if shortest_path && cos < 0.0 {
            cos = -cos;
            inverse_factor = -1.0;
        }
        let (c0, c1) = if 1.0 - cos > tolerance() {
            let angle = acos_safe(cos);
            let sin = angle.sin();
            if sin.abs() <= tolerance() {
                (1.0 - t, t)
            } else {
                (((1.0 - t) * angle).sin() / sin, (t * angle).sin() / sin)
            }
        } else {
            (1.0 - t, t)
        };
        (*self * c0 + *to * (c1 * inverse_factor)).normalize()
    }

    /// Normalized linear interpolation; cheaper than
    /// [`slerp`](Self::slerp) but not constant-velocity.
    pub fn lerp(&self, to: &Quaternion, t: Real) -> Quaternion {
        (*self * (1.0 - t) + *to * t).normalize()
    }

    /// **Mathematical Foundation: Exponential Map**
    ///
    /// For a pure quaternion `(v, 0)` with `θ = |v|`:
    /// `exp(q) = (v̂ · sin θ, cos θ)`. A vanishing sine leaves the vector
    /// part as it is, which for `v = 0` lands on the identity.
    pub fn exp(&self) -> Quaternion {
        let angle =
            (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        let sin = angle.sin();
        let w = angle.cos();
        if sin.abs() >= tolerance() {
            let coeff = sin / angle;
            Quaternion::new(self.x * coeff, self.y * coeff, self.z * coeff, w)
        } else {
            Quaternion::new(self.x, self.y, self.z, w)
        }
    }

    /// Inverse of [`exp`](Self::exp) for unit quaternions: the vector part
    /// becomes `v̂ · θ` and the scalar part zero. Degenerate sine keeps
    /// the vector part unscaled.
    pub fn log(&self) -> Quaternion {
        if self.w.abs() < 1.0 {
            let angle = acos_safe(self.w);
            let sin = angle.sin();
            if sin.abs() >= tolerance() {
                let coeff = angle / sin;
                return Quaternion::new(self.x * coeff, self.y * coeff, self.z * coeff, 0.0);
            }
        }
        Quaternion::new(self.x, self.y, self.z, 0.0)
    }

    /// Mirror the rotation's frame across the plane with the given
    /// `normal`: the rotated `primary` and `secondary` axes are reflected
    /// and the frame re-aimed from them. The handedness flip stays in the
    /// tertiary axis, so the result is still a proper rotation.
    pub fn mirror_normal(
        &self,
        normal: &Vector3,
        primary: Axis,
        secondary: Axis,
    ) -> Result<Quaternion, MathError> {
        let direction = self.rotate(&primary.direction()).mirror(normal);
        let up = self.rotate(&secondary.direction()).mirror(normal);
        Ok(aim(&direction, &up, primary, secondary)?.to_quaternion())
    }

    /// [`mirror_normal`](Self::mirror_normal) across a cartesian plane,
    /// with the conventional axis pair for that plane.
    pub fn mirror(&self, plane: CartesianPlane) -> Result<Quaternion, MathError> {
        let (primary, secondary) = plane.mirror_axes();
        self.mirror_normal(&plane.normal(), primary, secondary)
    }

    /// Componentwise comparison with an explicit precision. Note that `q`
    /// and `-q` rotate identically but do NOT compare equal here.
    pub fn almost_equal(&self, other: &Quaternion, precision: Real) -> bool {
        almost_equal(self.x, other.x, precision)
            && almost_equal(self.y, other.y, precision)
            && almost_equal(self.z, other.z, precision)
            && almost_equal(self.w, other.w, precision)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::IDENTITY
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    /// Hamilton product; the right factor acts first under
    /// [`rotate`](Quaternion::rotate).
    fn mul(self, other: Quaternion) -> Quaternion {
        Quaternion::new(
            self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            self.w * other.y + self.y * other.w + self.z * other.x - self.x * other.z,
            self.w * other.z + self.z * other.w + self.x * other.y - self.y * other.x,
            self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
        )
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, other: Quaternion) {
        *self = *self * other;
    }
}

impl Mul<Real> for Quaternion {
    type Output = Quaternion;
    fn mul(self, scalar: Real) -> Quaternion {
        Quaternion::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }
}

impl MulAssign<Real> for Quaternion {
    fn mul_assign(&mut self, scalar: Real) {
        *self = *self * scalar;
    }
}

impl Add for Quaternion {
    type Output = Quaternion;
    fn add(self, other: Quaternion) -> Quaternion {
        Quaternion::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, other: Quaternion) {
        *self = *self + other;
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;
    fn sub(self, other: Quaternion) -> Quaternion {
        Quaternion::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, other: Quaternion) {
        *self = *self - other;
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;
    fn neg(self) -> Quaternion {
        Quaternion::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Index<usize> for Quaternion {
    type Output = Real;

    fn index(&self, i: usize) -> &Real {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Quaternion index out of range: {}", i),
        }
    }
}

impl Display for Quaternion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Quaternion({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl approx::AbsDiffEq for Quaternion {
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

impl approx::RelativeEq for Quaternion {
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

impl approx::UlpsEq for Quaternion {
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

#[cfg(test)]
mod test {
    use super::*;
    use crate::float_types::{FRAC_PI_2, PI};
    use approx::assert_abs_diff_eq;

    fn quarter_turn(axis: &Vector3) -> Quaternion {
        Quaternion::from_axis_angle(axis, FRAC_PI_2).unwrap()
    }

    #[test]
    fn quarter_turn_about_z_maps_x_to_y() {
        let q = quarter_turn(&Vector3::Z_AXIS);
        assert_abs_diff_eq!(q.rotate(&Vector3::X_AXIS), Vector3::Y_AXIS, epsilon = 1e-12);
    }

    #[test]
    fn right_factor_of_a_product_acts_first() {
        let about_z = quarter_turn(&Vector3::Z_AXIS);
        let about_x = quarter_turn(&Vector3::X_AXIS);
        // about_x first maps Y to Z; about_z then keeps Z in place
        let combined = about_z * about_x;
        assert_abs_diff_eq!(combined.rotate(&Vector3::Y_AXIS), Vector3::Z_AXIS, epsilon = 1e-12);
        let nested = about_z.rotate(&about_x.rotate(&Vector3::Y_AXIS));
        assert_abs_diff_eq!(combined.rotate(&Vector3::Y_AXIS), nested, epsilon = 1e-12);
    }

    #[test]
    fn rotate_agrees_with_row_matrix_application() {
        let q = Quaternion::from_euler(0.7, -0.3, 1.9, RotationOrder::ZXY);
        let v = Vector3::new(1.0, -2.0, 0.5);
        assert_abs_diff_eq!(q.rotate(&v), v * q.to_matrix3(), epsilon = 1e-12);
    }

    #[test]
    fn from_euler_matches_matrix_from_euler() {
        for order in RotationOrder::ALL {
            let q = Quaternion::from_euler(0.4, -1.1, 0.8, order);
            let m = Matrix3::from_euler(0.4, -1.1, 0.8, order);
            assert_abs_diff_eq!(q.to_matrix3(), m, epsilon = 1e-12);
        }
    }

    #[test]
    fn matrix_round_trip_positive_and_negative_trace() {
        let rotations = [
            Quaternion::from_euler(0.2, 0.3, 0.4, RotationOrder::XYZ),
            Quaternion::from_axis_angle(&Vector3::X_AXIS, PI).unwrap(),
            Quaternion::from_axis_angle(&Vector3::Y_AXIS, PI).unwrap(),
            Quaternion::from_axis_angle(&Vector3::new(1.0, 1.0, 0.0), PI - 0.01).unwrap(),
        ];
        for q in rotations {
            let back = Quaternion::from_matrix3(&q.to_matrix3());
            // q and -q encode the same rotation
            assert_abs_diff_eq!(back.to_matrix3(), q.to_matrix3(), epsilon = 1e-9);
        }
    }

    #[test]
    fn axis_angle_round_trip() {
        let axis = Vector3::new(1.0, 2.0, -1.0).normalize();
        let q = Quaternion::from_axis_angle(&axis, 1.2).unwrap();
        let (out_axis, out_angle) = q.to_axis_angle();
        assert_abs_diff_eq!(out_axis, axis, epsilon = 1e-12);
        assert_abs_diff_eq!(out_angle, 1.2, epsilon = 1e-12);
    }

    #[test]
    fn axis_angle_degenerate_cases() {
        assert_eq!(
            Quaternion::from_axis_angle(&Vector3::ZERO, 1.0),
            Err(MathError::ZeroLength)
        );
        let (axis, angle) = Quaternion::IDENTITY.to_axis_angle();
        assert_eq!(axis, Vector3::X_AXIS);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn normalize_and_inverse_degenerate_to_identity() {
        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.normalize(), Quaternion::IDENTITY);
        assert_eq!(zero.inverse(), Quaternion::IDENTITY);
    }

    #[test]
    fn inverse_cancels_rotation() {
        let q = Quaternion::from_euler(0.5, 1.0, -0.25, RotationOrder::YZX);
        assert_abs_diff_eq!(q * q.inverse(), Quaternion::IDENTITY, epsilon = 1e-12);
        let v = Vector3::new(3.0, -1.0, 2.0);
        assert_abs_diff_eq!(q.inverse().rotate(&q.rotate(&v)), v, epsilon = 1e-12);
    }

    #[test]
    fn slerp_endpoints_and_midpoint() {
        let from = Quaternion::IDENTITY;
        let to = quarter_turn(&Vector3::Z_AXIS);
        assert_abs_diff_eq!(from.slerp(&to, 0.0, true), from, epsilon = 1e-12);
        assert_abs_diff_eq!(from.slerp(&to, 1.0, true), to, epsilon = 1e-12);
        let half = from.slerp(&to, 0.5, true);
        let expected = Quaternion::from_axis_angle(&Vector3::Z_AXIS, FRAC_PI_2 * 0.5).unwrap();
        assert_abs_diff_eq!(half, expected, epsilon = 1e-12);
    }

    #[test]
    fn slerp_of_identical_endpoints_is_stable() {
        let q = Quaternion::from_euler(0.3, 0.2, 0.1, RotationOrder::XYZ);
        assert_abs_diff_eq!(q.slerp(&q, 0.37, false), q, epsilon = 1e-12);
    }

    #[test]
    fn slerp_shortest_path_flips_negated_target() {
        let from = quarter_turn(&Vector3::Y_AXIS);
        let to = -from;
        // same rotation either way; shortest path must not swing through π
        let mid = from.slerp(&to, 0.5, true);
        assert_abs_diff_eq!(mid.to_matrix3(), from.to_matrix3(), epsilon = 1e-9);
    }

    #[test]
    fn log_then_exp_restores_unit_quaternion() {
        let q = Quaternion::from_axis_angle(&Vector3::new(0.5, -1.0, 2.0), 1.7).unwrap();
        assert_abs_diff_eq!(q.log().exp(), q, epsilon = 1e-12);
        assert_abs_diff_eq!(Quaternion::IDENTITY.log().exp(), Quaternion::IDENTITY, epsilon = 1e-12);
    }

    #[test]
    fn mirror_twice_restores_rotation() {
        let q = Quaternion::from_euler(0.9, 0.1, -0.6, RotationOrder::XYZ);
        let mirrored = q.mirror(CartesianPlane::XY).unwrap();
        let back = mirrored.mirror(CartesianPlane::XY).unwrap();
        assert_abs_diff_eq!(back.to_matrix3(), q.to_matrix3(), epsilon = 1e-9);
    }

    #[test]
    fn mirror_reflects_the_primary_axis() {
        let q = Quaternion::from_euler(0.9, 0.1, -0.6, RotationOrder::XYZ);
        let mirrored = q.mirror_normal(&Vector3::Z_AXIS, Axis::PosX, Axis::PosY).unwrap();
        let expected = q.rotate(&Vector3::X_AXIS).mirror(&Vector3::Z_AXIS);
        assert_abs_diff_eq!(mirrored.rotate(&Vector3::X_AXIS), expected, epsilon = 1e-9);
    }

    #[test]
    fn product_of_unit_quaternions_matches_matrix_product() {
        let q1 = Quaternion::from_euler(0.3, 0.5, -0.2, RotationOrder::XYZ);
        let q2 = Quaternion::from_euler(-0.8, 0.1, 0.9, RotationOrder::ZYX);
        // right factor acts first: M(q1 * q2) = M(q2) * M(q1)
        assert_abs_diff_eq!(
            (q1 * q2).to_matrix3(),
            q2.to_matrix3() * q1.to_matrix3(),
            epsilon = 1e-12
        );
    }
}
