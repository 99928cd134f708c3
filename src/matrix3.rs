//! Row-major 3×3 matrix.
//!
//! Rows are the basis axes of the rotation frame (row 0 = X, row 1 = Y,
//! row 2 = Z) and vectors transform on the right: `v' = v · M`. Products
//! therefore read left to right in application order: `a * b` applies `a`
//! first.

use crate::axis::{Axis, RotationOrder};
use crate::errors::MathError;
use crate::euler::Euler;
use crate::float_types::{FRAC_PI_2, Real, almost_equal, asin_safe, clamp_unit, tolerance};
use crate::quaternion::Quaternion;
use crate::queries::aim;
use crate::vector3::Vector3;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Matrix3 {
    /// Row-major storage: `data[row * 3 + column]`.
    pub data: [Real; 9],
}

impl Matrix3 {
    pub const IDENTITY: Matrix3 = Matrix3 {
        data: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        xx: Real,
        xy: Real,
        xz: Real,
        yx: Real,
        yy: Real,
        yz: Real,
        zx: Real,
        zy: Real,
        zz: Real,
    ) -> Self {
        Matrix3 {
            data: [xx, xy, xz, yx, yy, yz, zx, zy, zz],
        }
    }

    #[inline]
    pub const fn from_rows(x: &Vector3, y: &Vector3, z: &Vector3) -> Self {
        Matrix3::new(x.x, x.y, x.z, y.x, y.y, y.z, z.x, z.y, z.z)
    }

    /// Diagonal scale matrix.
    #[inline]
    pub const fn from_scale(scale: &Vector3) -> Self {
        Matrix3::new(scale.x, 0.0, 0.0, 0.0, scale.y, 0.0, 0.0, 0.0, scale.z)
    }

    /// Elemental rotation about X by `angle` radians.
    pub fn rotation_x(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Matrix3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
    }

    /// Elemental rotation about Y by `angle` radians.
    pub fn rotation_y(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Matrix3::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
    }

    /// Elemental rotation about Z by `angle` radians.
    pub fn rotation_z(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Matrix3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
    }

    /// **Mathematical Foundation: Rodrigues Rotation**
    ///
    /// Rotation by `angle` radians about `axis` (normalized here):
    /// ```text
    /// M = cos θ · I + (1 - cos θ) · ûûᵀ - sin θ · [û]ₓ
    /// ```
    /// An axis shorter than the tolerance cannot define a rotation and
    /// yields [`MathError::ZeroLength`].
    pub fn from_axis_angle(axis: &Vector3, angle: Real) -> Result<Matrix3, MathError> {
        if axis.length() <= tolerance() {
            return Err(MathError::ZeroLength);
        }
        let u = axis.normalize();
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        Ok(Matrix3::new(
            c + t * u.x * u.x,
            t * u.x * u.y + s * u.z,
            t * u.x * u.z - s * u.y,
            t * u.x * u.y - s * u.z,
            c + t * u.y * u.y,
            t * u.y * u.z + s * u.x,
            t * u.x * u.z + s * u.y,
            t * u.y * u.z - s * u.x,
            c + t * u.z * u.z,
        ))
    }

    /// Rotation from euler angles in radians, applied in `order`.
    ///
    /// `order` lists application order for a row vector, so the matrix for
    /// `XYZ` is the product `X(x) · Y(y) · Z(z)`.
    pub fn from_euler(x: Real, y: Real, z: Real, order: RotationOrder) -> Matrix3 {
        let xm = Matrix3::rotation_x(x);
        let ym = Matrix3::rotation_y(y);
        let zm = Matrix3::rotation_z(z);
        match order {
            RotationOrder::XYZ => xm * ym * zm,
            RotationOrder::XZY => xm * zm * ym,
            RotationOrder::YXZ => ym * xm * zm,
            RotationOrder::YZX => ym * zm * xm,
            RotationOrder::ZXY => zm * xm * ym,
            RotationOrder::ZYX => zm * ym * xm,
        }
    }

    /// Rotation from an [`Euler`] triple (converted to radians first).
    pub fn from_euler_struct(euler: &Euler, order: RotationOrder) -> Matrix3 {
        let e = euler.to_radians();
        Matrix3::from_euler(e.x, e.y, e.z, order)
    }

    /// Rotation matrix of a unit quaternion.
    #[inline]
    pub fn from_quaternion(q: &Quaternion) -> Matrix3 {
        q.to_matrix3()
    }

    /// **Mathematical Foundation: Rotation Between Two Vectors**
    ///
    /// The rotation taking unit vector `from` to unit vector `to`
    /// (Möller–Hughes construction). For nearly parallel or antiparallel
    /// inputs the rotation is built from two reflections through an
    /// intermediate frame axis, which stays stable where the cross-product
    /// form degenerates. Both inputs are expected to be unit length.
    pub fn from_vector_to_vector(from: &Vector3, to: &Vector3) -> Matrix3 {
        let e = from.dot(to);
        if e.abs() > 1.0 - tolerance() {
            // reflect through the frame axis least aligned with `from`
            let fx = from.x.abs();
            let fy = from.y.abs();
            let fz = from.z.abs();
            let x = if fx < fy {
                if fx < fz { Vector3::X_AXIS } else { Vector3::Z_AXIS }
            } else if fy < fz {
                Vector3::Y_AXIS
            } else {
                Vector3::Z_AXIS
            };
            let u = x - *from;
            let v = x - *to;
            let c1 = 2.0 / u.dot(&u);
            let c2 = 2.0 / v.dot(&v);
            let c3 = v.dot(&(u * (c1 * c2)));
            let uv: [Real; 3] = u.into();
            let vv: [Real; 3] = v.into();
            let mut data = [0.0; 9];
            for i in 0..3 {
                for j in 0..3 {
                    data[i * 3 + j] =
                        -c1 * uv[i] * uv[j] - c2 * vv[i] * vv[j] + c3 * vv[i] * uv[j];
                }
                data[i * 3 + i] += 1.0;
            }
            Matrix3 { data }
        } else {
            let v = from.cross(to);
            let h = 1.0 / (1.0 + e);
            let hvx = h * v.x;
            let hvz = h * v.z;
            let hvxy = hvx * v.y;
            let hvxz = hvx * v.z;
            let hvyz = hvz * v.y;
            Matrix3::new(
                e + hvx * v.x,
                hvxy - v.z,
                hvxz + v.y,
                hvxy + v.z,
                e + h * v.y * v.y,
                hvyz - v.x,
                hvxz - v.y,
                hvyz + v.x,
                e + hvz * v.z,
            )
        }
    }

    /// Orientation frame looking along `direction` with `up` steadying the
    /// secondary axis; see [`aim`].
    pub fn look_at(
        direction: &Vector3,
        up: &Vector3,
        primary: Axis,
        secondary: Axis,
    ) -> Result<Matrix3, MathError> {
        aim(direction, up, primary, secondary)
    }

    #[inline]
    pub const fn row(&self, i: usize) -> Vector3 {
        Vector3::new(self.data[i * 3], self.data[i * 3 + 1], self.data[i * 3 + 2])
    }

    #[inline]
    pub const fn set_row(&mut self, i: usize, v: &Vector3) {
        self.data[i * 3] = v.x;
        self.data[i * 3 + 1] = v.y;
        self.data[i * 3 + 2] = v.z;
    }

    #[inline]
    pub const fn axis_x(&self) -> Vector3 {
        self.row(0)
    }

    #[inline]
    pub const fn axis_y(&self) -> Vector3 {
        self.row(1)
    }

    #[inline]
    pub const fn axis_z(&self) -> Vector3 {
        self.row(2)
    }

    #[inline]
    pub const fn set_axis_x(&mut self, v: &Vector3) {
        self.set_row(0, v);
    }

    #[inline]
    pub const fn set_axis_y(&mut self, v: &Vector3) {
        self.set_row(1, v);
    }

    #[inline]
    pub const fn set_axis_z(&mut self, v: &Vector3) {
        self.set_row(2, v);
    }

    pub fn transpose(&self) -> Matrix3 {
        let m = &self.data;
        Matrix3::new(m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8])
    }

    pub fn transpose_mut(&mut self) {
        *self = self.transpose();
    }

    pub fn determinant(&self) -> Real {
        let m = &self.data;
        m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    /// Classical adjugate inverse.
    ///
    /// A determinant within tolerance of zero means the matrix collapses
    /// space and has no inverse; that case is
    /// [`MathError::SingularMatrix`], carrying the determinant.
    pub fn inverse(&self) -> Result<Matrix3, MathError> {
        let det = self.determinant();
        if det.abs() <= tolerance() {
            return Err(MathError::SingularMatrix { determinant: det });
        }
        let m = &self.data;
        let inv_det = 1.0 / det;
        Ok(Matrix3::new(
            (m[4] * m[8] - m[5] * m[7]) * inv_det,
            (m[2] * m[7] - m[1] * m[8]) * inv_det,
            (m[1] * m[5] - m[2] * m[4]) * inv_det,
            (m[5] * m[6] - m[3] * m[8]) * inv_det,
            (m[0] * m[8] - m[2] * m[6]) * inv_det,
            (m[2] * m[3] - m[0] * m[5]) * inv_det,
            (m[3] * m[7] - m[4] * m[6]) * inv_det,
            (m[1] * m[6] - m[0] * m[7]) * inv_det,
            (m[0] * m[4] - m[1] * m[3]) * inv_det,
        ))
    }

    /// **Mathematical Foundation: Gram–Schmidt, Lengths Preserved**
    ///
    /// Make the rows mutually orthogonal without normalizing them: row 0 is
    /// kept as-is, row 1 loses its projection on row 0, row 2 loses its
    /// projections on the other two. Row lengths are otherwise preserved,
    /// which is what lets [`decompose`](Self::decompose) read the scale off
    /// afterwards. Rows shorter than the tolerance contribute no
    /// projection.
    pub fn orthogonal(&self) -> Matrix3 {
        let x = self.axis_x();
        let mut y = self.axis_y();
        let mut z = self.axis_z();
        let xx = x.squared_length();
        if xx > tolerance() {
            y -= x * (x.dot(&y) / xx);
            z -= x * (x.dot(&z) / xx);
        }
        let yy = y.squared_length();
        if yy > tolerance() {
            z -= y * (y.dot(&z) / yy);
        }
        Matrix3::from_rows(&x, &y, &z)
    }

    /// In-place [`orthogonal`](Self::orthogonal).
    pub fn orthogonal_mut(&mut self) {
        *self = self.orthogonal();
    }

    /// Gram–Schmidt with unit rows. Degenerate rows fall back the same way
    /// [`Vector3::normalize`] does.
    pub fn orthonormal(&self) -> Matrix3 {
        let x = self.axis_x().normalize();
        let y = (self.axis_y() - x * x.dot(&self.axis_y())).normalize();
        let raw_z = self.axis_z();
        let z = (raw_z - x * x.dot(&raw_z) - y * y.dot(&raw_z)).normalize();
        Matrix3::from_rows(&x, &y, &z)
    }

    /// In-place [`orthonormal`](Self::orthonormal).
    pub fn orthonormal_mut(&mut self) {
        *self = self.orthonormal();
    }

    /// **Mathematical Foundation: Rotation/Scale Decomposition**
    ///
    /// Split into a pure rotation and a per-axis scale:
    /// 1. orthogonalize the rows ([`orthogonal`](Self::orthogonal));
    /// 2. the row lengths are the scale;
    /// 3. normalizing the rows leaves the rotation;
    /// 4. a negative determinant is folded into the X axis: row 0 and
    ///    `scale.x` are negated so the rotation stays right-handed.
    ///
    /// A row collapsing under the tolerance means the matrix is singular
    /// and no rotation can be extracted.
    pub fn decompose(&self) -> Result<(Matrix3, Vector3), MathError> {
        let ortho = self.orthogonal();
        let mut scale = Vector3::new(
            ortho.axis_x().length(),
            ortho.axis_y().length(),
            ortho.axis_z().length(),
        );
        if scale.x <= tolerance() || scale.y <= tolerance() || scale.z <= tolerance() {
            return Err(MathError::SingularMatrix {
                determinant: self.determinant(),
            });
        }
        let mut rotation = Matrix3::from_rows(
            &(ortho.axis_x() / scale.x),
            &(ortho.axis_y() / scale.y),
            &(ortho.axis_z() / scale.z),
        );
        if rotation.determinant() < 0.0 {
            rotation.set_axis_x(&(-rotation.axis_x()));
            scale.x = -scale.x;
        }
        Ok((rotation, scale))
    }

    /// Per-row scale factors (row lengths).
    pub fn scale(&self) -> Vector3 {
        Vector3::new(
            self.axis_x().length(),
            self.axis_y().length(),
            self.axis_z().length(),
        )
    }

    /// Replace the scale, keeping each row's direction.
    pub fn set_scale(&mut self, scale: &Vector3) {
        self.set_axis_x(&(self.axis_x().normalize() * scale.x));
        self.set_axis_y(&(self.axis_y().normalize() * scale.y));
        self.set_axis_z(&(self.axis_z().normalize() * scale.z));
    }

    /// Euler angles (radians) whose [`from_euler`](Self::from_euler) with
    /// the same `order` rebuilds this rotation.
    ///
    /// At gimbal lock (middle-angle cosine within tolerance of zero) the
    /// third applied angle is reported as zero and the remaining angles
    /// absorb the rotation; the round-trip matrix is still this one.
    pub fn to_euler(&self, order: RotationOrder) -> Euler {
        let m = &self.data;
        let (x, y, z) = match order {
            RotationOrder::XYZ => {
                let s = clamp_unit(-m[2]);
                if gimbal_clear(s) {
                    (m[5].atan2(m[8]), asin_safe(s), m[1].atan2(m[0]))
                } else if s > 0.0 {
                    (0.0, FRAC_PI_2, -m[3].atan2(m[6]))
                } else {
                    (0.0, -FRAC_PI_2, (-m[3]).atan2(-m[6]))
                }
            },
            RotationOrder::XZY => {
                let s = clamp_unit(m[1]);
                if gimbal_clear(s) {
                    ((-m[7]).atan2(m[4]), (-m[2]).atan2(m[0]), asin_safe(s))
                } else if s > 0.0 {
                    (0.0, m[5].atan2(m[8]), FRAC_PI_2)
                } else {
                    (0.0, -m[5].atan2(m[8]), -FRAC_PI_2)
                }
            },
            RotationOrder::YXZ => {
                let s = clamp_unit(m[5]);
                if gimbal_clear(s) {
                    (asin_safe(s), (-m[2]).atan2(m[8]), (-m[3]).atan2(m[4]))
                } else if s > 0.0 {
                    (FRAC_PI_2, 0.0, m[6].atan2(m[0]))
                } else {
                    (-FRAC_PI_2, 0.0, -m[6].atan2(m[0]))
                }
            },
            RotationOrder::YZX => {
                let s = clamp_unit(-m[3]);
                if gimbal_clear(s) {
                    (m[5].atan2(m[4]), m[6].atan2(m[0]), asin_safe(s))
                } else if s > 0.0 {
                    (-(-m[2]).atan2(m[8]), 0.0, FRAC_PI_2)
                } else {
                    ((-m[2]).atan2(m[8]), 0.0, -FRAC_PI_2)
                }
            },
            RotationOrder::ZXY => {
                let s = clamp_unit(-m[7]);
                if gimbal_clear(s) {
                    (asin_safe(s), m[6].atan2(m[8]), m[1].atan2(m[4]))
                } else if s > 0.0 {
                    (FRAC_PI_2, -(-m[3]).atan2(m[0]), 0.0)
                } else {
                    (-FRAC_PI_2, (-m[3]).atan2(m[0]), 0.0)
                }
            },
            RotationOrder::ZYX => {
                let s = clamp_unit(m[6]);
                if gimbal_clear(s) {
                    ((-m[7]).atan2(m[8]), asin_safe(s), (-m[3]).atan2(m[0]))
                } else if s > 0.0 {
                    (m[1].atan2(m[4]), FRAC_PI_2, 0.0)
                } else {
                    (-m[1].atan2(m[4]), -FRAC_PI_2, 0.0)
                }
            },
        };
        Euler::radians(x, y, z)
    }

    /// Shoemake trace extraction; see [`Quaternion::from_matrix3`].
    #[inline]
    pub fn to_quaternion(&self) -> Quaternion {
        Quaternion::from_matrix3(self)
    }

    /// Componentwise comparison with an explicit precision.
    pub fn almost_equal(&self, other: &Matrix3, precision: Real) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| almost_equal(*a, *b, precision))
    }
}

/// True while the middle euler angle is clear of its ±π/2 poles, where
/// `s` is the clamped sine of that angle.
#[inline]
fn gimbal_clear(s: Real) -> bool {
    (1.0 - s * s).max(0.0).sqrt() > tolerance()
}

impl Default for Matrix3 {
    fn default() -> Self {
        Matrix3::IDENTITY
    }
}

impl From<[Real; 9]> for Matrix3 {
    #[inline]
    fn from(data: [Real; 9]) -> Self {
        Matrix3 { data }
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    /// Row-major product `self · other`; applies `self` first to a row
    /// vector.
    fn mul(self, other: Matrix3) -> Matrix3 {
        let a = &self.data;
        let b = &other.data;
        let mut data = [0.0; 9];
        for (i, out_row) in data.chunks_exact_mut(3).enumerate() {
            for (j, out) in out_row.iter_mut().enumerate() {
                *out = a[i * 3] * b[j] + a[i * 3 + 1] * b[3 + j] + a[i * 3 + 2] * b[6 + j];
            }
        }
        Matrix3 { data }
    }
}

impl MulAssign for Matrix3 {
    /// Computes into a fresh matrix before storing, so `m *= m` squares
    /// correctly.
    fn mul_assign(&mut self, other: Matrix3) {
        *self = *self * other;
    }
}

impl Mul<Real> for Matrix3 {
    type Output = Matrix3;
    fn mul(self, scalar: Real) -> Matrix3 {
        let mut data = self.data;
        for v in &mut data {
            *v *= scalar;
        }
        Matrix3 { data }
    }
}

impl MulAssign<Real> for Matrix3 {
    fn mul_assign(&mut self, scalar: Real) {
        *self = *self * scalar;
    }
}

impl Add for Matrix3 {
    type Output = Matrix3;
    fn add(self, other: Matrix3) -> Matrix3 {
        let mut data = self.data;
        for (v, o) in data.iter_mut().zip(other.data.iter()) {
            *v += o;
        }
        Matrix3 { data }
    }
}

impl AddAssign for Matrix3 {
    fn add_assign(&mut self, other: Matrix3) {
        *self = *self + other;
    }
}

impl Sub for Matrix3 {
    type Output = Matrix3;
    fn sub(self, other: Matrix3) -> Matrix3 {
        let mut data = self.data;
        for (v, o) in data.iter_mut().zip(other.data.iter()) {
            *v -= o;
        }
        Matrix3 { data }
    }
}

impl SubAssign for Matrix3 {
    fn sub_assign(&mut self, other: Matrix3) {
        *self = *self - other;
    }
}

impl Index<usize> for Matrix3 {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        &self.data[i]
    }
}

impl IndexMut<usize> for Matrix3 {
    fn index_mut(&mut self, i: usize) -> &mut Real {
        &mut self.data[i]
    }
}

impl Index<(usize, usize)> for Matrix3 {
    type Output = Real;
    fn index(&self, (row, column): (usize, usize)) -> &Real {
        assert!(row < 3 && column < 3, "Matrix3 index out of range: ({}, {})", row, column);
        &self.data[row * 3 + column]
    }
}

impl IndexMut<(usize, usize)> for Matrix3 {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Real {
        assert!(row < 3 && column < 3, "Matrix3 index out of range: ({}, {})", row, column);
        &mut self.data[row * 3 + column]
    }
}

impl Display for Matrix3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = &self.data;
        write!(
            f,
            "Matrix3([{}, {}, {}], [{}, {}, {}], [{}, {}, {}])",
            m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8]
        )
    }
}

impl approx::AbsDiffEq for Matrix3 {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| Real::abs_diff_eq(a, b, epsilon))
    }
}

impl approx::RelativeEq for Matrix3 {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| Real::relative_eq(a, b, epsilon, max_relative))
    }
}

impl approx::UlpsEq for Matrix3 {
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| Real::ulps_eq(a, b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn identity_determinant_is_one() {
        assert_eq!(Matrix3::IDENTITY.determinant(), 1.0);
    }

    #[test]
    fn rotation_z_quarter_turn_maps_x_to_y() {
        let m = Matrix3::rotation_z(FRAC_PI_2);
        let v = Vector3::X_AXIS * m;
        assert_abs_diff_eq!(v, Vector3::Y_AXIS, epsilon = 1e-12);
    }

    #[test]
    fn product_applies_left_factor_first() {
        // rotate about Z then about X: X axis ends up on Z
        let m = Matrix3::rotation_z(FRAC_PI_2) * Matrix3::rotation_x(FRAC_PI_2);
        let v = Vector3::X_AXIS * m;
        assert_abs_diff_eq!(v, Vector3::Z_AXIS, epsilon = 1e-12);
    }

    #[test]
    fn mul_assign_matches_mul_for_aliasing_square() {
        let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0);
        let squared = m * m;
        let mut aliased = m;
        aliased *= aliased;
        assert_eq!(aliased, squared);
    }

    #[test]
    fn inverse_round_trip() {
        let m = Matrix3::from_euler(0.3, -1.1, 2.0, RotationOrder::XYZ)
            * Matrix3::from_scale(&Vector3::new(2.0, 0.5, 3.0));
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(m * inv, Matrix3::IDENTITY, epsilon = 1e-9);
        assert_abs_diff_eq!(inv * m, Matrix3::IDENTITY, epsilon = 1e-9);
    }

    #[test]
    fn singular_inverse_is_an_error() {
        let m = Matrix3::from_scale(&Vector3::new(1.0, 0.0, 1.0));
        match m.inverse() {
            Err(MathError::SingularMatrix { determinant }) => {
                assert_abs_diff_eq!(determinant, 0.0, epsilon = 1e-12)
            },
            other => panic!("expected SingularMatrix, got {:?}", other),
        }
    }

    #[test]
    fn orthogonal_keeps_first_row_and_lengths_orthogonal() {
        let m = Matrix3::new(2.0, 0.0, 0.0, 1.0, 3.0, 0.0, 1.0, 1.0, 4.0);
        let o = m.orthogonal();
        assert_eq!(o.axis_x(), Vector3::new(2.0, 0.0, 0.0), "row 0 untouched");
        assert_abs_diff_eq!(o.axis_x().dot(&o.axis_y()), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(o.axis_x().dot(&o.axis_z()), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(o.axis_y().dot(&o.axis_z()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn decompose_recovers_rotation_and_scale() {
        let rotation = Matrix3::from_euler(0.4, 0.9, -0.7, RotationOrder::ZXY);
        let scaled = Matrix3::from_scale(&Vector3::new(2.0, 3.0, 4.0)) * rotation;
        let (r, s) = scaled.decompose().unwrap();
        assert_abs_diff_eq!(r, rotation, epsilon = 1e-9);
        assert_abs_diff_eq!(s, Vector3::new(2.0, 3.0, 4.0), epsilon = 1e-9);
        assert_abs_diff_eq!(Matrix3::from_scale(&s) * r, scaled, epsilon = 1e-9);
    }

    #[test]
    fn decompose_flips_sign_on_negative_determinant() {
        let rotation = Matrix3::from_euler(0.1, 0.2, 0.3, RotationOrder::XYZ);
        let mirrored = Matrix3::from_scale(&Vector3::new(-2.0, 1.0, 1.0)) * rotation;
        let (r, s) = mirrored.decompose().unwrap();
        assert!(s.x < 0.0, "negative determinant lands in scale.x");
        assert!(r.determinant() > 0.0, "rotation stays right-handed");
        assert_abs_diff_eq!(Matrix3::from_scale(&s) * r, mirrored, epsilon = 1e-9);
    }

    #[test]
    fn euler_round_trip_all_orders() {
        let angles = Vector3::new(0.3, -0.6, 1.2);
        for order in RotationOrder::ALL {
            let m = Matrix3::from_euler(angles.x, angles.y, angles.z, order);
            let e = m.to_euler(order);
            let rebuilt = Matrix3::from_euler(e.x, e.y, e.z, order);
            assert_abs_diff_eq!(rebuilt, m, epsilon = 1e-9);
            assert!(
                e.to_vector().almost_equal(&angles, 1e-9),
                "order {:?}: got {:?}",
                order,
                e
            );
        }
    }

    #[test]
    fn euler_gimbal_lock_still_round_trips_the_matrix() {
        for order in RotationOrder::ALL {
            for middle in [FRAC_PI_2, -FRAC_PI_2] {
                let (x, y, z) = match order {
                    RotationOrder::XYZ | RotationOrder::ZYX => (0.4, middle, -0.2),
                    RotationOrder::XZY | RotationOrder::YZX => (0.4, -0.2, middle),
                    RotationOrder::YXZ | RotationOrder::ZXY => (middle, 0.4, -0.2),
                };
                let m = Matrix3::from_euler(x, y, z, order);
                let e = m.to_euler(order);
                assert!(e.x.is_finite() && e.y.is_finite() && e.z.is_finite());
                let rebuilt = Matrix3::from_euler(e.x, e.y, e.z, order);
                assert_abs_diff_eq!(rebuilt, m, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn axis_angle_agrees_with_elemental_rotations() {
        let about_z = Matrix3::from_axis_angle(&Vector3::Z_AXIS, 0.7).unwrap();
        assert_abs_diff_eq!(about_z, Matrix3::rotation_z(0.7), epsilon = 1e-12);
        let about_y = Matrix3::from_axis_angle(&(Vector3::Y_AXIS * 5.0), -0.4).unwrap();
        assert_abs_diff_eq!(about_y, Matrix3::rotation_y(-0.4), epsilon = 1e-12);
    }

    #[test]
    fn axis_angle_rejects_zero_axis() {
        assert_eq!(
            Matrix3::from_axis_angle(&Vector3::ZERO, 1.0),
            Err(MathError::ZeroLength)
        );
    }

    #[test]
    fn vector_to_vector_rotates_from_onto_to() {
        let from = Vector3::new(1.0, 2.0, 3.0).normalize();
        let to = Vector3::new(-2.0, 0.5, 1.0).normalize();
        let m = Matrix3::from_vector_to_vector(&from, &to);
        assert_abs_diff_eq!(from * m, to, epsilon = 1e-9);
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn vector_to_vector_handles_antiparallel() {
        let from = Vector3::X_AXIS;
        let to = -Vector3::X_AXIS;
        let m = Matrix3::from_vector_to_vector(&from, &to);
        assert_abs_diff_eq!(from * m, to, epsilon = 1e-9);
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn transpose_of_rotation_is_inverse() {
        let m = Matrix3::from_euler(1.0, 0.5, -0.3, RotationOrder::YZX);
        assert_abs_diff_eq!(m * m.transpose(), Matrix3::IDENTITY, epsilon = 1e-12);
    }
}
