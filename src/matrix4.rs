//! Row-major affine 4×4 matrix.
//!
//! Follows the same row-vector convention as [`Matrix3`]: rows 0..=2 carry
//! the basis axes (fourth column 0) and row 3 carries the translation
//! (fourth column 1), so a point transforms as `[x y z 1] · M`.

use crate::axis::{Axis, RotationOrder};
use crate::errors::MathError;
use crate::euler::Euler;
use crate::float_types::{Real, almost_equal, tolerance};
use crate::matrix3::Matrix3;
use crate::quaternion::Quaternion;
use crate::vector3::Vector3;
use crate::vector4::Vector4;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Matrix4 {
    /// Row-major storage: `data[row * 4 + column]`.
    pub data: [Real; 16],
}

impl Matrix4 {
    pub const IDENTITY: Matrix4 = Matrix4 {
        data: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m0: Real,
        m1: Real,
        m2: Real,
        m3: Real,
        m4: Real,
        m5: Real,
        m6: Real,
        m7: Real,
        m8: Real,
        m9: Real,
        m10: Real,
        m11: Real,
        m12: Real,
        m13: Real,
        m14: Real,
        m15: Real,
    ) -> Self {
        Matrix4 {
            data: [
                m0, m1, m2, m3, m4, m5, m6, m7, m8, m9, m10, m11, m12, m13, m14, m15,
            ],
        }
    }

    #[inline]
    pub const fn from_rows(x: &Vector4, y: &Vector4, z: &Vector4, t: &Vector4) -> Self {
        Matrix4::new(
            x.x, x.y, x.z, x.w, y.x, y.y, y.z, y.w, z.x, z.y, z.z, z.w, t.x, t.y, t.z, t.w,
        )
    }

    /// Rotation part from `m`, translation zero.
    #[inline]
    pub const fn from_matrix3(m: &Matrix3) -> Self {
        Matrix4::from_matrix3_and_position(m, &Vector3::ZERO)
    }

    #[inline]
    pub const fn from_matrix3_and_position(m: &Matrix3, position: &Vector3) -> Self {
        let d = &m.data;
        Matrix4::new(
            d[0], d[1], d[2], 0.0, d[3], d[4], d[5], 0.0, d[6], d[7], d[8], 0.0, position.x,
            position.y, position.z, 1.0,
        )
    }

    #[inline]
    pub fn from_quaternion(q: &Quaternion) -> Self {
        Matrix4::from_matrix3(&q.to_matrix3())
    }

    /// See [`Matrix3::from_euler`]; angles in radians.
    #[inline]
    pub fn from_euler(x: Real, y: Real, z: Real, order: RotationOrder) -> Self {
        Matrix4::from_matrix3(&Matrix3::from_euler(x, y, z, order))
    }

    /// See [`Matrix3::from_axis_angle`].
    #[inline]
    pub fn from_axis_angle(axis: &Vector3, angle: Real) -> Result<Matrix4, MathError> {
        Ok(Matrix4::from_matrix3(&Matrix3::from_axis_angle(axis, angle)?))
    }

    /// Pure translation.
    #[inline]
    pub const fn from_position(position: &Vector3) -> Self {
        Matrix4::from_matrix3_and_position(&Matrix3::IDENTITY, position)
    }

    /// Pure per-axis scale.
    #[inline]
    pub const fn from_scale(scale: &Vector3) -> Self {
        Matrix4::from_matrix3(&Matrix3::from_scale(scale))
    }

    /// Rotation taking unit vector `from` to unit vector `to`, translation
    /// zero; see [`Matrix3::from_vector_to_vector`].
    #[inline]
    pub fn from_vector_to_vector(from: &Vector3, to: &Vector3) -> Self {
        Matrix4::from_matrix3(&Matrix3::from_vector_to_vector(from, to))
    }

    #[inline]
    pub const fn row(&self, i: usize) -> Vector4 {
        Vector4::new(
            self.data[i * 4],
            self.data[i * 4 + 1],
            self.data[i * 4 + 2],
            self.data[i * 4 + 3],
        )
    }

    #[inline]
    pub const fn set_row(&mut self, i: usize, v: &Vector4) {
        self.data[i * 4] = v.x;
        self.data[i * 4 + 1] = v.y;
        self.data[i * 4 + 2] = v.z;
        self.data[i * 4 + 3] = v.w;
    }

    #[inline]
    pub const fn axis_x(&self) -> Vector3 {
        Vector3::new(self.data[0], self.data[1], self.data[2])
    }

    #[inline]
    pub const fn axis_y(&self) -> Vector3 {
        Vector3::new(self.data[4], self.data[5], self.data[6])
    }

    #[inline]
    pub const fn axis_z(&self) -> Vector3 {
        Vector3::new(self.data[8], self.data[9], self.data[10])
    }

    #[inline]
    pub const fn set_axis_x(&mut self, v: &Vector3) {
        self.data[0] = v.x;
        self.data[1] = v.y;
        self.data[2] = v.z;
    }

    #[inline]
    pub const fn set_axis_y(&mut self, v: &Vector3) {
        self.data[4] = v.x;
        self.data[5] = v.y;
        self.data[6] = v.z;
    }

    #[inline]
    pub const fn set_axis_z(&mut self, v: &Vector3) {
        self.data[8] = v.x;
        self.data[9] = v.y;
        self.data[10] = v.z;
    }

    /// Translation row.
    #[inline]
    pub const fn position(&self) -> Vector3 {
        Vector3::new(self.data[12], self.data[13], self.data[14])
    }

    #[inline]
    pub const fn set_position(&mut self, position: &Vector3) {
        self.data[12] = position.x;
        self.data[13] = position.y;
        self.data[14] = position.z;
    }

    /// Upper 3×3 block.
    pub const fn to_matrix3(&self) -> Matrix3 {
        let m = &self.data;
        Matrix3::new(m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10])
    }

    /// Replace the upper 3×3 block, keeping the translation.
    pub const fn set_rotation(&mut self, m: &Matrix3) {
        let d = &m.data;
        self.data[0] = d[0];
        self.data[1] = d[1];
        self.data[2] = d[2];
        self.data[4] = d[3];
        self.data[5] = d[4];
        self.data[6] = d[5];
        self.data[8] = d[6];
        self.data[9] = d[7];
        self.data[10] = d[8];
    }

    pub fn set_rotation_quaternion(&mut self, q: &Quaternion) {
        self.set_rotation(&q.to_matrix3());
    }

    pub fn set_rotation_euler(&mut self, x: Real, y: Real, z: Real, order: RotationOrder) {
        self.set_rotation(&Matrix3::from_euler(x, y, z, order));
    }

    /// See [`Matrix3::to_euler`]; reads the upper 3×3.
    pub fn to_euler(&self, order: RotationOrder) -> Euler {
        self.to_matrix3().to_euler(order)
    }

    /// See [`Quaternion::from_matrix3`]; reads the upper 3×3.
    pub fn to_quaternion(&self) -> Quaternion {
        Quaternion::from_matrix3(&self.to_matrix3())
    }

    pub fn transpose(&self) -> Matrix4 {
        let m = &self.data;
        Matrix4::new(
            m[0], m[4], m[8], m[12], m[1], m[5], m[9], m[13], m[2], m[6], m[10], m[14], m[3],
            m[7], m[11], m[15],
        )
    }

    pub fn transpose_mut(&mut self) {
        *self = self.transpose();
    }

    /// Move the position by `offset` expressed in this matrix's local
    /// frame (the offset is rotated and scaled by the upper 3×3 first).
    pub fn translate(&mut self, offset: &Vector3) {
        let moved = self.position() + self.rotate_vector(offset);
        self.set_position(&moved);
    }

    /// Row lengths of the upper 3×3.
    pub fn scale(&self) -> Vector3 {
        Vector3::new(
            self.axis_x().length(),
            self.axis_y().length(),
            self.axis_z().length(),
        )
    }

    /// Replace the scale, keeping each basis row's direction and the
    /// translation.
    pub fn set_scale(&mut self, scale: &Vector3) {
        self.set_axis_x(&(self.axis_x().normalize() * scale.x));
        self.set_axis_y(&(self.axis_y().normalize() * scale.y));
        self.set_axis_z(&(self.axis_z().normalize() * scale.z));
    }

    /// **Mathematical Foundation: Cofactor-Pair Determinant**
    ///
    /// Expands the determinant over 2×2 minors of the top and bottom row
    /// pairs, reusing the six minors each side:
    /// ```text
    /// det = a0·b5 - a1·b4 + a2·b3 + a3·b2 - a4·b1 + a5·b0
    /// ```
    pub fn determinant(&self) -> Real {
        let m = &self.data;
        let a0 = m[0] * m[5] - m[1] * m[4];
        let a1 = m[0] * m[6] - m[2] * m[4];
        let a2 = m[0] * m[7] - m[3] * m[4];
        let a3 = m[1] * m[6] - m[2] * m[5];
        let a4 = m[1] * m[7] - m[3] * m[5];
        let a5 = m[2] * m[7] - m[3] * m[6];
        let b0 = m[8] * m[13] - m[9] * m[12];
        let b1 = m[8] * m[14] - m[10] * m[12];
        let b2 = m[8] * m[15] - m[11] * m[12];
        let b3 = m[9] * m[14] - m[10] * m[13];
        let b4 = m[9] * m[15] - m[11] * m[13];
        let b5 = m[10] * m[15] - m[11] * m[14];
        a0 * b5 - a1 * b4 + a2 * b3 + a3 * b2 - a4 * b1 + a5 * b0
    }

    /// Adjugate inverse over the same cofactor pairs as
    /// [`determinant`](Self::determinant). Works for any invertible 4×4,
    /// not just affine ones. A determinant within tolerance of zero is
    /// [`MathError::SingularMatrix`].
    pub fn inverse(&self) -> Result<Matrix4, MathError> {
        let m = &self.data;
        let a0 = m[0] * m[5] - m[1] * m[4];
        let a1 = m[0] * m[6] - m[2] * m[4];
        let a2 = m[0] * m[7] - m[3] * m[4];
        let a3 = m[1] * m[6] - m[2] * m[5];
        let a4 = m[1] * m[7] - m[3] * m[5];
        let a5 = m[2] * m[7] - m[3] * m[6];
        let b0 = m[8] * m[13] - m[9] * m[12];
        let b1 = m[8] * m[14] - m[10] * m[12];
        let b2 = m[8] * m[15] - m[11] * m[12];
        let b3 = m[9] * m[14] - m[10] * m[13];
        let b4 = m[9] * m[15] - m[11] * m[13];
        let b5 = m[10] * m[15] - m[11] * m[14];
        let det = a0 * b5 - a1 * b4 + a2 * b3 + a3 * b2 - a4 * b1 + a5 * b0;
        if det.abs() <= tolerance() {
            return Err(MathError::SingularMatrix { determinant: det });
        }
        let inv_det = 1.0 / det;
        Ok(Matrix4::new(
            (m[5] * b5 - m[6] * b4 + m[7] * b3) * inv_det,
            (-m[1] * b5 + m[2] * b4 - m[3] * b3) * inv_det,
            (m[13] * a5 - m[14] * a4 + m[15] * a3) * inv_det,
            (-m[9] * a5 + m[10] * a4 - m[11] * a3) * inv_det,
            (-m[4] * b5 + m[6] * b2 - m[7] * b1) * inv_det,
            (m[0] * b5 - m[2] * b2 + m[3] * b1) * inv_det,
            (-m[12] * a5 + m[14] * a2 - m[15] * a1) * inv_det,
            (m[8] * a5 - m[10] * a2 + m[11] * a1) * inv_det,
            (m[4] * b4 - m[5] * b2 + m[7] * b0) * inv_det,
            (-m[0] * b4 + m[1] * b2 - m[3] * b0) * inv_det,
            (m[12] * a4 - m[13] * a2 + m[15] * a0) * inv_det,
            (-m[8] * a4 + m[9] * a2 - m[11] * a0) * inv_det,
            (-m[4] * b3 + m[5] * b1 - m[6] * b0) * inv_det,
            (m[0] * b3 - m[1] * b1 + m[2] * b0) * inv_det,
            (-m[12] * a3 + m[13] * a1 - m[14] * a0) * inv_det,
            (m[8] * a3 - m[9] * a1 + m[10] * a0) * inv_det,
        ))
    }

    /// Full affine application: rotation, scale and translation.
    pub fn transform(&self, v: &Vector3) -> Vector3 {
        *v * *self
    }

    /// Upper 3×3 only: directions transform without picking up the
    /// translation.
    pub fn rotate_vector(&self, v: &Vector3) -> Vector3 {
        let m = &self.data;
        Vector3::new(
            v.x * m[0] + v.y * m[4] + v.z * m[8],
            v.x * m[1] + v.y * m[5] + v.z * m[9],
            v.x * m[2] + v.y * m[6] + v.z * m[10],
        )
    }

    /// Gram–Schmidt on the three basis rows (normalized); translation and
    /// the fourth column stay as they are.
    pub fn orthonormal(&self) -> Matrix4 {
        let mut out = *self;
        out.orthonormal_mut();
        out
    }

    pub fn orthonormal_mut(&mut self) {
        let rotation = self.to_matrix3().orthonormal();
        self.set_rotation(&rotation);
    }

    /// Rigid frame at `eye` looking at `target`.
    ///
    /// `up_target` is a POINT: the up direction is `up_target - eye`. The
    /// orientation comes from [`aim`](crate::queries::aim) with the same
    /// axis-pair rules.
    pub fn look_at(
        eye: &Vector3,
        target: &Vector3,
        up_target: &Vector3,
        primary: Axis,
        secondary: Axis,
    ) -> Result<Matrix4, MathError> {
        let frame = Matrix3::look_at(&(*target - *eye), &(*up_target - *eye), primary, secondary)?;
        Ok(Matrix4::from_matrix3_and_position(&frame, eye))
    }

    /// [`look_at`](Self::look_at) keeping the current position as eye.
    pub fn look_at_mut(
        &mut self,
        target: &Vector3,
        up_target: &Vector3,
        primary: Axis,
        secondary: Axis,
    ) -> Result<(), MathError> {
        *self = Matrix4::look_at(&self.position(), target, up_target, primary, secondary)?;
        Ok(())
    }

    /// Componentwise comparison with an explicit precision.
    pub fn almost_equal(&self, other: &Matrix4, precision: Real) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| almost_equal(*a, *b, precision))
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Matrix4::IDENTITY
    }
}

impl From<[Real; 16]> for Matrix4 {
    #[inline]
    fn from(data: [Real; 16]) -> Self {
        Matrix4 { data }
    }
}

impl From<Matrix3> for Matrix4 {
    #[inline]
    fn from(m: Matrix3) -> Self {
        Matrix4::from_matrix3(&m)
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    /// Row-major product `self · other`; applies `self` first to a row
    /// vector.
    fn mul(self, other: Matrix4) -> Matrix4 {
        let a = &self.data;
        let b = &other.data;
        let mut data = [0.0; 16];
        for (i, out_row) in data.chunks_exact_mut(4).enumerate() {
            for (j, out) in out_row.iter_mut().enumerate() {
                *out = a[i * 4] * b[j]
                    + a[i * 4 + 1] * b[4 + j]
                    + a[i * 4 + 2] * b[8 + j]
                    + a[i * 4 + 3] * b[12 + j];
            }
        }
        Matrix4 { data }
    }
}

impl MulAssign for Matrix4 {
    /// Computes into a fresh matrix before storing, so rows read during
    /// the product are never half-written.
    fn mul_assign(&mut self, other: Matrix4) {
        *self = *self * other;
    }
}

impl Mul<Real> for Matrix4 {
    type Output = Matrix4;
    fn mul(self, scalar: Real) -> Matrix4 {
        let mut data = self.data;
        for v in &mut data {
            *v *= scalar;
        }
        Matrix4 { data }
    }
}

impl MulAssign<Real> for Matrix4 {
    fn mul_assign(&mut self, scalar: Real) {
        *self = *self * scalar;
    }
}

impl Add for Matrix4 {
    type Output = Matrix4;
    fn add(self, other: Matrix4) -> Matrix4 {
        let mut data = self.data;
        for (v, o) in data.iter_mut().zip(other.data.iter()) {
            *v += o;
        }
        Matrix4 { data }
    }
}

impl AddAssign for Matrix4 {
    fn add_assign(&mut self, other: Matrix4) {
        *self = *self + other;
    }
}

impl Sub for Matrix4 {
    type Output = Matrix4;
    fn sub(self, other: Matrix4) -> Matrix4 {
        let mut data = self.data;
        for (v, o) in data.iter_mut().zip(other.data.iter()) {
            *v -= o;
        }
        Matrix4 { data }
    }
}

impl SubAssign for Matrix4 {
    fn sub_assign(&mut self, other: Matrix4) {
        *self = *self - other;
    }
}

impl Index<usize> for Matrix4 {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        &self.data[i]
    }
}

impl IndexMut<usize> for Matrix4 {
    fn index_mut(&mut self, i: usize) -> &mut Real {
        &mut self.data[i]
    }
}

impl Index<(usize, usize)> for Matrix4 {
    type Output = Real;
    fn index(&self, (row, column): (usize, usize)) -> &Real {
        assert!(row < 4 && column < 4, "Matrix4 index out of range: ({}, {})", row, column);
        &self.data[row * 4 + column]
    }
}

impl IndexMut<(usize, usize)> for Matrix4 {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Real {
        assert!(row < 4 && column < 4, "Matrix4 index out of range: ({}, {})", row, column);
        &mut self.data[row * 4 + column]
    }
}

impl Display for Matrix4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = &self.data;
        write!(
            f,
            "Matrix4([{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}])",
            m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8], m[9], m[10], m[11], m[12],
            m[13], m[14], m[15]
        )
    }
}

impl approx::AbsDiffEq for Matrix4 {
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

impl approx::RelativeEq for Matrix4 {
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

impl approx::UlpsEq for Matrix4 {
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
    use crate::float_types::FRAC_PI_2;
    use approx::assert_abs_diff_eq;

    fn sample_affine() -> Matrix4 {
        let rotation = Matrix3::from_euler(0.3, -0.8, 1.4, RotationOrder::XZY);
        let scaled = Matrix3::from_scale(&Vector3::new(1.5, 0.75, 2.0)) * rotation;
        Matrix4::from_matrix3_and_position(&scaled, &Vector3::new(3.0, -2.0, 5.0))
    }

    #[test]
    fn transform_applies_rotation_then_translation() {
        let m = Matrix4::from_matrix3_and_position(
            &Matrix3::rotation_z(FRAC_PI_2),
            &Vector3::new(10.0, 0.0, 0.0),
        );
        let p = m.transform(&Vector3::X_AXIS);
        assert_abs_diff_eq!(p, Vector3::new(10.0, 1.0, 0.0), epsilon = 1e-12);
        // operator form is the same application
        assert_abs_diff_eq!(Vector3::X_AXIS * m, p, epsilon = 1e-12);
    }

    #[test]
    fn rotate_vector_ignores_translation() {
        let m = Matrix4::from_matrix3_and_position(
            &Matrix3::rotation_z(FRAC_PI_2),
            &Vector3::new(10.0, 20.0, 30.0),
        );
        assert_abs_diff_eq!(m.rotate_vector(&Vector3::X_AXIS), Vector3::Y_AXIS, epsilon = 1e-12);
    }

    #[test]
    fn inverse_round_trip() {
        let m = sample_affine();
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(m * inv, Matrix4::IDENTITY, epsilon = 1e-9);
        assert_abs_diff_eq!(inv * m, Matrix4::IDENTITY, epsilon = 1e-9);
    }

    #[test]
    fn inverse_undoes_transform() {
        let m = sample_affine();
        let inv = m.inverse().unwrap();
        let p = Vector3::new(0.4, 7.0, -2.5);
        assert_abs_diff_eq!(inv.transform(&m.transform(&p)), p, epsilon = 1e-9);
    }

    #[test]
    fn singular_inverse_is_an_error() {
        let m = Matrix4::from_scale(&Vector3::new(1.0, 1.0, 0.0));
        assert!(matches!(m.inverse(), Err(MathError::SingularMatrix { .. })));
    }

    #[test]
    fn determinant_of_pure_translation_is_one() {
        let m = Matrix4::from_position(&Vector3::new(4.0, 5.0, 6.0));
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            m.inverse().unwrap().position(),
            Vector3::new(-4.0, -5.0, -6.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn mul_assign_matches_mul_for_aliasing_square() {
        let m = sample_affine();
        let squared = m * m;
        let mut aliased = m;
        aliased *= aliased;
        assert_abs_diff_eq!(aliased, squared, epsilon = 0.0);
    }

    #[test]
    fn translate_moves_along_local_axes() {
        let mut m = Matrix4::from_matrix3_and_position(
            &Matrix3::rotation_z(FRAC_PI_2),
            &Vector3::new(1.0, 1.0, 1.0),
        );
        // local +X points along world +Y
        m.translate(&Vector3::new(2.0, 0.0, 0.0));
        assert_abs_diff_eq!(m.position(), Vector3::new(1.0, 3.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn scale_round_trip() {
        let mut m = sample_affine();
        m.set_scale(&Vector3::new(2.0, 2.0, 2.0));
        assert_abs_diff_eq!(m.scale(), Vector3::new(2.0, 2.0, 2.0), epsilon = 1e-9);
        assert_abs_diff_eq!(m.position(), Vector3::new(3.0, -2.0, 5.0), epsilon = 1e-12);
    }

    #[test]
    fn orthonormal_keeps_position_and_unit_rows() {
        let skewed = sample_affine();
        let fixed = skewed.orthonormal();
        assert_abs_diff_eq!(fixed.position(), skewed.position(), epsilon = 1e-12);
        assert_abs_diff_eq!(fixed.axis_x().length(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fixed.axis_y().length(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fixed.axis_z().length(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fixed.axis_x().dot(&fixed.axis_y()), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn euler_round_trip_through_upper_block() {
        let m = Matrix4::from_euler(0.2, 0.5, -0.9, RotationOrder::ZYX);
        let e = m.to_euler(RotationOrder::ZYX);
        assert_abs_diff_eq!(
            Matrix4::from_euler(e.x, e.y, e.z, RotationOrder::ZYX),
            m,
            epsilon = 1e-9
        );
    }

    #[test]
    fn vector_to_vector_near_parallel_keeps_full_rank() {
        let from = Vector3::X_AXIS;
        let m = Matrix4::from_vector_to_vector(&from, &from);
        assert_abs_diff_eq!(m.transform(&from), from, epsilon = 1e-9);
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-9);
    }
}
