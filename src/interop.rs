//! Conversions to and from [`nalgebra`] types (feature `nalgebra`).
//!
//! This crate multiplies row vectors from the left (`v' = v · M`) while
//! nalgebra multiplies column vectors from the right (`v' = N · v`), so a
//! matrix converts to its transpose: the same rotation, expressed for the
//! other convention. Since our storage is row-major and nalgebra's is
//! column-major, the raw component array carries over unchanged.
//! Quaternions and vectors map componentwise.

use crate::float_types::Real;
use crate::matrix3::Matrix3;
use crate::matrix4::Matrix4;
use crate::quaternion::Quaternion;
use crate::vector2::Vector2;
use crate::vector3::Vector3;
use crate::vector4::Vector4;

impl From<Vector2> for nalgebra::Vector2<Real> {
    fn from(v: Vector2) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl From<nalgebra::Vector2<Real>> for Vector2 {
    fn from(v: nalgebra::Vector2<Real>) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector3> for nalgebra::Vector3<Real> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Vector3<Real>> for Vector3 {
    fn from(v: nalgebra::Vector3<Real>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Point3<Real> {
    fn from(v: Vector3) -> Self {
        nalgebra::Point3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<Real>> for Vector3 {
    fn from(p: nalgebra::Point3<Real>) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Vector4> for nalgebra::Vector4<Real> {
    fn from(v: Vector4) -> Self {
        nalgebra::Vector4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<nalgebra::Vector4<Real>> for Vector4 {
    fn from(v: nalgebra::Vector4<Real>) -> Self {
        Vector4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Matrix3> for nalgebra::Matrix3<Real> {
    fn from(m: Matrix3) -> Self {
        // row-major data read column-major is exactly the transpose
        nalgebra::Matrix3::from_column_slice(&m.data)
    }
}

impl From<nalgebra::Matrix3<Real>> for Matrix3 {
    fn from(m: nalgebra::Matrix3<Real>) -> Self {
        let mut data = [0.0; 9];
        data.copy_from_slice(m.as_slice());
        Matrix3 { data }
    }
}

impl From<Matrix4> for nalgebra::Matrix4<Real> {
    fn from(m: Matrix4) -> Self {
        nalgebra::Matrix4::from_column_slice(&m.data)
    }
}

impl From<nalgebra::Matrix4<Real>> for Matrix4 {
    fn from(m: nalgebra::Matrix4<Real>) -> Self {
        let mut data = [0.0; 16];
        data.copy_from_slice(m.as_slice());
        Matrix4 { data }
    }
}

impl From<Quaternion> for nalgebra::Quaternion<Real> {
    fn from(q: Quaternion) -> Self {
        nalgebra::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

impl From<nalgebra::Quaternion<Real>> for Quaternion {
    fn from(q: nalgebra::Quaternion<Real>) -> Self {
        Quaternion::new(q.i, q.j, q.k, q.w)
    }
}

impl From<Quaternion> for nalgebra::UnitQuaternion<Real> {
    fn from(q: Quaternion) -> Self {
        nalgebra::UnitQuaternion::from_quaternion(q.into())
    }
}

impl From<nalgebra::UnitQuaternion<Real>> for Quaternion {
    fn from(q: nalgebra::UnitQuaternion<Real>) -> Self {
        q.into_inner().into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn matrix3_conversion_transposes() {
        let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let n: nalgebra::Matrix3<Real> = m.into();
        assert_eq!(n[(0, 1)], m[(1, 0)]);
        assert_eq!(n[(2, 0)], m[(0, 2)]);
        let back: Matrix3 = n.into();
        assert_eq!(back, m);
    }

    #[test]
    fn rotations_agree_across_conventions() {
        let m = Matrix3::rotation_z(0.9);
        let n: nalgebra::Matrix3<Real> = m.into();
        let v = Vector3::new(1.0, 2.0, 3.0);
        let ours = v * m;
        let theirs: Vector3 = (n * nalgebra::Vector3::from(v)).into();
        assert_relative_eq!(ours, theirs, epsilon = 1e-12);
    }

    #[test]
    fn affine_transforms_agree_across_conventions() {
        let m = Matrix4::from_matrix3_and_position(
            &Matrix3::rotation_y(-0.4),
            &Vector3::new(1.0, 2.0, 3.0),
        );
        let n: nalgebra::Matrix4<Real> = m.into();
        let p = Vector3::new(-2.0, 0.5, 4.0);
        let ours = m.transform(&p);
        let homogeneous = n * nalgebra::Vector4::new(p.x, p.y, p.z, 1.0);
        let theirs = Vector3::new(homogeneous.x, homogeneous.y, homogeneous.z);
        assert_relative_eq!(ours, theirs, epsilon = 1e-12);
    }

    #[test]
    fn quaternion_rotation_agrees_with_unit_quaternion() {
        let q = Quaternion::from_axis_angle(&Vector3::new(1.0, 1.0, 0.5), 1.1).unwrap();
        let unit: nalgebra::UnitQuaternion<Real> = q.into();
        let v = Vector3::new(0.3, -1.0, 2.0);
        let ours = q.rotate(&v);
        let theirs: Vector3 = (unit * nalgebra::Vector3::from(v)).into();
        assert_relative_eq!(ours, theirs, epsilon = 1e-12);
        let back: Quaternion = unit.into();
        assert!(back.almost_equal(&q, 1e-12));
    }
}
