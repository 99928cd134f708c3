//! Scale/rotate/translate transform triple.
//!
//! An [`Xfo`] applies its parts in SRT order: scale first, then the
//! orientation, then the translation. Composition and inversion only
//! close over this form when the scale is uniform, so both are fallible
//! rather than silently wrong.

use crate::axis::{Axis, CartesianPlane};
use crate::errors::MathError;
use crate::float_types::{Real, tolerance};
use crate::matrix4::Matrix4;
use crate::quaternion::Quaternion;
use crate::vector3::Vector3;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xfo {
    pub ori: Quaternion,
    pub tr: Vector3,
    pub sc: Vector3,
}

impl Xfo {
    pub const IDENTITY: Xfo = Xfo {
        ori: Quaternion::IDENTITY,
        tr: Vector3::ZERO,
        sc: Vector3::ONE,
    };

    #[inline]
    pub const fn new(ori: Quaternion, tr: Vector3, sc: Vector3) -> Self {
        Xfo { ori, tr, sc }
    }

    #[inline]
    pub const fn from_translation(tr: Vector3) -> Self {
        Xfo {
            ori: Quaternion::IDENTITY,
            tr,
            sc: Vector3::ONE,
        }
    }

    #[inline]
    pub const fn from_orientation(ori: Quaternion) -> Self {
        Xfo {
            ori,
            tr: Vector3::ZERO,
            sc: Vector3::ONE,
        }
    }

    #[inline]
    pub const fn from_orientation_and_translation(ori: Quaternion, tr: Vector3) -> Self {
        Xfo {
            ori,
            tr,
            sc: Vector3::ONE,
        }
    }

    /// Decompose an affine row matrix into the triple: upper 3×3 splits
    /// into rotation and scale ([`crate::matrix3::Matrix3::decompose`]),
    /// row 3 is the translation. A singular upper block is an error.
    pub fn from_matrix4(m: &Matrix4) -> Result<Xfo, MathError> {
        let (rotation, scale) = m.to_matrix3().decompose()?;
        Ok(Xfo {
            ori: rotation.to_quaternion(),
            tr: m.position(),
            sc: scale,
        })
    }

    /// The equivalent affine row matrix: upper 3×3 is `scale · rotation`,
    /// row 3 the translation.
    pub fn to_matrix4(&self) -> Matrix4 {
        let upper = crate::matrix3::Matrix3::from_scale(&self.sc) * self.ori.to_matrix3();
        Matrix4::from_matrix3_and_position(&upper, &self.tr)
    }

    /// True when the scale is uniform within `|sc.x| · tolerance · 10`.
    fn scale_is_uniform(&self) -> bool {
        let precision = self.sc.x.abs() * tolerance() * 10.0;
        (self.sc.x - self.sc.y).abs() <= precision && (self.sc.x - self.sc.z).abs() <= precision
    }

    /// Compose with `other`, `self` applied first.
    ///
    /// ```text
    /// tr'  = other.tr + other.ori.rotate(self.tr * other.sc)
    /// ori' = (other.ori * self.ori).normalize()
    /// sc'  = self.sc * other.sc
    /// ```
    /// `other`'s scale must be uniform: applied after `self`'s rotation,
    /// a non-uniform scale shears, and a shear has no representation in
    /// the triple. That case is [`MathError::NonUniformScale`]. There is
    /// deliberately no `Mul` operator; composition stays fallible and
    /// explicit.
    pub fn multiply(&self, other: &Xfo) -> Result<Xfo, MathError> {
        if !other.scale_is_uniform() {
            return Err(MathError::NonUniformScale {
                x: other.sc.x,
                y: other.sc.y,
                z: other.sc.z,
            });
        }
        Ok(Xfo {
            ori: (other.ori * self.ori).normalize(),
            tr: other.tr + other.ori.rotate(&(self.tr * other.sc)),
            sc: self.sc * other.sc,
        })
    }

    /// Apply to a point: scale, rotate, translate.
    pub fn transform(&self, v: &Vector3) -> Vector3 {
        self.ori.rotate(&(*v * self.sc)) + self.tr
    }

    /// Apply the [`inverse`](Self::inverse) to a point.
    pub fn inverse_transform(&self, v: &Vector3) -> Result<Vector3, MathError> {
        Ok(self.inverse()?.transform(v))
    }

    /// The transform undoing this one. Requires a uniform scale for the
    /// same reason as [`multiply`](Self::multiply).
    pub fn inverse(&self) -> Result<Xfo, MathError> {
        if !self.scale_is_uniform() {
            return Err(MathError::NonUniformScale {
                x: self.sc.x,
                y: self.sc.y,
                z: self.sc.z,
            });
        }
        let ori = self.ori.inverse();
        let sc = self.sc.reciprocal();
        let tr = ori.rotate(&(-self.tr * sc));
        Ok(Xfo { ori, tr, sc })
    }

    /// Blend toward `other`: orientation by
    /// [`slerp`](Quaternion::slerp), translation and scale linearly.
    pub fn slerp(&self, other: &Xfo, t: Real, shortest_path: bool) -> Xfo {
        Xfo {
            ori: self.ori.slerp(&other.ori, t, shortest_path),
            tr: self.tr.lerp(&other.tr, t),
            sc: self.sc.lerp(&other.sc, t),
        }
    }

    /// Translation distance; orientation and scale do not contribute.
    pub fn distance_to(&self, other: &Xfo) -> Real {
        self.tr.distance(&other.tr)
    }

    /// Mirror across the plane through `center` with the given `normal`:
    /// the translation reflects about the plane, the orientation is
    /// re-aimed per [`Quaternion::mirror_normal`], the scale is kept.
    pub fn mirror(
        &self,
        center: &Vector3,
        normal: &Vector3,
        primary: Axis,
        secondary: Axis,
    ) -> Result<Xfo, MathError> {
        Ok(Xfo {
            ori: self.ori.mirror_normal(normal, primary, secondary)?,
            tr: (self.tr - *center).mirror(normal) + *center,
            sc: self.sc,
        })
    }

    /// [`mirror`](Self::mirror) across a cartesian plane through the
    /// origin, with the conventional axis pair for that plane.
    pub fn mirror_plane(&self, plane: CartesianPlane) -> Result<Xfo, MathError> {
        let (primary, secondary) = plane.mirror_axes();
        self.mirror(&Vector3::ZERO, &plane.normal(), primary, secondary)
    }

    /// All three parts must match within `precision`.
    pub fn almost_equal(&self, other: &Xfo, precision: Real) -> bool {
        self.ori.almost_equal(&other.ori, precision)
            && self.tr.almost_equal(&other.tr, precision)
            && self.sc.almost_equal(&other.sc, precision)
    }
}

impl Default for Xfo {
    fn default() -> Self {
        Xfo::IDENTITY
    }
}

impl From<Quaternion> for Xfo {
    fn from(ori: Quaternion) -> Self {
        Xfo::from_orientation(ori)
    }
}

impl Display for Xfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Xfo(ori: {}, tr: {}, sc: {})", self.ori, self.tr, self.sc)
    }
}

impl approx::AbsDiffEq for Xfo {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.ori.abs_diff_eq(&other.ori, epsilon)
            && self.tr.abs_diff_eq(&other.tr, epsilon)
            && self.sc.abs_diff_eq(&other.sc, epsilon)
    }
}

impl approx::RelativeEq for Xfo {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.ori.relative_eq(&other.ori, epsilon, max_relative)
            && self.tr.relative_eq(&other.tr, epsilon, max_relative)
            && self.sc.relative_eq(&other.sc, epsilon, max_relative)
    }
}

impl approx::UlpsEq for Xfo {
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.ori.ulps_eq(&other.ori, epsilon, max_ulps)
            && self.tr.ulps_eq(&other.tr, epsilon, max_ulps)
            && self.sc.ulps_eq(&other.sc, epsilon, max_ulps)
    }
}
