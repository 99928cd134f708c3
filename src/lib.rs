//! Row-major linear algebra for 3D graphics and animation rigs: vectors,
//! matrices, quaternions, euler angles and scale/rotate/translate
//! transforms, plus the spatial queries (aim frames, distances, plane
//! intersections) built on top of them.
//!
//! Vectors are ROW vectors and transform on the right (`v' = v · M`), so
//! matrix products read left to right in application order and the
//! translation of a [`Matrix4`](matrix4::Matrix4) lives in its last row.
//! All comparisons against zero go through a crate-wide
//! [`tolerance`](float_types::tolerance), configurable at startup or via
//! the `GMATH_TOLERANCE` build-time environment variable.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **nalgebra**: `From`/`Into` conversions for [nalgebra](https://crates.io/crates/nalgebra) types
//! - **bytemuck**: `Pod`/`Zeroable` derives for GPU buffer uploads

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod axis;
pub mod vector2;
pub mod vector3;
pub mod vector4;
pub mod euler;
pub mod matrix3;
pub mod matrix4;
pub mod quaternion;
pub mod xfo;
pub mod queries;

#[cfg(feature = "nalgebra")]
pub mod interop;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use axis::{Axis, CartesianPlane, RotationOrder};
pub use errors::MathError;
pub use euler::{AngleUnit, Euler};
pub use float_types::Real;
pub use matrix3::Matrix3;
pub use matrix4::Matrix4;
pub use quaternion::Quaternion;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
pub use xfo::Xfo;
