//! Scalar type selection and the crate-wide comparison tolerance.

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used for degeneracy checks and approximate
/// comparisons across the crate.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `GMATH_TOLERANCE` (e.g. `GMATH_TOLERANCE=1e-9 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
///
/// Every comparison entry point also accepts an explicit precision argument,
/// so the cell is a default, not a hidden knob.
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-6
    }
    #[cfg(feature = "f64")]
    {
        1e-12
    }
}

/// Returns the current tolerance value.
/// If not set yet, it tries `GMATH_TOLERANCE` (parsed as the active `Real`) and
/// falls back to the precision default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("GMATH_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `gmath::float_types::set_tolerance(1e-9);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// Clamp a value into `[-1, 1]`.
///
/// Dot products of nominally unit vectors drift just past ±1; feeding the raw
/// value to `acos`/`asin` would return NaN.
#[inline]
pub fn clamp_unit(x: Real) -> Real {
    x.clamp(-1.0, 1.0)
}

/// `acos` with the argument clamped into `[-1, 1]`.
/// Out-of-range input maps to the endpoint value: `acos_safe(1.5) == 0`,
/// `acos_safe(-2.0) == PI`.
#[inline]
pub fn acos_safe(x: Real) -> Real {
    clamp_unit(x).acos()
}

/// `asin` with the argument clamped into `[-1, 1]`.
#[inline]
pub fn asin_safe(x: Real) -> Real {
    clamp_unit(x).asin()
}

/// Degrees to radians.
#[inline]
pub fn to_radians(x: Real) -> Real {
    x * (PI / 180.0)
}

/// Radians to degrees.
#[inline]
pub fn to_degrees(x: Real) -> Real {
    x * (180.0 / PI)
}

/// `|a - b| <= precision`.
#[inline]
pub fn almost_equal(a: Real, b: Real, precision: Real) -> bool {
    (a - b).abs() <= precision
}

/// `|x| <= tolerance()`.
#[inline]
pub fn is_close_to_zero(x: Real) -> bool {
    x.abs() <= tolerance()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clamped_trig_endpoints() {
        assert_eq!(acos_safe(1.5), 0.0);
        assert_eq!(acos_safe(-2.0), PI);
        assert_eq!(asin_safe(2.0), FRAC_PI_2);
        assert_eq!(asin_safe(-2.0), -FRAC_PI_2);
        // In-range values pass straight through
        assert!((acos_safe(0.0) - FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn degree_radian_round_trip() {
        assert!((to_degrees(to_radians(90.0)) - 90.0).abs() < 1e-12);
        assert!((to_radians(180.0) - PI).abs() < 1e-15);
    }

    #[test]
    fn almost_equal_uses_explicit_precision() {
        assert!(almost_equal(1.0, 1.0 + 1e-9, 1e-8));
        assert!(!almost_equal(1.0, 1.0 + 1e-6, 1e-8));
    }
}
