//! Tolerance configuration tests.
//!
//! Kept in their own binary on purpose: the tolerance cell is set once
//! per process, and widening it here would leak into every other suite.

use gmath::errors::MathError;
use gmath::float_types::{set_tolerance, tolerance};
use gmath::{Matrix3, Quaternion, Vector3};

#[test]
fn runtime_tolerance_governs_degeneracy_checks() {
    set_tolerance(1e-3);
    assert_eq!(tolerance(), 1e-3);

    // short vectors now count as degenerate and come back unchanged
    let short = Vector3::new(5e-4, 0.0, 0.0);
    assert_eq!(short.normalize(), short);
    // ordinary vectors still normalize
    assert!((Vector3::new(0.0, 2.0, 0.0).normalize().length() - 1.0).abs() < 1e-12);

    // the zero-axis guard widens with the tolerance
    assert_eq!(
        Quaternion::from_axis_angle(&short, 1.0),
        Err(MathError::ZeroLength)
    );

    // so does the singularity cutoff: a determinant of ~1.25e-4 is now
    // under the bar even though the matrix is formally invertible
    let tiny = Matrix3::from_scale(&Vector3::new(0.05, 0.05, 0.05));
    assert!(matches!(tiny.inverse(), Err(MathError::SingularMatrix { .. })));

    // the cell only ever takes the first value
    set_tolerance(1e-9);
    assert_eq!(tolerance(), 1e-3);
}
