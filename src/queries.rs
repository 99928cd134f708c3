//! Spatial queries: aim frames, distances and plane intersections.
//!
//! Everything here is a free function over the value types. Lines are
//! given as start/end point pairs with an `infinite` flag deciding
//! whether results clamp to the segment; planes are origin/normal pairs
//! (normals need not be unit length, they are normalized where it
//! matters).

use crate::axis::Axis;
use crate::errors::MathError;
use crate::float_types::{Real, almost_equal, tolerance};
use crate::matrix3::Matrix3;
use crate::quaternion::Quaternion;
use crate::vector3::Vector3;

/// **Mathematical Foundation: Aim Frame Construction**
///
/// Build the rotation whose `primary` axis points along `direction` and
/// whose `secondary` axis stays as close to `up` as orthogonality allows:
/// ```text
/// p = ±direction̂        (sign from the primary axis)
/// s = ±up̂               (sign from the secondary axis)
/// t = (p × s)̂           (tertiary)
/// s = (t × p)̂           (re-orthogonalized secondary)
/// ```
/// The three vectors land in the frame rows slot-by-slot for each of the
/// six letter pairs, with the tertiary negated where right-handedness
/// requires it.
///
/// Degenerate `direction` or `up`, or the two collinear, yield
/// [`MathError::ZeroLength`]; a same-letter axis pair (such as
/// `PosX`/`NegX`) yields [`MathError::InvalidAxisPair`].
pub fn aim(
    direction: &Vector3,
    up: &Vector3,
    primary: Axis,
    secondary: Axis,
) -> Result<Matrix3, MathError> {
    if primary.same_letter(secondary) {
        return Err(MathError::InvalidAxisPair { primary, secondary });
    }
    if direction.length() <= tolerance() || up.length() <= tolerance() {
        return Err(MathError::ZeroLength);
    }
    let mut p = direction.normalize();
    if primary.is_negative() {
        p = -p;
    }
    let mut s = up.normalize();
    if secondary.is_negative() {
        s = -s;
    }
    let t = p.cross(&s);
    if t.length() <= tolerance() {
        // direction and up collinear: no plane to build the frame in
        return Err(MathError::ZeroLength);
    }
    let t = t.normalize();
    let s = t.cross(&p).normalize();
    use Axis::*;
    let (x, y, z) = match (primary, secondary) {
        (PosX | NegX, PosY | NegY) => (p, s, t),
        (PosX | NegX, PosZ | NegZ) => (p, -t, s),
        (PosY | NegY, PosX | NegX) => (s, p, -t),
        (PosY | NegY, PosZ | NegZ) => (t, p, s),
        (PosZ | NegZ, PosX | NegX) => (s, t, p),
        (PosZ | NegZ, PosY | NegY) => (-t, s, p),
        _ => unreachable!("same-letter pairs rejected above"),
    };
    Ok(Matrix3::from_rows(&x, &y, &z))
}

/// [`aim`] as a quaternion.
pub fn aim_quaternion(
    direction: &Vector3,
    up: &Vector3,
    primary: Axis,
    secondary: Axis,
) -> Result<Quaternion, MathError> {
    Ok(aim(direction, up, primary, secondary)?.to_quaternion())
}

/// Fixed-slot aim: the frame's Y axis points along `direction`, `up`
/// steers the X axis. Cheaper than [`aim`] when the axis pair never
/// changes.
pub fn fast_aim(direction: &Vector3, up: &Vector3) -> Result<Matrix3, MathError> {
    if direction.length() <= tolerance() || up.length() <= tolerance() {
        return Err(MathError::ZeroLength);
    }
    let primary = direction.normalize();
    let swing = primary.cross(&up.normalize());
    if swing.length() <= tolerance() {
        return Err(MathError::ZeroLength);
    }
    let secondary = swing.cross(&primary).normalize();
    let tertiary = secondary.cross(&primary).normalize();
    Ok(Matrix3::from_rows(&secondary, &primary, &tertiary))
}

/// Signed distance from `point` to the plane; positive on the side the
/// normal points to.
pub fn distance_to_plane(origin: &Vector3, normal: &Vector3, point: &Vector3) -> Real {
    (*point - *origin).dot(&normal.normalize())
}

/// Distance from `point` to the line through `start` and `end`.
///
/// A finite line clamps to the segment: beyond either end the distance is
/// to that endpoint. A zero-length line degenerates to the distance to
/// `start`.
pub fn distance_to_line(start: &Vector3, end: &Vector3, point: &Vector3, infinite: bool) -> Real {
    let offset = *point - *start;
    let span = *end - *start;
    let len = span.length();
    if len <= tolerance() {
        return offset.length();
    }
    let dir = span / len;
    let along = offset.dot(&dir);
    if !infinite {
        if along < 0.0 {
            return offset.length();
        }
        if along > len {
            return point.distance(end);
        }
    }
    (offset.squared_length() - along * along).max(0.0).sqrt()
}

/// The point on the line through `start` and `end` nearest to `point`;
/// clamped into the segment when the line is finite. A zero-length line
/// degenerates to `start`.
pub fn closest_point_to_line(
    start: &Vector3,
    end: &Vector3,
    point: &Vector3,
    infinite: bool,
) -> Vector3 {
    let span = *end - *start;
    let len = span.length();
    if len <= tolerance() {
        return *start;
    }
    let dir = span / len;
    let mut along = (*point - *start).dot(&dir);
    if !infinite {
        along = along.clamp(0.0, len);
    }
    *start + dir * along
}

/// Outcome of a line/plane intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinePlaneIntersection {
    /// Finite segment misses the plane (the infinite carrier would hit).
    None,
    /// Line parallel to and off the plane.
    Parallel,
    /// Line parallel to and inside the plane.
    LiesInPlane,
    Point(Vector3),
}

/// Intersect the line through `p0` and `p1` with the plane.
pub fn line_plane_intersection(
    p0: &Vector3,
    p1: &Vector3,
    plane_origin: &Vector3,
    plane_normal: &Vector3,
    infinite: bool,
) -> LinePlaneIntersection {
    let span = *p1 - *p0;
    let facing = span.dot(plane_normal);
    let reach = (*plane_origin - *p0).dot(plane_normal);
    if facing.abs() <= tolerance() {
        return if reach.abs() <= tolerance() {
            LinePlaneIntersection::LiesInPlane
        } else {
            LinePlaneIntersection::Parallel
        };
    }
    let t = reach / facing;
    if !infinite && !(0.0..=1.0).contains(&t) {
        return LinePlaneIntersection::None;
    }
    LinePlaneIntersection::Point(*p0 + span * t)
}

/// Outcome of a plane/plane intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanePlaneIntersection {
    Parallel,
    Line { point: Vector3, direction: Vector3 },
}

/// Intersect two planes. The reported direction is `n̂1 × n̂2` normalized
/// and the point is the spot where `o1`, walked inside the first plane
/// straight toward the second, crosses it.
pub fn plane_plane_intersection(
    o1: &Vector3,
    n1: &Vector3,
    o2: &Vector3,
    n2: &Vector3,
) -> PlanePlaneIntersection {
    let u1 = n1.normalize();
    let u2 = n2.normalize();
    if 1.0 - u1.dot(&u2).abs() <= tolerance() {
        return PlanePlaneIntersection::Parallel;
    }
    let direction = u1.cross(&u2).normalize();
    let walk = direction.cross(&u1);
    // walk · u2 = |u1 × u2|, bounded away from zero for non-parallel planes
    let t = (*o2 - *o1).dot(&u2) / walk.dot(&u2);
    PlanePlaneIntersection::Line {
        point: *o1 + walk * t,
        direction,
    }
}

/// Outcome of a circle/plane intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CirclePlaneIntersection {
    /// The circle's plane and the other plane never meet.
    Parallel,
    /// The planes meet but the chord line passes the circle.
    None,
    Tangent(Vector3),
    Points(Vector3, Vector3),
}

/// Intersect the circle (center, plane normal, radius) with a plane: the
/// two planes meet in a line, and the circle cuts that line in zero, one
/// or two points.
pub fn circle_plane_intersection(
    center: &Vector3,
    circle_normal: &Vector3,
    radius: Real,
    plane_origin: &Vector3,
    plane_normal: &Vector3,
) -> CirclePlaneIntersection {
    match plane_plane_intersection(center, circle_normal, plane_origin, plane_normal) {
        PlanePlaneIntersection::Parallel => CirclePlaneIntersection::Parallel,
        PlanePlaneIntersection::Line { point, direction } => {
            let foot = closest_point_to_line(&point, &(point + direction), center, true);
            let distance = center.distance(&foot);
            if almost_equal(distance, radius, tolerance()) {
                CirclePlaneIntersection::Tangent(foot)
            } else if distance > radius {
                CirclePlaneIntersection::None
            } else {
                let half_chord = (radius * radius - distance * distance).sqrt();
                CirclePlaneIntersection::Points(
                    foot - direction * half_chord,
                    foot + direction * half_chord,
                )
            }
        },
    }
}

/// Unit normal of the plane through three points, oriented by the winding
/// `p1 → p2 → p3`.
pub fn plane_normal(p1: &Vector3, p2: &Vector3, p3: &Vector3) -> Vector3 {
    (*p3 - *p2).cross(&(*p2 - *p1)).normalize()
}
