use approx::assert_abs_diff_eq;
use gmath::queries::{
    CirclePlaneIntersection, LinePlaneIntersection, PlanePlaneIntersection, aim, aim_quaternion,
    circle_plane_intersection, closest_point_to_line, distance_to_line, distance_to_plane,
    fast_aim, line_plane_intersection, plane_normal, plane_plane_intersection,
};
use gmath::{Axis, Matrix3, Vector3};

const AXES: [Axis; 6] = [
    Axis::PosX,
    Axis::NegX,
    Axis::PosY,
    Axis::NegY,
    Axis::PosZ,
    Axis::NegZ,
];

#[test]
fn every_axis_pair_builds_a_proper_frame() {
    let direction = Vector3::new(2.0, -1.0, 0.5);
    let up = Vector3::new(-0.3, 1.0, 0.9);
    for primary in AXES {
        for secondary in AXES {
            if primary.same_letter(secondary) {
                assert!(aim(&direction, &up, primary, secondary).is_err());
                continue;
            }
            let m = aim(&direction, &up, primary, secondary).unwrap();
            assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-9);
            assert_abs_diff_eq!(m * m.transpose(), Matrix3::IDENTITY, epsilon = 1e-9);
            // the primary letter's row points along (or away from) direction
            let p_row = match primary {
                Axis::PosX | Axis::NegX => m.axis_x(),
                Axis::PosY | Axis::NegY => m.axis_y(),
                Axis::PosZ | Axis::NegZ => m.axis_z(),
            };
            let expected = if primary.is_negative() {
                -direction.normalize()
            } else {
                direction.normalize()
            };
            assert_abs_diff_eq!(p_row, expected, epsilon = 1e-9);
            // the secondary letter's row stays in the direction/up half-plane
            let s_row = match secondary {
                Axis::PosX | Axis::NegX => m.axis_x(),
                Axis::PosY | Axis::NegY => m.axis_y(),
                Axis::PosZ | Axis::NegZ => m.axis_z(),
            };
            let leaning = s_row.dot(&up.normalize());
            if secondary.is_negative() {
                assert!(leaning < 0.0, "{:?}/{:?}", primary, secondary);
            } else {
                assert!(leaning > 0.0, "{:?}/{:?}", primary, secondary);
            }
        }
    }
}

#[test]
fn fast_aim_is_the_fixed_y_x_slot_of_aim() {
    let direction = Vector3::new(0.4, 3.0, -1.2);
    let up = Vector3::new(1.0, 0.1, 0.7);
    let fast = fast_aim(&direction, &up).unwrap();
    let general = aim(&direction, &up, Axis::PosY, Axis::PosX).unwrap();
    assert!(fast.almost_equal(&general, 1e-12));
}

#[test]
fn aim_quaternion_carries_the_same_frame() {
    let direction = Vector3::new(1.0, 0.5, -2.0);
    let up = Vector3::Y_AXIS;
    let m = aim(&direction, &up, Axis::PosZ, Axis::PosY).unwrap();
    let q = aim_quaternion(&direction, &up, Axis::PosZ, Axis::PosY).unwrap();
    assert!(q.to_matrix3().almost_equal(&m, 1e-9));
    assert_abs_diff_eq!(q.rotate(&Vector3::Z_AXIS), direction.normalize(), epsilon = 1e-9);
}

#[test]
fn line_distance_agrees_with_the_closest_point() {
    let start = Vector3::new(1.0, -2.0, 0.5);
    let end = Vector3::new(4.0, 2.0, -1.0);
    let probes = [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(2.5, 0.0, 3.0),
        Vector3::new(10.0, 10.0, 10.0),
        Vector3::new(-5.0, -5.0, 2.0),
    ];
    for point in probes {
        for infinite in [false, true] {
            let nearest = closest_point_to_line(&start, &end, &point, infinite);
            let reported = distance_to_line(&start, &end, &point, infinite);
            assert_abs_diff_eq!(reported, point.distance(&nearest), epsilon = 1e-9);
            if !infinite {
                // the clamped point never leaves the segment
                let along = (nearest - start).dot(&(end - start).normalize());
                assert!(along >= -1e-9 && along <= (end - start).length() + 1e-9);
            }
        }
    }
}

#[test]
fn plane_plane_line_lies_in_both_input_planes() {
    let o1 = Vector3::new(1.0, 2.0, 3.0);
    let n1 = Vector3::new(0.2, 1.0, -0.4);
    let o2 = Vector3::new(-2.0, 0.0, 1.0);
    let n2 = Vector3::new(1.0, 0.3, 0.8);
    match plane_plane_intersection(&o1, &n1, &o2, &n2) {
        PlanePlaneIntersection::Line { point, direction } => {
            for step in [0.0, 1.0, -3.5] {
                let sample = point + direction * step;
                assert_abs_diff_eq!(distance_to_plane(&o1, &n1, &sample), 0.0, epsilon = 1e-9);
                assert_abs_diff_eq!(distance_to_plane(&o2, &n2, &sample), 0.0, epsilon = 1e-9);
            }
            assert_abs_diff_eq!(direction.length(), 1.0, epsilon = 1e-12);
        },
        other => panic!("expected a line, got {:?}", other),
    }
}

#[test]
fn tilted_circle_cuts_a_plane_on_the_circle_itself() {
    let center = Vector3::new(1.0, 1.0, 1.0);
    let circle_normal = Vector3::new(1.0, 1.0, 1.0);
    let radius = 3.0;
    let plane_origin = Vector3::new(1.5, 0.0, 0.0);
    let plane_normal_v = Vector3::X_AXIS;
    match circle_plane_intersection(&center, &circle_normal, radius, &plane_origin, &plane_normal_v) {
        CirclePlaneIntersection::Points(a, b) => {
            for hit in [a, b] {
                assert_abs_diff_eq!(hit.distance(&center), radius, epsilon = 1e-9);
                assert_abs_diff_eq!(
                    distance_to_plane(&center, &circle_normal, &hit),
                    0.0,
                    epsilon = 1e-9
                );
                assert_abs_diff_eq!(
                    distance_to_plane(&plane_origin, &plane_normal_v, &hit),
                    0.0,
                    epsilon = 1e-9
                );
            }
            assert!(a.distance(&b) > 1e-6, "distinct intersection points");
        },
        other => panic!("expected two points, got {:?}", other),
    }
}

#[test]
fn segment_misses_where_the_carrier_line_hits() {
    let plane_origin = Vector3::new(0.0, 1.0, 0.0);
    let plane_normal_v = Vector3::new(0.0, 2.0, 0.0);
    let p0 = Vector3::new(3.0, 4.0, 1.0);
    let p1 = Vector3::new(3.0, 2.0, 1.0);
    // the segment stops above the plane
    assert_eq!(
        line_plane_intersection(&p0, &p1, &plane_origin, &plane_normal_v, false),
        LinePlaneIntersection::None
    );
    // its infinite carrier pierces at y = 1
    assert_eq!(
        line_plane_intersection(&p0, &p1, &plane_origin, &plane_normal_v, true),
        LinePlaneIntersection::Point(Vector3::new(3.0, 1.0, 1.0))
    );
}

#[test]
fn triangle_normal_orients_the_half_spaces() {
    let p1 = Vector3::new(0.0, 0.0, 2.0);
    let p2 = Vector3::new(1.0, 0.0, 2.0);
    let p3 = Vector3::new(0.0, 1.0, 2.0);
    let n = plane_normal(&p1, &p2, &p3);
    let above = Vector3::new(0.2, 0.2, 5.0);
    let below = Vector3::new(0.2, 0.2, -1.0);
    let d_above = distance_to_plane(&p1, &n, &above);
    let d_below = distance_to_plane(&p1, &n, &below);
    assert_abs_diff_eq!(d_above.abs(), 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(d_below.abs(), 3.0, epsilon = 1e-12);
    assert!(d_above * d_below < 0.0, "points straddle the plane");
}
