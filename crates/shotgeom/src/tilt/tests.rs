use super::*;
use crate::draw::{draw_triangle, ReplayToken, TriangleCfg};
use crate::error::{GeomError, Target};
use crate::tangent::solve_tangent_circle;
use crate::GeomCfg;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn goal() -> (Vector2<f64>, Vector2<f64>) {
    (vector![-20.0, 0.0], vector![20.0, 0.0])
}

fn tangent_source() -> Vector2<f64> {
    let (a, b) = goal();
    solve_tangent_circle(a, b, 32.0).unwrap().point
}

#[test]
fn tangent_point_tilt_has_equal_times() {
    let (a, b) = goal();
    let p = tangent_source();
    let sol = solve_equal_time_tilt(p, a, b).unwrap();
    assert_eq!(sol.branch, TiltBranch::Solved);
    assert!((sol.ghat.norm() - 1.0).abs() < 1e-12);
    let [ta, tb] = sol.arrival_times();
    assert!((ta - tb).abs() <= 1e-6 * ta);
    assert!((sol.arrival_time - ta).abs() < 1e-12);
    // both rails point downhill, so the floor never engages
    for i in 0..2 {
        assert!(sol.ghat.dot(&sol.units[i]) > 0.0);
        assert_eq!(sol.accelerations[i], sol.ghat.dot(&sol.units[i]));
    }
    assert!((sol.distances[0] - (a - p).norm()).abs() < 1e-12);
    assert!((sol.distances[1] - (b - p).norm()).abs() < 1e-12);
}

#[test]
fn isoceles_configuration_points_straight_down_the_axis() {
    // Symmetric targets: equal rails, so ghat bisects them.
    let p = vector![0.0, 10.0];
    let sol = solve_equal_time_tilt(p, vector![-3.0, 0.0], vector![3.0, 0.0]).unwrap();
    assert!(sol.ghat.x.abs() < 1e-12);
    assert!((sol.ghat.y + 1.0).abs() < 1e-12);
}

#[test]
fn collinear_same_side_falls_back_to_first_rail() {
    let p = vector![0.0, 0.0];
    let sol = solve_equal_time_tilt(p, vector![1.0, 0.0], vector![3.0, 0.0]).unwrap();
    assert_eq!(sol.branch, TiltBranch::CollinearFallback);
    assert_eq!(sol.ghat.into_inner(), vector![1.0, 0.0]);
    assert_eq!(sol.accelerations, [1.0, 1.0]);
    assert!((sol.arrival_time - 2.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn collinear_opposite_side_hits_acceleration_floor() {
    let p = vector![0.0, 0.0];
    let sol = solve_equal_time_tilt(p, vector![0.0, 2.0], vector![0.0, -5.0]).unwrap();
    assert_eq!(sol.branch, TiltBranch::CollinearFallback);
    assert!((sol.ghat.into_inner() - vector![0.0, 1.0]).norm() < 1e-15);
    assert_eq!(sol.accelerations[1], GeomCfg::default().accel_floor);
    assert!(sol.time_mismatch() > 0.5);
}

#[test]
fn custom_floor_is_honoured() {
    let cfg = GeomCfg {
        accel_floor: 1e-3,
        ..GeomCfg::default()
    };
    let p = vector![0.0, 0.0];
    let sol = solve_equal_time_tilt_with(p, vector![1.0, 0.0], vector![-1.0, 0.0], cfg).unwrap();
    assert_eq!(sol.accelerations[1], 1e-3);
}

#[test]
fn nearly_collinear_rails_never_report_solved_with_floored_times() {
    let p = vector![0.0, 0.0];
    let a = vector![1.0, 0.0];
    let floor = GeomCfg::default().accel_floor;
    for sin in [1e-3, 1e-5, 1e-7, 1e-8, 1e-9, 1e-10, 1e-11, 1e-13] {
        let b = vector![2.0, 2.0 * sin];
        let sol = solve_equal_time_tilt(p, a, b).unwrap();
        match sol.branch {
            TiltBranch::Solved => {
                assert!(sol.accelerations.iter().all(|&acc| acc >= floor), "sin {sin}");
                assert!(sol.time_mismatch() <= 1e-6, "sin {sin}");
            }
            TiltBranch::CollinearFallback => {
                assert_eq!(sol.ghat.into_inner(), vector![1.0, 0.0], "sin {sin}");
            }
        }
    }
    // well above the floor the regular solve must survive
    for sin in [1e-3, 1e-5, 1e-7] {
        let sol = solve_equal_time_tilt(p, a, vector![2.0, 2.0 * sin]).unwrap();
        assert_eq!(sol.branch, TiltBranch::Solved, "sin {sin}");
    }
    // between the determinant threshold and the floor: fallback, not a floored solve
    for sin in [1e-10, 1e-11] {
        let sol = solve_equal_time_tilt(p, a, vector![2.0, 2.0 * sin]).unwrap();
        assert_eq!(sol.branch, TiltBranch::CollinearFallback, "sin {sin}");
    }
}

#[test]
fn zero_rail_is_domain_error() {
    let (a, b) = goal();
    let err = solve_equal_time_tilt(a, a, b).unwrap_err();
    assert_eq!(err, GeomError::ZeroRail { target: Target::A });
    assert!(err.is_domain());
    let err = solve_equal_time_tilt(b, a, b).unwrap_err();
    assert_eq!(err, GeomError::ZeroRail { target: Target::B });
}

#[test]
fn repeated_solves_are_bit_identical() {
    let (a, b) = goal();
    let p = tangent_source();
    let first = solve_equal_time_tilt(p, a, b).unwrap();
    for _ in 0..5 {
        assert_eq!(solve_equal_time_tilt(p, a, b).unwrap(), first);
    }
}

#[test]
fn gravity_scaling() {
    let (a, b) = goal();
    let sol = solve_equal_time_tilt(tangent_source(), a, b).unwrap();
    let t = sol.arrival_time_for_gravity(4.0).unwrap();
    assert!((t - 0.5 * sol.arrival_time).abs() < 1e-12);
    assert!(matches!(
        sol.arrival_time_for_gravity(0.0),
        Err(GeomError::NonPositiveGravity { .. })
    ));
    assert!((sol.rail_time(Target::B) - sol.arrival_times()[1]).abs() < 1e-15);
}

#[test]
fn rail_endpoints_are_exact() {
    let (a, b) = goal();
    let p = tangent_source();
    assert_eq!(rail_position(0.0, p, a), p);
    assert_eq!(rail_position(0.0, p, b), p);
    assert_eq!(rail_position(1.0, p, a), a);
    assert_eq!(rail_position(1.0, p, b), b);
    let mid = rail_position(0.5, p, a);
    assert!((mid - (p + (a - p) * 0.25)).norm() < 1e-12);
    // extrapolates past the target
    let beyond = rail_position(2.0, vector![0.0, 0.0], vector![1.0, 0.0]);
    assert!((beyond - vector![4.0, 0.0]).norm() < 1e-12);
}

#[test]
fn rails_sweep_shares_the_squared_fraction() {
    let (a, b) = goal();
    let sol = solve_equal_time_tilt(tangent_source(), a, b).unwrap();
    let rails = Rails::new(&sol, a, b);
    let frames = rails.sweep(150).unwrap();
    assert_eq!(frames.len(), 150);
    assert_eq!(frames[0].tau, 0.0);
    assert_eq!(frames[149].tau, 1.0);
    assert_eq!(frames[149].a, a);
    assert_eq!(frames[149].b, b);
    let mut prev = [0.0, 0.0];
    for s in &frames {
        let da = (s.a - sol.source).norm();
        let db = (s.b - sol.source).norm();
        // same fraction of each rail at every instant
        assert!((da / sol.distances[0] - db / sol.distances[1]).abs() < 1e-12);
        assert!(da + 1e-12 >= prev[0] && db + 1e-12 >= prev[1]);
        assert!(da <= sol.distances[0] + 1e-12 && db <= sol.distances[1] + 1e-12);
        prev = [da, db];
        let covered = rails.distance_covered(s.tau);
        let f = s.tau * s.tau;
        assert!((covered[0] - sol.distances[0] * f).abs() <= 1e-9 * sol.distances[0]);
        assert!((covered[1] - sol.distances[1] * f).abs() <= 1e-6 * sol.distances[1]);
    }
    assert!(matches!(rails.sweep(1), Err(GeomError::TooFewSamples { .. })));
}

#[test]
fn plane_descends_along_ghat() {
    let (a, b) = goal();
    let p = tangent_source();
    let sol = solve_equal_time_tilt(p, a, b).unwrap();
    let plane = TiltedPlane {
        ghat: sol.ghat,
        scale: 0.15,
    };
    let downhill = p + sol.ghat.into_inner() * 10.0;
    assert!(plane.height(downhill) < plane.height(p));
    assert!((plane.height(p) - plane.height(downhill) - 1.5).abs() < 1e-12);
    // both pucks end lower than they start
    let rails = Rails::new(&sol, a, b);
    let [start_a, start_b] = rails.sample_3d(0.0, &plane);
    let [end_a, end_b] = rails.sample_3d(1.0, &plane);
    assert!(end_a.z < start_a.z && end_b.z < start_b.z);
    assert_eq!(start_a, start_b);
}

#[test]
fn seeded_random_triangles_have_equal_times() {
    let cfg = TriangleCfg::default();
    for index in 0..64 {
        let tri = draw_triangle(&cfg, ReplayToken { seed: 7, index });
        let sol = solve_equal_time_tilt(tri.source, tri.a, tri.b).unwrap();
        assert_eq!(sol.branch, TiltBranch::Solved);
        assert!(sol.time_mismatch() <= 1e-6, "index {index}");
    }
}

proptest! {
    #[test]
    fn equal_times_for_non_degenerate_input(
        px in -40.0..40.0f64, py in -40.0..40.0f64,
        ax in -40.0..40.0f64, ay in -40.0..40.0f64,
        bx in -40.0..40.0f64, by in -40.0..40.0f64,
    ) {
        let (p, a, b) = (vector![px, py], vector![ax, ay], vector![bx, by]);
        let va = a - p;
        let vb = b - p;
        prop_assume!(va.norm() > 1e-2 && vb.norm() > 1e-2);
        let sin = (va.x * vb.y - va.y * vb.x) / (va.norm() * vb.norm());
        prop_assume!(sin.abs() > 1e-3);
        let sol = solve_equal_time_tilt(p, a, b).unwrap();
        prop_assert_eq!(sol.branch, TiltBranch::Solved);
        prop_assert!((sol.ghat.norm() - 1.0).abs() < 1e-12);
        let [ta, tb] = sol.arrival_times();
        prop_assert!((ta - tb).abs() <= 1e-6 * ta.max(tb));
    }

    #[test]
    fn rail_position_is_monotone_on_unit_interval(
        t0 in 0.0..1.0f64, t1 in 0.0..1.0f64,
        tx in -50.0..50.0f64, ty in -50.0..50.0f64,
    ) {
        let p = vector![1.0, -2.0];
        let target = vector![tx, ty];
        let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        let d_lo = (rail_position(lo, p, target) - p).norm();
        let d_hi = (rail_position(hi, p, target) - p).norm();
        prop_assert!(d_lo <= d_hi + 1e-12);
        prop_assert!(d_hi <= (target - p).norm() + 1e-12);
    }
}
