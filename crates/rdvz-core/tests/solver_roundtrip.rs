mod common;

use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use common::assert_mat3_abs_eq;
use rdvz_core::cw::solve::{solve_initial_velocity, solve_rendezvous};
use rdvz_core::cw::{build_matrices, propagate_state};
use rdvz_core::{plan_rendezvous, Mat3, PhysicalConstants, RdvzError, Scenario, Vec3};

#[test]
fn inverse_times_matrix_is_identity() {
    let m = build_matrices(1.133e-3, 3600.0).unwrap();
    let inv = m.b.inverse(1e-6).unwrap();
    assert_mat3_abs_eq(&(inv * m.b), &Mat3::IDENTITY, 1e-9);
    assert_mat3_abs_eq(&(m.b * inv), &Mat3::IDENTITY, 1e-9);
}

#[test]
fn solved_velocity_lands_on_origin() {
    let cases = [
        (1.133e-3, 3600.0, Vec3::new(100_000.0, 100_000.0, 100_000.0)),
        (1.133e-3, 900.0, Vec3::new(-5_000.0, 200.0, 1_000.0)),
        (1.0e-3, 4000.0, Vec3::new(2_500.0, -7_500.0, -300.0)),
    ];
    for (w, t, p0) in cases {
        let v0 = solve_rendezvous(w, t, p0).unwrap();
        let end = propagate_state(w, t, p0, v0).unwrap();
        assert_abs_diff_eq!(end.position.norm(), 0.0, epsilon = 1e-6 * p0.norm());
    }
}

#[test]
fn full_period_transfer_is_singular() {
    let w = 1.133e-3;
    let t = 2.0 * PI / w;
    let p0 = Vec3::new(100_000.0, 100_000.0, 100_000.0);

    let m = build_matrices(w, t).unwrap();
    match solve_initial_velocity(&m, p0) {
        Err(RdvzError::SingularSystem { determinant }) => {
            assert_abs_diff_eq!(determinant, 0.0, epsilon = 1e-6)
        }
        other => panic!("expected SingularSystem, got {other:?}"),
    }
}

#[test]
fn default_scenario_is_solvable() {
    let plan = plan_rendezvous(&Scenario::default(), &PhysicalConstants::default()).unwrap();

    assert_abs_diff_eq!(plan.orbit.angular_rate, 1.13316e-3, epsilon = 1e-8);
    assert!(plan.initial_state.velocity.is_finite());
    assert_abs_diff_eq!(plan.terminal_miss(), 0.0, epsilon = 1e-3);

    let m = build_matrices(plan.orbit.angular_rate, 3600.0).unwrap();
    assert!(m.b.determinant().abs() > 1e-6);
}

#[test]
fn zero_altitude_and_rate_is_degenerate() {
    let mut s = Scenario::default();
    s.altitude = 0.0;
    s.angular_rate = 0.0;
    let err = plan_rendezvous(&s, &PhysicalConstants::default()).unwrap_err();
    assert!(matches!(err, RdvzError::DegenerateOrbit));
}

#[test]
fn rate_only_scenario_matches_altitude_scenario() {
    let c = PhysicalConstants::default();
    let by_alt = plan_rendezvous(&Scenario::default(), &c).unwrap();

    let mut s = Scenario::default();
    s.altitude = 0.0;
    s.angular_rate = by_alt.orbit.angular_rate;
    let by_rate = plan_rendezvous(&s, &c).unwrap();

    let dv = (by_rate.initial_state.velocity - by_alt.initial_state.velocity).norm();
    assert_abs_diff_eq!(dv, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(by_rate.orbit.altitude, 400_000.0, epsilon = 1e-3);
}
