// Host-side tests for orbit stepping.

use orrery_core::{position_at, Orbit};
use std::f32::consts::TAU;

const EPS: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn angle_advances_by_speed_times_frames() {
    let mut orbit = Orbit::new(46.0, 0.004, 0.3);
    orbit.advance(120.0);
    assert!(approx(orbit.angle, 0.3 + 120.0 * 0.004));
}

#[test]
fn stepping_granularity_does_not_change_the_result() {
    let mut coarse = Orbit::new(66.0, 0.003, 2.1);
    let mut fine = coarse;
    let mut fractional = coarse;

    coarse.advance(60.0);
    for _ in 0..60 {
        fine.advance(1.0);
    }
    for _ in 0..240 {
        fractional.advance(0.25);
    }

    assert!(approx(coarse.angle, fine.angle));
    assert!(approx(coarse.angle, fractional.angle));
    assert!((coarse.position() - fine.position()).length() < 1e-2);
    assert!((coarse.position() - fractional.position()).length() < 1e-2);
}

#[test]
fn position_stays_on_the_ecliptic_at_orbit_distance() {
    let mut orbit = Orbit::new(88.0, 0.0022, 4.0);
    for _ in 0..500 {
        orbit.advance(1.0);
        let p = orbit.position();
        assert_eq!(p.y, 0.0);
        assert!((p.length() - 88.0).abs() < 1e-3);
    }
}

#[test]
fn full_turn_returns_to_the_same_place() {
    let a = position_at(112.0, 5.4);
    let b = position_at(112.0, 5.4 + TAU);
    assert!((a - b).length() < 1e-3);
}

#[test]
fn zero_frames_is_a_no_op() {
    let mut orbit = Orbit::new(46.0, 0.004, 0.3);
    orbit.advance(0.0);
    assert_eq!(orbit.angle, 0.3);
}
