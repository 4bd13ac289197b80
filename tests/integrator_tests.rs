use core::f64::consts::{FRAC_PI_2, PI};
use double_pendulum::{DoublePendulum, Equations, Frame, PendulumConfig, Vec2};

const EPS: f64 = 1e-9;

#[test]
fn hanging_at_rest_stays_at_rest() {
    let config = PendulumConfig::reference().with_angles(0.0, 0.0);
    let mut pendulum: DoublePendulum<f64> = DoublePendulum::new(config).unwrap();

    for _ in 0..1000 {
        pendulum.step();
        let s = pendulum.state();
        assert_eq!(s.theta1, 0.0);
        assert_eq!(s.theta2, 0.0);
        assert_eq!(s.omega1, 0.0);
        assert_eq!(s.omega2, 0.0);
    }
}

#[test]
fn reference_positions_before_first_step() {
    let pendulum: DoublePendulum<f64> = DoublePendulum::reference();
    let p = pendulum.positions();

    assert_eq!(p.pivot, Vec2::new(400.0, 150.0));
    assert!((p.bob1.x - 600.0).abs() < EPS && (p.bob1.y - 150.0).abs() < EPS, "bob1 = {:?}", p.bob1);
    // Rod 2 is horizontal too, so bob 2 sits a further l2 to the right.
    assert!((p.bob2.x - 750.0).abs() < EPS && (p.bob2.y - 150.0).abs() < EPS, "bob2 = {:?}", p.bob2);
}

#[test]
fn reference_first_step() {
    let mut pendulum: DoublePendulum<f64> = DoublePendulum::reference();
    pendulum.step();
    let s = pendulum.state();

    // a1 = (m2·g − (m1+m2)·g) / (l1·m1) = −0.04905, so ω1 = a1·dt.
    assert!((s.omega1 + 0.000981).abs() < 1e-15, "omega1 = {}", s.omega1);
    // With both rods horizontal the second rod feels no net torque yet.
    assert!(s.omega2.abs() < 1e-15, "omega2 = {}", s.omega2);
    // Angles move by the new velocities times dt.
    assert!((s.theta1 - (FRAC_PI_2 + s.omega1 * 0.02)).abs() < 1e-15);
    assert!((s.theta2 - (FRAC_PI_2 + s.omega2 * 0.02)).abs() < 1e-15);

    // l1·|ω1| equals g·dt here, so the l1·ω1²·sinΔ term still cancels gravity on rod 2.
    pendulum.step();
    assert_eq!(pendulum.state().omega2, 0.0, "rod 2 is still at rest after two steps");

    pendulum.step();
    let omega2 = pendulum.state().omega2;
    assert!((omega2 - 3.02e-12).abs() < 0.05e-12, "omega2 after three steps = {}", omega2);
}

#[test]
fn semi_implicit_uses_updated_velocity() {
    let mut semi: DoublePendulum<f64> = DoublePendulum::reference();
    let mut explicit: DoublePendulum<f64> = DoublePendulum::new(
        PendulumConfig::reference().with_scheme(double_pendulum::Scheme::ExplicitEuler),
    )
    .unwrap();
    semi.step();
    explicit.step();

    // Same velocities, but only the semi-implicit step moved the angle.
    assert_eq!(semi.state().omega1, explicit.state().omega1);
    assert_eq!(explicit.state().theta1, FRAC_PI_2);
    assert!(semi.state().theta1 < FRAC_PI_2);
}

#[test]
fn positions_are_a_pure_read() {
    let mut pendulum: DoublePendulum<f64> = DoublePendulum::reference();
    pendulum.step_n(37);
    let state = *pendulum.state();
    let first = pendulum.positions();
    let second = pendulum.positions();
    assert_eq!(first, second);
    assert_eq!(&state, pendulum.state());
}

#[test]
fn rod_lengths_hold_every_step() {
    let mut pendulum: DoublePendulum<f64> = DoublePendulum::reference();
    for step in 0..2000 {
        let p = pendulum.positions();
        let r1 = p.pivot.distance(p.bob1);
        let r2 = p.bob1.distance(p.bob2);
        assert!((r1 - 200.0).abs() < EPS, "step {}: |P1-P0| = {}", step, r1);
        assert!((r2 - 150.0).abs() < EPS, "step {}: |P2-P1| = {}", step, r2);
        pendulum.step();
    }
}

#[test]
fn angles_are_never_wrapped() {
    let config = PendulumConfig::reference()
        .with_equations(Equations::Lagrangian)
        .with_angles(0.0, 0.0)
        .with_velocities(5.0, 5.0);
    let mut pendulum: DoublePendulum<f64> = DoublePendulum::new(config).unwrap();
    pendulum.step_n(200);
    let s = pendulum.state();
    assert!(s.theta1 > 4.0 * PI, "theta1 = {}", s.theta1);
    assert!(s.theta2 > 4.0 * PI, "theta2 = {}", s.theta2);
}

#[test]
fn y_up_frame_mirrors_vertical_only() {
    let base = PendulumConfig::reference().with_angles(0.4, -1.1);
    let down: DoublePendulum<f64> = DoublePendulum::new(base).unwrap();
    let up: DoublePendulum<f64> = DoublePendulum::new(base.with_frame(Frame::YUp)).unwrap();

    let (d, u) = (down.positions(), up.positions());
    assert_eq!(d.pivot, u.pivot);
    for (a, b) in [(d.bob1, u.bob1), (d.bob2, u.bob2)] {
        assert!((a.x - b.x).abs() < EPS);
        assert!(((a.y - d.pivot.y) + (b.y - u.pivot.y)).abs() < EPS);
    }
    // Hanging side: below the pivot means larger y on screen, smaller y in the math frame.
    assert!(d.bob1.y > d.pivot.y);
    assert!(u.bob1.y < u.pivot.y);
}

#[test]
fn frame_does_not_change_physics() {
    let base = PendulumConfig::reference().with_angles(1.0, 2.0);
    let mut down: DoublePendulum<f64> = DoublePendulum::new(base).unwrap();
    let mut up: DoublePendulum<f64> = DoublePendulum::new(base.with_frame(Frame::YUp)).unwrap();
    down.step_n(250);
    up.step_n(250);
    assert_eq!(down.state(), up.state());
}

#[test]
fn single_precision_tracks_double() {
    let mut single: DoublePendulum<f32> = DoublePendulum::reference();
    let mut double: DoublePendulum<f64> = DoublePendulum::reference();
    single.step_n(20);
    double.step_n(20);
    assert!((single.state().theta1 as f64 - double.state().theta1).abs() < 1e-4);
    assert!((single.state().omega1 as f64 - double.state().omega1).abs() < 1e-4);
}
