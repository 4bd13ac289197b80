use double_pendulum::{DoublePendulum, Equations, PendulumConfig, PendulumState, Scheme};

fn run(config: PendulumConfig<f64>, steps: usize) -> PendulumState<f64> {
    let mut pendulum = DoublePendulum::new(config).unwrap();
    pendulum.step_n(steps);
    *pendulum.state()
}

#[test]
fn reference_run_is_bit_identical() {
    let results: Vec<_> = (0..10).map(|_| run(PendulumConfig::reference(), 1000)).collect();

    for r in &results[1..] {
        assert_eq!(results[0].theta1.to_bits(), r.theta1.to_bits());
        assert_eq!(results[0].theta2.to_bits(), r.theta2.to_bits());
        assert_eq!(results[0].omega1.to_bits(), r.omega1.to_bits());
        assert_eq!(results[0].omega2.to_bits(), r.omega2.to_bits());
    }
}

#[test]
fn every_variant_is_deterministic() {
    let variants = [
        (Scheme::SemiImplicitEuler, Equations::Reference),
        (Scheme::SemiImplicitEuler, Equations::Lagrangian),
        (Scheme::ExplicitEuler, Equations::Reference),
        (Scheme::ExplicitEuler, Equations::Lagrangian),
    ];
    for (scheme, equations) in variants {
        let config = PendulumConfig::reference()
            .with_scheme(scheme)
            .with_equations(equations)
            .with_angles(2.0, -0.5)
            .with_velocities(0.3, -0.1);
        let a = run(config, 500);
        let b = run(config, 500);
        assert_eq!(a, b, "{:?}/{:?} diverged between runs", scheme, equations);
    }
}

#[test]
fn stepping_in_batches_matches_single_steps() {
    let mut one_by_one: DoublePendulum<f64> = DoublePendulum::reference();
    for _ in 0..300 {
        one_by_one.step();
    }

    let mut batched: DoublePendulum<f64> = DoublePendulum::reference();
    batched.step_n(100);
    batched.step_n(200);

    assert_eq!(one_by_one.state(), batched.state());
    assert_eq!(one_by_one.steps(), batched.steps());
}

#[test]
fn nearby_starts_diverge() {
    // Chaotic: a 1e-9 rad nudge grows to a visible difference within 2000 steps.
    let base = PendulumConfig::reference()
        .with_equations(Equations::Lagrangian)
        .with_lengths(1.0, 1.0)
        .with_masses(1.0, 1.0)
        .with_dt(0.005)
        .with_angles(2.5, 2.5);
    let a = run(base, 2000);
    let b = run(base.with_angles(2.5 + 1e-9, 2.5), 2000);
    let separation = (a.theta2 - b.theta2).abs();
    assert!(separation > 1e-4, "separation {} should dwarf the initial nudge", separation);
}
